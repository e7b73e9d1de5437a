use crate::math::{Point, Real};

/// A vertex of a fragment under construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VertexRef {
    /// The vertex with this index in the original polygon.
    Index(usize),
    /// A new vertex, created where the cut line crosses the polygon boundary.
    Literal(Point<Real>),
}

impl VertexRef {
    /// The point this vertex refers to, given the vertices of the original polygon.
    ///
    /// # Panics
    ///
    /// Panics if this is an [`VertexRef::Index`] out of the bounds of `original`.
    #[inline]
    pub fn resolve(&self, original: &[Point<Real>]) -> Point<Real> {
        match *self {
            VertexRef::Index(i) => original[i],
            VertexRef::Literal(pt) => pt,
        }
    }
}

/// A closed ring of vertices, part of a polygon being sliced.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fragment {
    vertices: Vec<VertexRef>,
}

impl Fragment {
    /// Creates a fragment from its vertices.
    pub fn new(vertices: Vec<VertexRef>) -> Self {
        Self { vertices }
    }

    /// The fragment covering a whole polygon with `num_vertices` vertices.
    pub fn full_ring(num_vertices: usize) -> Self {
        Self::new((0..num_vertices).map(VertexRef::Index).collect())
    }

    /// A fragment starting with the cut edge going from `a` to `b`.
    pub fn from_cut(a: Point<Real>, b: Point<Real>) -> Self {
        Self::new(vec![VertexRef::Literal(a), VertexRef::Literal(b)])
    }

    /// Appends a vertex to this fragment.
    #[inline]
    pub fn push(&mut self, vertex: VertexRef) {
        self.vertices.push(vertex)
    }

    /// The vertices of this fragment.
    #[inline]
    pub fn vertices(&self) -> &[VertexRef] {
        &self.vertices
    }

    /// The number of vertices of this fragment.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether this fragment has no vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The position, in this fragment, of the original polygon vertex `index`.
    pub fn position_of_index(&self, index: usize) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| *v == VertexRef::Index(index))
    }

    /// The points of this fragment, given the vertices of the original polygon.
    pub fn resolve(&self, original: &[Point<Real>]) -> Vec<Point<Real>> {
        self.vertices.iter().map(|v| v.resolve(original)).collect()
    }
}

/// The fragments of a polygon not finalized yet, while its cut is being processed.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSet {
    fragments: Vec<Fragment>,
}

impl PendingSet {
    /// A pending set holding a single fragment covering a whole polygon with `num_vertices`
    /// vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            fragments: vec![Fragment::full_ring(num_vertices)],
        }
    }

    /// Removes and returns the first fragment referencing both original vertices `index1`
    /// and `index2`, along with the positions of these vertices in the fragment.
    pub fn take_containing(
        &mut self,
        index1: usize,
        index2: usize,
    ) -> Option<(Fragment, usize, usize)> {
        let (id, pos1, pos2) =
            self.fragments
                .iter()
                .enumerate()
                .find_map(|(id, fragment)| {
                    Some((
                        id,
                        fragment.position_of_index(index1)?,
                        fragment.position_of_index(index2)?,
                    ))
                })?;

        Some((self.fragments.remove(id), pos1, pos2))
    }

    /// Adds a fragment to this set.
    #[inline]
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment)
    }

    /// The fragments of this set.
    #[inline]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Consumes this set and returns its fragments.
    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }
}
