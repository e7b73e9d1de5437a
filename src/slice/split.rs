use crate::math::{Point, Real};
use crate::shape::Segment;
use crate::slice::{Fragment, PendingSet, SliceTolerances};

/// Reasons why a pair of split points was not used to split a polygon.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum SplitError {
    /// No edge of the polygon lies close enough to the split point.
    #[error("no polygon edge lies within tolerance of the split point {point:?}")]
    UnmatchedInsertionEdge {
        /// The split point, in the polygon's local space.
        point: Point<Real>,
    },
    /// Both split points lie on the same edge, so the cut does not cross the polygon.
    #[error("both split points lie on the polygon edge {edge}")]
    SameInsertionEdge {
        /// The index of the first vertex of the edge.
        edge: usize,
    },
}

/// Splits a polygon along successive pairs of points located on its boundary.
///
/// Each split replaces the pending fragment crossed by the pair with two fragments
/// sharing the cut edge. Fragments refer to the original vertices by index until they
/// are resolved.
///
/// ```
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// use polyslice2d::math::Point;
/// use polyslice2d::slice::{PolygonSplitter, SliceTolerances};
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let mut splitter = PolygonSplitter::new(&square, SliceTolerances::default());
/// splitter
///     .split(Point::new(0.0, 5.0), Point::new(10.0, 5.0))
///     .unwrap();
///
/// let fragments = splitter.into_pending().into_fragments();
/// assert_eq!(fragments.len(), 2);
/// assert_eq!(
///     fragments[0].resolve(&square),
///     vec![
///         Point::new(0.0, 5.0),
///         Point::new(10.0, 5.0),
///         Point::new(10.0, 10.0),
///         Point::new(0.0, 10.0),
///     ]
/// );
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PolygonSplitter<'a> {
    vertices: &'a [Point<Real>],
    tolerances: SliceTolerances,
    pending: PendingSet,
    num_splits: usize,
}

impl<'a> PolygonSplitter<'a> {
    /// Prepares the split of the polygon with the given local-space `vertices`.
    pub fn new(vertices: &'a [Point<Real>], tolerances: SliceTolerances) -> Self {
        Self {
            vertices,
            tolerances,
            pending: PendingSet::new(vertices.len()),
            num_splits: 0,
        }
    }

    /// The index of the first polygon edge lying within [`SliceTolerances::edge_epsilon`]
    /// of `pt`.
    ///
    /// Edge `i` goes from vertex `i` to vertex `i + 1` (modulo the number of vertices).
    pub fn insertion_edge(&self, pt: &Point<Real>) -> Option<usize> {
        let n = self.vertices.len();
        (0..n).find(|&i| {
            Segment::new(self.vertices[i], self.vertices[(i + 1) % n]).distance_to_point(pt)
                < self.tolerances.edge_epsilon
        })
    }

    /// Splits the pending fragment crossed by the cut going from `point1` to `point2`.
    ///
    /// Both points are given in the polygon's local space. On error, the pending fragments
    /// are left untouched.
    pub fn split(&mut self, point1: Point<Real>, point2: Point<Real>) -> Result<(), SplitError> {
        let edge1 = self
            .insertion_edge(&point1)
            .ok_or(SplitError::UnmatchedInsertionEdge { point: point1 })?;
        let edge2 = self
            .insertion_edge(&point2)
            .ok_or(SplitError::UnmatchedInsertionEdge { point: point2 })?;

        if edge1 == edge2 {
            return Err(SplitError::SameInsertionEdge { edge: edge1 });
        }

        let (ring, pos1, pos2) = match self.pending.take_containing(edge1, edge2) {
            Some(found) => found,
            None => {
                log::debug!(
                    "No pending fragment holds both edges {} and {}, splitting the whole polygon.",
                    edge1,
                    edge2
                );
                (Fragment::full_ring(self.vertices.len()), edge1, edge2)
            }
        };

        // Both fragments keep the orientation of the ring: one walks from the second
        // cut point back to the first, the other from the first to the second.
        let mut first = Fragment::from_cut(point1, point2);
        self.extend_with_arc(&mut first, &ring, pos2, pos1, &point1, &point2);
        let mut second = Fragment::from_cut(point2, point1);
        self.extend_with_arc(&mut second, &ring, pos1, pos2, &point1, &point2);

        self.pending.push(first);
        self.pending.push(second);
        self.num_splits += 1;

        Ok(())
    }

    /// Appends to `out` the vertices of `ring` at positions `from + 1` through `to`,
    /// wrapping around, except those lying on one of the cut points.
    fn extend_with_arc(
        &self,
        out: &mut Fragment,
        ring: &Fragment,
        from: usize,
        to: usize,
        point1: &Point<Real>,
        point2: &Point<Real>,
    ) {
        let n = ring.len();
        let len = (to + n - from) % n;

        for k in 1..=len {
            let vertex = ring.vertices()[(from + k) % n];
            let pt = vertex.resolve(self.vertices);

            if self.tolerances.is_on_cut_point(&pt, point1)
                || self.tolerances.is_on_cut_point(&pt, point2)
            {
                log::trace!("Skipping the vertex {:?}: it lies on the cut.", pt);
                continue;
            }

            out.push(vertex);
        }
    }

    /// The number of successful splits so far.
    #[inline]
    pub fn num_splits(&self) -> usize {
        self.num_splits
    }

    /// The fragments not finalized yet.
    #[inline]
    pub fn pending(&self) -> &PendingSet {
        &self.pending
    }

    /// The vertices of the polygon being split.
    #[inline]
    pub fn vertices(&self) -> &'a [Point<Real>] {
        self.vertices
    }

    /// Consumes this splitter and returns its pending fragments.
    pub fn into_pending(self) -> PendingSet {
        self.pending
    }
}
