use crate::math::{Isometry, Point, Real};
use crate::shape::Segment;
use crate::utils;

/// Errors raised when building a [`Polygon`].
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum PolygonError {
    /// A closed ring needs at least three vertices.
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// The orientation of a closed ring of points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Winding {
    /// The ring turns counter-clockwise (positive signed area).
    CounterClockwise,
    /// The ring turns clockwise (negative signed area).
    Clockwise,
    /// The ring encloses no area.
    Degenerate,
}

/// Signed area of the closed ring `points`, computed with the shoelace formula.
///
/// The area is positive for counter-clockwise rings and negative for clockwise ones.
pub fn signed_area(points: &[Point<Real>]) -> Real {
    let mut area = 0.0;

    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        area += a.coords.perp(&b.coords);
    }

    area / 2.0
}

/// A simple polygon given by a closed ring of vertices.
///
/// The edges of the polygon are `(vertices[i], vertices[(i + 1) % n])`. The winding
/// order of the vertices is kept as-is: no operation of this crate reverses it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
}

impl Polygon {
    /// Creates a polygon from the closed ring `vertices`.
    ///
    /// Fails if less than three vertices are given. Simplicity of the ring is not checked,
    /// see [`Polygon::is_simple`].
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }

        Ok(Self { vertices })
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// Consumes this polygon and returns its vertices.
    pub fn into_vertices(self) -> Vec<Point<Real>> {
        self.vertices
    }

    /// The number of vertices (and edges) of this polygon.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The `i`-th edge of this polygon, going from vertex `i` to vertex `i + 1` (modulo the
    /// number of vertices).
    pub fn edge(&self, i: usize) -> Segment {
        let n = self.vertices.len();
        Segment::new(self.vertices[i % n], self.vertices[(i + 1) % n])
    }

    /// Iterates through all the edges of this polygon, in order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        (0..self.vertices.len()).map(|i| self.edge(i))
    }

    /// The signed area of this polygon.
    pub fn signed_area(&self) -> Real {
        signed_area(&self.vertices)
    }

    /// The area of this polygon.
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    /// The orientation of this polygon's vertices.
    pub fn winding(&self) -> Winding {
        let area = self.signed_area();

        if relative_eq!(area, 0.0) {
            Winding::Degenerate
        } else if area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// Returns a copy of this polygon with all its vertices transformed by `m`.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|pt| m * pt).collect(),
        }
    }

    /// Checks that no two non-adjacent edges of this polygon cross each other.
    pub fn is_simple(&self) -> bool {
        let n = self.vertices.len();

        for i in 0..n {
            let e1 = self.edge(i);

            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    // The last edge is adjacent to the first one.
                    continue;
                }

                let e2 = self.edge(j);
                if utils::segments_intersection2d(&e1.a, &e1.b, &e2.a, &e2.b, 1.0e-7).is_some() {
                    return false;
                }
            }
        }

        true
    }
}
