//! Definition of the segment shape.

use crate::math::{Isometry, Point, Real, Vector};

/// A segment shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The not-normalized normal of this segment, pointing to its right.
    ///
    /// This is the outward normal of the edge when the segment belongs to a
    /// counter-clockwise polygon.
    pub fn scaled_normal(&self) -> Vector<Real> {
        let dir = self.scaled_direction();
        Vector::new(dir.y, -dir.x)
    }

    /// Applies the isometry `m` to the vertices of this segment and returns the resulting segment.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Segment::new(m * self.a, m * self.b)
    }

    /// Projects `pt` on this segment, clamping the projection to the segment endpoints.
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        let ab = self.scaled_direction();
        let ap = pt - self.a;
        let ab_ap = ab.dot(&ap);
        let sqnab = ab.norm_squared();

        if ab_ap <= 0.0 {
            // Voronoï region of vertex 'a'.
            self.a
        } else if ab_ap >= sqnab {
            // Voronoï region of vertex 'b'.
            self.b
        } else {
            self.a + ab * (ab_ap / sqnab)
        }
    }

    /// The distance between `pt` and its projection on this segment.
    pub fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance(pt, &self.project_point(pt))
    }
}
