//! Traits and structures needed to cast the cut line against a physics world.

use crate::math::{Point, Real};

/// Which hits a [`RayCastProvider`] reports for one cast.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RayCastMode {
    /// Only the hit nearest to the cast origin.
    Closest,
    /// Every hit along the cast segment.
    All,
}

/// One point where a cast segment struck a collider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayHit<H> {
    /// The hit point, in world-space.
    pub point: Point<Real>,
    /// Position of the hit along the cast, `0` being the cast origin and `1` its destination.
    pub fraction: Real,
    /// The collider that was hit.
    pub target: H,
}

impl<H> RayHit<H> {
    /// Creates a new ray hit.
    #[inline]
    pub fn new(point: Point<Real>, fraction: Real, target: H) -> Self {
        Self {
            point,
            fraction,
            target,
        }
    }

    /// The same hit, with its fraction measured from the other end of the cast.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            fraction: 1.0 - self.fraction,
            ..self
        }
    }
}

/// A physics world able to cast straight segments against its colliders.
///
/// Casting from `dest` to `origin` must report the hits of the opposite traversal of the
/// same segment. Most physics engines only report the boundary crossings where the cast
/// *enters* a collider, so the slicing pipeline always casts both ways.
pub trait RayCastProvider<H> {
    /// Casts the segment `[origin, dest]` and returns its hits ordered by increasing
    /// fraction.
    fn cast_segment(
        &self,
        origin: &Point<Real>,
        dest: &Point<Real>,
        mode: RayCastMode,
    ) -> Vec<RayHit<H>>;
}
