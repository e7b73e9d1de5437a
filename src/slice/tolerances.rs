use crate::math::{Point, Real};

/// Tolerances of the slicing pipeline.
///
/// The two thresholds are independent and expressed in different ways: one is a squared
/// distance between two points, the other a plain distance between a point and an edge.
///
/// # Examples
///
/// ```
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// # use polyslice2d::slice::SliceTolerances;
/// // Use default tolerances, tuned for worlds measured in pixels.
/// let default_tol = SliceTolerances::default();
///
/// // Or scale them down for worlds measured in meters.
/// let custom_tol = SliceTolerances {
///     coincidence_epsilon_sq: 5.0e-4,
///     edge_epsilon: 1.0e-2,
/// };
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SliceTolerances {
    /// Two points whose squared distance is below this value are considered to be the
    /// same point.
    ///
    /// This cancels the duplicate hits reported by the forward and reverse casts, and
    /// removes polygon vertices lying right on the cut.
    ///
    /// Distinct boundary crossings closer than the square root of this value cancel too,
    /// e.g. both walls of a notch narrower than that. The remaining hits may then pair
    /// across the notch and produce fragments that overlap or self-intersect, so this
    /// value must stay below the squared width of the thinnest feature being cut.
    pub coincidence_epsilon_sq: Real,
    /// A point closer than this distance to a polygon edge is considered to lie on it.
    pub edge_epsilon: Real,
}

impl Default for SliceTolerances {
    fn default() -> Self {
        Self {
            coincidence_epsilon_sq: 5.0,
            edge_epsilon: 1.0,
        }
    }
}

impl SliceTolerances {
    /// Whether two ray hits located at `a` and `b` describe the same boundary crossing.
    #[inline]
    pub fn is_same_crossing(&self, a: &Point<Real>, b: &Point<Real>) -> bool {
        na::distance_squared(a, b) <= self.coincidence_epsilon_sq
    }

    /// Whether a ring vertex at `pt` is too close to the cut point `cut` to be kept.
    #[inline]
    pub fn is_on_cut_point(&self, pt: &Point<Real>, cut: &Point<Real>) -> bool {
        na::distance_squared(pt, cut) < self.coincidence_epsilon_sq
    }
}
