use crate::math::{Point, Real};

/// Computes the intersection between the segments `[a, b]` and `[c, d]`.
///
/// Returns the parameters `(s, t)` such that the intersection point is equal to
/// `a + (b - a) * s` and to `c + (d - c) * t`, both parameters lying in `[0, 1]`.
///
/// Parallel segments, including collinear overlapping ones, have no single crossing
/// and yield `None`. Two segments are considered parallel if the magnitude of the
/// cross product of their directions is smaller than `epsilon`.
pub fn segments_intersection2d(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    epsilon: Real,
) -> Option<(Real, Real)> {
    let ab = b - a;
    let cd = d - c;
    let denom = ab.perp(&cd);

    // If denom is zero, then segments are parallel.
    if denom.abs() < epsilon || ulps_eq!(denom, 0.0) {
        return None;
    }

    let ac = c - a;
    let s = ac.perp(&cd) / denom;
    let t = ac.perp(&ab) / denom;

    if 0.0 > s || s > 1.0 || 0.0 > t || t > 1.0 {
        None
    } else {
        Some((s, t))
    }
}
