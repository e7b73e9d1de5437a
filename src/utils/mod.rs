//! Various unsorted geometrical and logical operators.

pub use self::segments_intersection::segments_intersection2d;

mod segments_intersection;
