//! Shapes supported by the slicing pipeline.

pub use self::polygon::{signed_area, Polygon, PolygonError, Winding};
pub use self::segment::Segment;

mod polygon;
mod segment;
