/*!
polyslice2d
===========

**polyslice2d** implements the slice mechanic of 2D physics-based cutting
games: a straight cut line drawn across the screen splits every polygonal
body it crosses into two or more polygons that replace it.

The physics world is never owned by this crate. Ray casting, collider access
and entity cloning are injected through the traits of the [`query`] and
[`scene`] modules, and [`scene::SliceWorld`] provides an in-memory
implementation of all of them.

```
# #[cfg(all(feature = "dim2", feature = "f32"))] {
use polyslice2d::math::{Isometry, Point};
use polyslice2d::scene::SliceWorld;
use polyslice2d::slice::Slicer;

let mut world = SliceWorld::new();
let square = world
    .insert_polygon(
        Isometry::identity(),
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ],
    )
    .unwrap();

let reports = Slicer::default()
    .cut(&mut world, &Point::new(-5.0, 5.0), &Point::new(15.0, 5.0))
    .unwrap();

assert_eq!(reports.len(), 1);
assert_eq!(reports[0].target, square);
assert_eq!(reports[0].spawned.len(), 1);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::type_complexity)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod scene;
pub mod shape;
pub mod slice;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Point2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;
}
