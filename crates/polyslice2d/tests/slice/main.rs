#[macro_use]
extern crate approx;

mod area_conservation;
mod hit_handling;
mod scripted;

use polyslice2d::math::{Point, Real};
use polyslice2d::scene::{BodyHandle, SliceWorld};

pub fn square() -> Vec<Point<Real>> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]
}

// Opened upward.
pub fn u_shape() -> Vec<Point<Real>> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(30.0, 0.0),
        Point::new(30.0, 20.0),
        Point::new(20.0, 20.0),
        Point::new(20.0, 10.0),
        Point::new(10.0, 10.0),
        Point::new(10.0, 20.0),
        Point::new(0.0, 20.0),
    ]
}

pub fn assert_ring_eq(actual: &[Point<Real>], expected: &[Point<Real>]) {
    assert_eq!(actual.len(), expected.len(), "{:?} != {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(a, e, epsilon = 1.0e-4);
    }
}

/// A ring rounded to a grid and rotated to start at its smallest vertex, so that rings
/// describing the same polygon compare equal.
pub fn normalized_ring(ring: &[Point<Real>]) -> Vec<(i64, i64)> {
    let mut keys: Vec<_> = ring
        .iter()
        .map(|pt| {
            (
                (pt.x * 1000.0).round() as i64,
                (pt.y * 1000.0).round() as i64,
            )
        })
        .collect();

    if let Some(start) = (0..keys.len()).min_by_key(|&i| keys[i]) {
        keys.rotate_left(start);
    }

    keys
}

/// The normalized rings of every polygon of the scene, sorted.
pub fn scene_rings(world: &SliceWorld) -> Vec<Vec<(i64, i64)>> {
    let mut rings: Vec<_> = world
        .handles()
        .filter_map(|handle: BodyHandle| world.world_polygon(handle))
        .map(|polygon| normalized_ring(polygon.vertices()))
        .collect();
    rings.sort();
    rings
}
