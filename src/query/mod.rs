//! Ray casting contract consumed by the slicing pipeline.

pub use self::ray::{RayCastMode, RayCastProvider, RayHit};

mod ray;
