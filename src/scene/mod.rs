//! Collider and entity contracts the slicing pipeline writes its results through.
//!
//! The pipeline never owns colliders: it reads their local vertices and writes the
//! resulting fragments back through [`ColliderAccess`], and spawns the extra fragments
//! through [`EntityLifecycle`]. [`SliceWorld`] implements both, along with
//! [`RayCastProvider`](crate::query::RayCastProvider), without any physics engine.

pub use self::world::{BodyHandle, BodyShape, SliceWorld, WorldError};

use crate::math::{Point, Real};

mod world;

/// Read and write access to the geometry of the colliders of a physics world.
pub trait ColliderAccess<H> {
    /// The error reported by the world when a write fails.
    type Error;

    /// The vertices of `collider`, in its local space.
    ///
    /// Returns `None` if `collider` does not exist or is not a polygon.
    fn local_vertices(&self, collider: H) -> Option<Vec<Point<Real>>>;

    /// Replaces the local-space vertices of `collider`.
    ///
    /// The new geometry is only committed to the physics representation by [`Self::apply`].
    fn set_local_vertices(
        &mut self,
        collider: H,
        vertices: Vec<Point<Real>>,
    ) -> Result<(), Self::Error>;

    /// Commits the geometry set with [`Self::set_local_vertices`].
    fn apply(&mut self, collider: H) -> Result<(), Self::Error>;

    /// Expresses the world-space point `pt` in the local space of `collider`.
    fn world_to_local(&self, collider: H, pt: &Point<Real>) -> Point<Real>;

    /// Whether `collider` is polygon-shaped, and can thus be sliced.
    fn is_polygon_shape(&self, collider: H) -> bool;
}

/// Creation of new entities carrying the fragments of a sliced collider.
pub trait EntityLifecycle<H>: ColliderAccess<H> {
    /// Clones the entity owning `original`, including its collider and visual mesh.
    ///
    /// The clone is not part of the scene until [`Self::attach_to_scene`] is called.
    fn clone_entity(&mut self, original: H) -> Result<H, Self::Error>;

    /// Adds `entity` to the scene.
    fn attach_to_scene(&mut self, entity: H) -> Result<(), Self::Error>;

    /// Replaces the vertices of the visual mesh of `entity`.
    fn set_visual_vertices(&mut self, entity: H, vertices: &[Point<Real>])
        -> Result<(), Self::Error>;
}
