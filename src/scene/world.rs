use crate::math::{Isometry, Point, Real, DEFAULT_EPSILON};
use crate::query::{RayCastMode, RayCastProvider, RayHit};
use crate::scene::{ColliderAccess, EntityLifecycle};
use crate::shape::{Polygon, PolygonError, Winding};
use crate::utils;
use ordered_float::OrderedFloat;
use slab::Slab;

/// The handle of a body inserted into a [`SliceWorld`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyHandle(usize);

/// Errors reported by the collider and entity operations of a [`SliceWorld`].
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum WorldError {
    /// No body is stored under this handle.
    #[error("no body is registered under {0:?}")]
    UnknownBody(BodyHandle),
    /// Polygon vertices were given to a body that is not a polygon.
    #[error("the body {0:?} is not a polygon")]
    NotAPolygon(BodyHandle),
    /// The given vertices do not form a polygon.
    #[error(transparent)]
    DegeneratePolygon(#[from] PolygonError),
}

/// The collision shape of a body.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BodyShape {
    /// A polygon, given in the body's local space.
    Polygon(Polygon),
    /// A ball centered on the body's origin.
    Ball {
        /// The radius of the ball.
        radius: Real,
    },
}

#[derive(Clone, Debug)]
struct Body {
    position: Isometry<Real>,
    shape: BodyShape,
    staged: Option<Polygon>,
    visual: Vec<Point<Real>>,
    in_scene: bool,
}

/// An in-memory physics world implementing every contract of the slicing pipeline.
///
/// Bodies are rigid shapes placed by an isometry. Only bodies attached to the scene are
/// hit by ray casts. Like most physics engines, a cast reports the points where the
/// segment *enters* a body, so the exit points are only found by casting back.
#[derive(Clone, Debug, Default)]
pub struct SliceWorld {
    bodies: Slab<Body>,
}

impl SliceWorld {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a polygonal body, attached to the scene, and returns its handle.
    ///
    /// The visual mesh of the body starts with the same vertices as its collider.
    pub fn insert_polygon(
        &mut self,
        position: Isometry<Real>,
        vertices: Vec<Point<Real>>,
    ) -> Result<BodyHandle, WorldError> {
        let polygon = Polygon::new(vertices)?;
        let visual = polygon.vertices().to_vec();
        Ok(self.insert(Body {
            position,
            shape: BodyShape::Polygon(polygon),
            staged: None,
            visual,
            in_scene: true,
        }))
    }

    /// Inserts a ball-shaped body, attached to the scene, and returns its handle.
    pub fn insert_ball(&mut self, position: Isometry<Real>, radius: Real) -> BodyHandle {
        self.insert(Body {
            position,
            shape: BodyShape::Ball { radius },
            staged: None,
            visual: Vec::new(),
            in_scene: true,
        })
    }

    fn insert(&mut self, body: Body) -> BodyHandle {
        BodyHandle(self.bodies.insert(body))
    }

    fn body(&self, handle: BodyHandle) -> Result<&Body, WorldError> {
        self.bodies
            .get(handle.0)
            .ok_or(WorldError::UnknownBody(handle))
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body, WorldError> {
        self.bodies
            .get_mut(handle.0)
            .ok_or(WorldError::UnknownBody(handle))
    }

    /// Removes a body from the world and returns its shape.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<BodyShape> {
        self.bodies.try_remove(handle.0).map(|body| body.shape)
    }

    /// Moves a body.
    pub fn set_position(
        &mut self,
        handle: BodyHandle,
        position: Isometry<Real>,
    ) -> Result<(), WorldError> {
        self.body_mut(handle)?.position = position;
        Ok(())
    }

    /// The position of a body.
    pub fn position(&self, handle: BodyHandle) -> Option<&Isometry<Real>> {
        self.bodies.get(handle.0).map(|body| &body.position)
    }

    /// The shape of a body, as last committed.
    pub fn shape(&self, handle: BodyHandle) -> Option<&BodyShape> {
        self.bodies.get(handle.0).map(|body| &body.shape)
    }

    /// The committed polygon of a body, in its local space.
    pub fn polygon(&self, handle: BodyHandle) -> Option<&Polygon> {
        match self.shape(handle)? {
            BodyShape::Polygon(polygon) => Some(polygon),
            BodyShape::Ball { .. } => None,
        }
    }

    /// The committed polygon of a body, in world-space.
    pub fn world_polygon(&self, handle: BodyHandle) -> Option<Polygon> {
        let body = self.bodies.get(handle.0)?;
        match &body.shape {
            BodyShape::Polygon(polygon) => Some(polygon.transformed(&body.position)),
            BodyShape::Ball { .. } => None,
        }
    }

    /// The vertices of the visual mesh of a body.
    pub fn visual_vertices(&self, handle: BodyHandle) -> Option<&[Point<Real>]> {
        self.bodies.get(handle.0).map(|body| &body.visual[..])
    }

    /// Whether this body is attached to the scene.
    pub fn is_in_scene(&self, handle: BodyHandle) -> bool {
        self.bodies.get(handle.0).is_some_and(|body| body.in_scene)
    }

    /// The number of bodies stored in this world, attached to the scene or not.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether this world contains no body.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The handles of all the bodies attached to the scene.
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.bodies
            .iter()
            .filter(|(_, body)| body.in_scene)
            .map(|(id, _)| BodyHandle(id))
    }
}

/// Fractions along `[origin, dest]` (local-space) where the segment enters `polygon`.
fn polygon_entries(polygon: &Polygon, origin: &Point<Real>, dest: &Point<Real>) -> Vec<Real> {
    let dir = dest - origin;
    let outward_sign = match polygon.winding() {
        Winding::CounterClockwise => 1.0,
        Winding::Clockwise => -1.0,
        Winding::Degenerate => return Vec::new(),
    };

    let mut entries: Vec<Real> = Vec::new();

    for edge in polygon.edges() {
        let Some((s, _)) =
            utils::segments_intersection2d(origin, dest, &edge.a, &edge.b, DEFAULT_EPSILON)
        else {
            continue;
        };

        if dir.dot(&edge.scaled_normal()) * outward_sign >= 0.0 {
            // Leaving the polygon.
            continue;
        }

        // Crossing exactly through a vertex hits both adjacent edges.
        if !entries.iter().any(|e| relative_eq!(*e, s)) {
            entries.push(s);
        }
    }

    entries
}

/// Fraction along `[origin, dest]` (local-space) where the segment enters a ball centered
/// at the origin.
fn ball_entry(radius: Real, origin: &Point<Real>, dest: &Point<Real>) -> Option<Real> {
    let dir = dest - origin;
    let a = dir.norm_squared();
    let b = origin.coords.dot(&dir);
    let c = origin.coords.norm_squared() - radius * radius;

    if c <= 0.0 {
        // Casts starting inside of the ball do not report it.
        return None;
    }

    let delta = b * b - a * c;
    if delta < 0.0 {
        return None;
    }

    let t = (-b - delta.sqrt()) / a;
    (0.0..=1.0).contains(&t).then_some(t)
}

impl RayCastProvider<BodyHandle> for SliceWorld {
    fn cast_segment(
        &self,
        origin: &Point<Real>,
        dest: &Point<Real>,
        mode: RayCastMode,
    ) -> Vec<RayHit<BodyHandle>> {
        let mut hits = Vec::new();

        if relative_eq!(na::distance_squared(origin, dest), 0.0) {
            return hits;
        }

        for (id, body) in self.bodies.iter().filter(|(_, body)| body.in_scene) {
            let local_origin = body.position.inverse_transform_point(origin);
            let local_dest = body.position.inverse_transform_point(dest);
            let fractions = match &body.shape {
                BodyShape::Polygon(polygon) => polygon_entries(polygon, &local_origin, &local_dest),
                BodyShape::Ball { radius } => {
                    ball_entry(*radius, &local_origin, &local_dest).into_iter().collect()
                }
            };

            hits.extend(fractions.into_iter().map(|t| {
                RayHit::new(origin + (dest - origin) * t, t, BodyHandle(id))
            }));
        }

        hits.sort_by_key(|hit| OrderedFloat(hit.fraction));

        if mode == RayCastMode::Closest {
            hits.truncate(1);
        }

        hits
    }
}

impl ColliderAccess<BodyHandle> for SliceWorld {
    type Error = WorldError;

    fn local_vertices(&self, collider: BodyHandle) -> Option<Vec<Point<Real>>> {
        self.polygon(collider).map(|polygon| polygon.vertices().to_vec())
    }

    fn set_local_vertices(
        &mut self,
        collider: BodyHandle,
        vertices: Vec<Point<Real>>,
    ) -> Result<(), WorldError> {
        let body = self.body_mut(collider)?;

        if !matches!(body.shape, BodyShape::Polygon(_)) {
            return Err(WorldError::NotAPolygon(collider));
        }

        body.staged = Some(Polygon::new(vertices)?);
        Ok(())
    }

    fn apply(&mut self, collider: BodyHandle) -> Result<(), WorldError> {
        let body = self.body_mut(collider)?;

        if let Some(polygon) = body.staged.take() {
            body.shape = BodyShape::Polygon(polygon);
        }

        Ok(())
    }

    fn world_to_local(&self, collider: BodyHandle, pt: &Point<Real>) -> Point<Real> {
        match self.bodies.get(collider.0) {
            Some(body) => body.position.inverse_transform_point(pt),
            None => *pt,
        }
    }

    fn is_polygon_shape(&self, collider: BodyHandle) -> bool {
        self.polygon(collider).is_some()
    }
}

impl EntityLifecycle<BodyHandle> for SliceWorld {
    fn clone_entity(&mut self, original: BodyHandle) -> Result<BodyHandle, WorldError> {
        let mut body = self.body(original)?.clone();
        body.staged = None;
        body.in_scene = false;
        Ok(self.insert(body))
    }

    fn attach_to_scene(&mut self, entity: BodyHandle) -> Result<(), WorldError> {
        self.body_mut(entity)?.in_scene = true;
        Ok(())
    }

    fn set_visual_vertices(
        &mut self,
        entity: BodyHandle,
        vertices: &[Point<Real>],
    ) -> Result<(), WorldError> {
        self.body_mut(entity)?.visual = vertices.to_vec();
        Ok(())
    }
}
