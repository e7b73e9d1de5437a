use polyslice2d::math::{Point, Real};
use polyslice2d::query::{RayCastMode, RayCastProvider, RayHit};
use polyslice2d::scene::{ColliderAccess, EntityLifecycle};
use std::collections::BTreeMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    SetLocal(u32),
    Apply(u32),
    SetVisual(u32),
    Clone(u32),
    Attach(u32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CloneRefused(pub u32);

/// A world replaying pre-recorded casts, and recording every write made to it.
pub struct ScriptedWorld {
    pub cut_origin: Point<Real>,
    pub forward: Vec<RayHit<u32>>,
    pub reverse: Vec<RayHit<u32>>,
    pub polygons: BTreeMap<u32, Vec<Point<Real>>>,
    pub refuse_clones: bool,
    pub calls: Vec<Call>,
}

impl ScriptedWorld {
    pub fn new(cut_origin: Point<Real>) -> Self {
        Self {
            cut_origin,
            forward: Vec::new(),
            reverse: Vec::new(),
            polygons: BTreeMap::new(),
            refuse_clones: false,
            calls: Vec::new(),
        }
    }
}

impl RayCastProvider<u32> for ScriptedWorld {
    fn cast_segment(
        &self,
        origin: &Point<Real>,
        _: &Point<Real>,
        _: RayCastMode,
    ) -> Vec<RayHit<u32>> {
        if *origin == self.cut_origin {
            self.forward.clone()
        } else {
            self.reverse.clone()
        }
    }
}

impl ColliderAccess<u32> for ScriptedWorld {
    type Error = CloneRefused;

    fn local_vertices(&self, collider: u32) -> Option<Vec<Point<Real>>> {
        self.polygons.get(&collider).cloned()
    }

    fn set_local_vertices(
        &mut self,
        collider: u32,
        vertices: Vec<Point<Real>>,
    ) -> Result<(), CloneRefused> {
        self.calls.push(Call::SetLocal(collider));
        let _ = self.polygons.insert(collider, vertices);
        Ok(())
    }

    fn apply(&mut self, collider: u32) -> Result<(), CloneRefused> {
        self.calls.push(Call::Apply(collider));
        Ok(())
    }

    fn world_to_local(&self, _: u32, pt: &Point<Real>) -> Point<Real> {
        *pt
    }

    fn is_polygon_shape(&self, collider: u32) -> bool {
        self.polygons.contains_key(&collider)
    }
}

impl EntityLifecycle<u32> for ScriptedWorld {
    fn clone_entity(&mut self, original: u32) -> Result<u32, CloneRefused> {
        self.calls.push(Call::Clone(original));

        if self.refuse_clones {
            return Err(CloneRefused(original));
        }

        let id = self.polygons.keys().max().map_or(0, |id| id + 1);
        let vertices = self.polygons.get(&original).cloned().unwrap_or_default();
        let _ = self.polygons.insert(id, vertices);
        Ok(id)
    }

    fn attach_to_scene(&mut self, entity: u32) -> Result<(), CloneRefused> {
        self.calls.push(Call::Attach(entity));
        Ok(())
    }

    fn set_visual_vertices(&mut self, entity: u32, _: &[Point<Real>]) -> Result<(), CloneRefused> {
        self.calls.push(Call::SetVisual(entity));
        Ok(())
    }
}
