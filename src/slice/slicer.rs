use crate::math::{Point, Real};
use crate::query::RayCastProvider;
use crate::scene::{ColliderAccess, EntityLifecycle};
use crate::slice::{
    apply_outcome, cast_both_ways, group_hits, pair_hits, resolve_fragments, HitGroup,
    PolygonSplitter, SliceOutcome, SliceReport, SliceTolerances, SplitError,
};
use core::fmt::Debug;
use core::hash::Hash;

/// Slices the polygonal colliders of a world along straight cut lines.
///
/// A cut never fails because of its own geometry: pairs of hits that cannot split their
/// polygon are logged and skipped, and polygons left without any valid split are left
/// untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slicer {
    tolerances: SliceTolerances,
}

impl Slicer {
    /// Creates a slicer with the given tolerances.
    pub fn new(tolerances: SliceTolerances) -> Self {
        Self { tolerances }
    }

    /// Computes how the cut line `[point1, point2]` slices the colliders of `world`,
    /// without modifying them.
    ///
    /// One outcome is returned per sliced collider, in the order the colliders were first
    /// hit.
    pub fn plan<H, W>(
        &self,
        world: &W,
        point1: &Point<Real>,
        point2: &Point<Real>,
    ) -> Vec<SliceOutcome<H>>
    where
        H: Copy + Eq + Hash + Debug,
        W: RayCastProvider<H> + ColliderAccess<H> + ?Sized,
    {
        let hits = cast_both_ways(world, point1, point2);
        let groups = group_hits(hits, &self.tolerances);
        log::debug!("The cut line struck {} polygon(s).", groups.len());

        groups
            .into_iter()
            .filter_map(|mut group| self.slice_group(world, &mut group))
            .collect()
    }

    fn slice_group<H, W>(&self, world: &W, group: &mut HitGroup<H>) -> Option<SliceOutcome<H>>
    where
        H: Copy + Eq + Hash + Debug,
        W: ColliderAccess<H> + ?Sized,
    {
        let target = group.target;
        let Some(vertices) = world.local_vertices(target) else {
            log::debug!("Skipping {:?}: its vertices are not available.", target);
            return None;
        };

        if vertices.len() < 3 {
            log::debug!(
                "Skipping {:?}: a polygon with {} vertices cannot be split.",
                target,
                vertices.len()
            );
            return None;
        }

        let mut splitter = PolygonSplitter::new(&vertices, self.tolerances);

        for pair in pair_hits(group) {
            let point1 = world.world_to_local(target, &pair.entry.point);
            let point2 = world.world_to_local(target, &pair.exit.point);

            match splitter.split(point1, point2) {
                Ok(()) => {}
                Err(err @ SplitError::UnmatchedInsertionEdge { .. }) => {
                    log::warn!("Skipping a pair of hits on {:?}: {}.", target, err)
                }
                Err(err @ SplitError::SameInsertionEdge { .. }) => {
                    log::debug!("Skipping a pair of hits on {:?}: {}.", target, err)
                }
            }
        }

        if splitter.num_splits() == 0 {
            return None;
        }

        resolve_fragments(target, splitter.into_pending(), &vertices)
    }

    /// Slices the colliders of `world` crossed by the cut line `[point1, point2]`.
    ///
    /// Every sliced collider keeps its largest fragment, and one new entity is spawned for
    /// each of its other fragments. Errors are only raised by `world` itself, and stop the
    /// cut where they occur.
    pub fn cut<H, W>(
        &self,
        world: &mut W,
        point1: &Point<Real>,
        point2: &Point<Real>,
    ) -> Result<Vec<SliceReport<H>>, W::Error>
    where
        H: Copy + Eq + Hash + Debug,
        W: RayCastProvider<H> + EntityLifecycle<H> + ?Sized,
    {
        self.plan(&*world, point1, point2)
            .into_iter()
            .map(|outcome| apply_outcome(&mut *world, outcome))
            .collect()
    }
}
