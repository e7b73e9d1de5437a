use crate::math::{Point, Real};
use crate::query::{RayCastMode, RayCastProvider, RayHit};
use crate::scene::ColliderAccess;
use core::fmt::Debug;

/// Merges the hits of the forward (`P1 -> P2`) and reverse (`P2 -> P1`) casts of a cut line.
///
/// The fractions of the reverse hits are remapped to `1 - fraction` so that every hit is
/// measured from `P1`. Hits on colliders for which `is_polygon` returns `false` are
/// dropped. The result is not ordered.
pub fn collect_hits<H: Copy + Debug>(
    forward: Vec<RayHit<H>>,
    reverse: Vec<RayHit<H>>,
    mut is_polygon: impl FnMut(H) -> bool,
) -> Vec<RayHit<H>> {
    forward
        .into_iter()
        .chain(reverse.into_iter().map(RayHit::reversed))
        .filter(|hit| {
            let keep = is_polygon(hit.target);
            if !keep {
                log::trace!("Ignoring the hit on {:?}: not a polygon.", hit.target);
            }
            keep
        })
        .collect()
}

/// Casts the cut line `[point1, point2]` both ways through `world` and collects the hits
/// on its polygonal colliders.
pub fn cast_both_ways<H, W>(world: &W, point1: &Point<Real>, point2: &Point<Real>) -> Vec<RayHit<H>>
where
    H: Copy + Debug,
    W: RayCastProvider<H> + ColliderAccess<H> + ?Sized,
{
    let forward = world.cast_segment(point1, point2, RayCastMode::All);
    let reverse = world.cast_segment(point2, point1, RayCastMode::All);
    collect_hits(forward, reverse, |target| world.is_polygon_shape(target))
}
