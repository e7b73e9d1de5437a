use crate::query::RayHit;
use crate::slice::HitGroup;
use ordered_float::OrderedFloat;
use core::fmt::Debug;

/// Two consecutive hits of a cut line on the same polygon.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitPair<H> {
    /// The hit nearest to the start of the cut line.
    pub entry: RayHit<H>,
    /// The hit farthest from the start of the cut line.
    pub exit: RayHit<H>,
}

/// Sorts the hits of `group` along the cut line and pairs them two by two.
///
/// The pairs are returned in increasing fraction order. If the group contains an odd
/// number of hits, the last one is left without partner and ignored.
pub fn pair_hits<H: Copy + Debug>(group: &mut HitGroup<H>) -> Vec<HitPair<H>> {
    group.hits.sort_by_key(|hit| OrderedFloat(hit.fraction));

    let chunks = group.hits.chunks_exact(2);
    if let [unpaired] = chunks.remainder() {
        log::debug!(
            "Ignoring the unpaired hit at {:?} on {:?}.",
            unpaired.point,
            group.target
        );
    }

    chunks
        .map(|pair| HitPair {
            entry: pair[0],
            exit: pair[1],
        })
        .collect()
}
