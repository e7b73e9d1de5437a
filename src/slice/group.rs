use crate::query::RayHit;
use crate::slice::SliceTolerances;
use indexmap::IndexMap;
use smallvec::SmallVec;
use core::fmt::Debug;
use core::hash::Hash;

/// The hits of a cut line on a single polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct HitGroup<H> {
    /// The polygon struck by every hit of this group.
    pub target: H,
    /// The hits, in insertion order until they get paired.
    pub hits: SmallVec<[RayHit<H>; 4]>,
}

impl<H: Copy + Debug> HitGroup<H> {
    /// Creates an empty group of hits on `target`.
    pub fn new(target: H) -> Self {
        Self {
            target,
            hits: SmallVec::new(),
        }
    }

    /// Adds `hit` to this group, unless it duplicates a hit already present.
    ///
    /// A duplicate is the same boundary crossing reported by both cast directions: it
    /// cancels the hit it duplicates instead of being added.
    pub fn insert_or_cancel(&mut self, hit: RayHit<H>, tolerances: &SliceTolerances) {
        let duplicate = self
            .hits
            .iter()
            .position(|other| tolerances.is_same_crossing(&other.point, &hit.point));

        if let Some(id) = duplicate {
            let cancelled = self.hits.remove(id);
            log::trace!(
                "Cancelling the duplicate hits at {:?} and {:?} on {:?}.",
                cancelled.point,
                hit.point,
                self.target
            );
        } else {
            self.hits.push(hit);
        }
    }

    /// The number of hits in this group.
    #[inline]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether this group contains no hit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Groups `hits` by the polygon they struck, cancelling duplicate crossings.
///
/// Groups are returned in the order their target first appeared in `hits`. Groups left
/// with less than two hits cannot split anything and are dropped.
pub fn group_hits<H>(
    hits: impl IntoIterator<Item = RayHit<H>>,
    tolerances: &SliceTolerances,
) -> Vec<HitGroup<H>>
where
    H: Copy + Eq + Hash + Debug,
{
    let mut groups: IndexMap<H, HitGroup<H>> = IndexMap::new();

    for hit in hits {
        groups
            .entry(hit.target)
            .or_insert_with(|| HitGroup::new(hit.target))
            .insert_or_cancel(hit, tolerances);
    }

    groups
        .into_values()
        .filter(|group| {
            if group.len() < 2 {
                log::debug!(
                    "Dropping the hits on {:?}: {} hit(s) left after deduplication.",
                    group.target,
                    group.len()
                );
                false
            } else {
                true
            }
        })
        .collect()
}
