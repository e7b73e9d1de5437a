use crate::math::{Point, Real};
use crate::slice::PendingSet;
use core::fmt::Debug;

/// The polygons resulting from the slicing of one collider.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SliceOutcome<H> {
    /// The collider that was sliced.
    pub target: H,
    /// The fragment with the most vertices, which replaces the geometry of `target`.
    pub primary: Vec<Point<Real>>,
    /// The other fragments, each one to be carried by a clone of `target`.
    pub secondaries: Vec<Vec<Point<Real>>>,
}

impl<H> SliceOutcome<H> {
    /// The total number of fragments, primary included.
    pub fn num_fragments(&self) -> usize {
        1 + self.secondaries.len()
    }

    /// Iterates through all the fragments, starting with the primary one.
    pub fn fragments(&self) -> impl Iterator<Item = &[Point<Real>]> {
        core::iter::once(&self.primary[..]).chain(self.secondaries.iter().map(|s| &s[..]))
    }
}

/// Resolves the pending fragments of `target` into lists of points.
///
/// `original` are the local-space vertices `target` had before being split. Fragments
/// with less than three points are discarded. The first fragment with the greatest number
/// of vertices becomes the primary fragment. Returns `None` if no fragment survives.
pub fn resolve_fragments<H: Debug>(
    target: H,
    pending: PendingSet,
    original: &[Point<Real>],
) -> Option<SliceOutcome<H>> {
    let mut fragments: Vec<_> = pending
        .into_fragments()
        .iter()
        .map(|fragment| fragment.resolve(original))
        .filter(|points| {
            if points.len() < 3 {
                log::debug!(
                    "Discarding a degenerate fragment of {:?} with {} vertices.",
                    target,
                    points.len()
                );
                false
            } else {
                true
            }
        })
        .collect();

    let mut primary_id = None;
    for (id, points) in fragments.iter().enumerate() {
        if primary_id.map_or(true, |best: usize| points.len() > fragments[best].len()) {
            primary_id = Some(id);
        }
    }

    let primary = fragments.remove(primary_id?);
    Some(SliceOutcome {
        target,
        primary,
        secondaries: fragments,
    })
}
