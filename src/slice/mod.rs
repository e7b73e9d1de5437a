//! The slicing pipeline.
//!
//! A cut goes through the following stages, each one implemented by its own module:
//!
//! 1. [`collect_hits`] merges the forward and reverse casts of the cut line.
//! 2. [`group_hits`] groups the hits per struck polygon and cancels duplicates.
//! 3. [`pair_hits`] orders each group along the cut line and pairs its hits.
//! 4. [`PolygonSplitter`] splits the polygon once per pair.
//! 5. [`resolve_fragments`] turns the pending fragments into vertex lists.
//! 6. [`apply_outcome`] writes the result back to the scene.
//!
//! [`Slicer`] chains all of them.

pub use self::apply::{apply_outcome, SliceReport};
pub use self::collect::{cast_both_ways, collect_hits};
pub use self::fragment::{Fragment, PendingSet, VertexRef};
pub use self::group::{group_hits, HitGroup};
pub use self::pair::{pair_hits, HitPair};
pub use self::resolve::{resolve_fragments, SliceOutcome};
pub use self::slicer::Slicer;
pub use self::split::{PolygonSplitter, SplitError};
pub use self::tolerances::SliceTolerances;

mod apply;
mod collect;
mod fragment;
mod group;
mod pair;
mod resolve;
mod slicer;
mod split;
mod tolerances;
