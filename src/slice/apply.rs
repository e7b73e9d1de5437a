use crate::scene::EntityLifecycle;
use crate::slice::SliceOutcome;

/// The entities affected by the slicing of one collider.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SliceReport<H> {
    /// The sliced collider, now carrying the primary fragment.
    pub target: H,
    /// The new entities, one per secondary fragment, in the order of the outcome.
    pub spawned: Vec<H>,
}

/// Writes a slicing outcome back to the scene.
///
/// The geometry of the sliced collider and of its visual mesh is replaced by the primary
/// fragment. Each secondary fragment is given to a new clone of the sliced entity. Errors
/// reported by `world` are returned as-is; the entities updated before the error keep
/// their new geometry.
pub fn apply_outcome<H, W>(world: &mut W, outcome: SliceOutcome<H>) -> Result<SliceReport<H>, W::Error>
where
    H: Copy,
    W: EntityLifecycle<H> + ?Sized,
{
    let SliceOutcome {
        target,
        primary,
        secondaries,
    } = outcome;

    world.set_local_vertices(target, primary.clone())?;
    world.apply(target)?;
    world.set_visual_vertices(target, &primary)?;

    let mut spawned = Vec::with_capacity(secondaries.len());

    for vertices in secondaries {
        let entity = world.clone_entity(target)?;
        world.attach_to_scene(entity)?;
        world.set_local_vertices(entity, vertices.clone())?;
        world.apply(entity)?;
        world.set_visual_vertices(entity, &vertices)?;
        spawned.push(entity);
    }

    Ok(SliceReport { target, spawned })
}
