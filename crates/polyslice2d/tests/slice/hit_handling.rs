use crate::scripted::{Call, CloneRefused, ScriptedWorld};
use crate::{assert_ring_eq, square};
use polyslice2d::math::{Point, Real};
use polyslice2d::query::RayHit;
use polyslice2d::slice::Slicer;

fn p1() -> Point<Real> {
    Point::new(-5.0, 5.0)
}

fn p2() -> Point<Real> {
    Point::new(15.0, 5.0)
}

fn square_world() -> ScriptedWorld {
    let mut world = ScriptedWorld::new(p1());
    let _ = world.polygons.insert(0, square());
    world
}

fn hit(x: Real, y: Real, fraction: Real) -> RayHit<u32> {
    RayHit::new(Point::new(x, y), fraction, 0)
}

#[test]
fn duplicate_crossings_cancel_out() {
    let mut world = square_world();
    world.forward = vec![hit(0.0, 5.0, 0.25), hit(3.0, 0.0, 0.4)];
    world.reverse = vec![hit(10.0, 5.0, 0.25), hit(3.5, 0.0, 0.6)];

    let outcomes = Slicer::default().plan(&world, &p1(), &p2());
    assert_eq!(outcomes.len(), 1);
    assert_ring_eq(
        &outcomes[0].primary,
        &[
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ],
    );
}

#[test]
fn crossing_reported_by_both_casts_is_lost() {
    let mut world = square_world();
    world.forward = vec![hit(0.0, 5.0, 0.25), hit(10.0, 5.5, 0.74)];
    world.reverse = vec![hit(10.0, 5.0, 0.25)];

    assert!(Slicer::default().plan(&world, &p1(), &p2()).is_empty());
}

#[test]
fn odd_hit_is_ignored() {
    let mut world = square_world();
    world.forward = vec![hit(0.0, 5.0, 0.25), hit(10.0, 5.0, 0.75), hit(5.0, 10.0, 0.9)];

    let outcomes = Slicer::default().plan(&world, &p1(), &p2());
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].num_fragments(), 2);
}

#[test]
fn hits_off_the_boundary_split_nothing() {
    let mut world = square_world();
    world.forward = vec![hit(0.0, 5.0, 0.25), hit(5.0, 5.0, 0.5)];
    assert!(Slicer::default().plan(&world, &p1(), &p2()).is_empty());

    // Both on the bottom edge.
    world.forward = vec![hit(2.0, 0.0, 0.2), hit(8.0, 0.0, 0.8)];
    assert!(Slicer::default().plan(&world, &p1(), &p2()).is_empty());
    assert!(world.calls.is_empty());
}

#[test]
fn hits_on_unknown_shapes_are_ignored() {
    let mut world = square_world();
    world.forward = vec![
        RayHit::new(Point::new(0.0, 5.0), 0.25, 7),
        RayHit::new(Point::new(10.0, 5.0), 0.75, 7),
    ];

    let reports = Slicer::default().cut(&mut world, &p1(), &p2()).unwrap();
    assert!(reports.is_empty());
    assert!(world.calls.is_empty());
}

#[test]
fn fragments_are_written_in_order() {
    let mut world = square_world();
    world.forward = vec![hit(0.0, 5.0, 0.25)];
    world.reverse = vec![hit(10.0, 5.0, 0.25)];

    let reports = Slicer::default().cut(&mut world, &p1(), &p2()).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].spawned, vec![1]);
    assert_eq!(
        world.calls,
        vec![
            Call::SetLocal(0),
            Call::Apply(0),
            Call::SetVisual(0),
            Call::Clone(0),
            Call::Attach(1),
            Call::SetLocal(1),
            Call::Apply(1),
            Call::SetVisual(1),
        ]
    );
    assert_ring_eq(
        &world.polygons[&1],
        &[
            Point::new(10.0, 5.0),
            Point::new(0.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        ],
    );
}

#[test]
fn world_errors_stop_the_cut() {
    let mut world = square_world();
    world.forward = vec![hit(0.0, 5.0, 0.25)];
    world.reverse = vec![hit(10.0, 5.0, 0.25)];
    world.refuse_clones = true;

    let result = Slicer::default().cut(&mut world, &p1(), &p2());
    assert_eq!(result, Err(CloneRefused(0)));
    assert_eq!(
        world.calls,
        vec![
            Call::SetLocal(0),
            Call::Apply(0),
            Call::SetVisual(0),
            Call::Clone(0),
        ]
    );
    assert_eq!(world.polygons[&0].len(), 4);
}
