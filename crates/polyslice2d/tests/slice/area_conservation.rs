use polyslice2d::math::{Isometry, Point, Real, Vector};
use polyslice2d::scene::SliceWorld;
use polyslice2d::shape::{Polygon, Winding};
use polyslice2d::slice::Slicer;
use std::f32::consts::PI;

// A convex polygon inscribed in a circle, without sharp corners.
fn random_convex_polygon(rng: &mut oorandom::Rand32) -> Vec<Point<Real>> {
    let n = 5 + rng.rand_range(0..6) as usize;
    let radius = 50.0 + rng.rand_float() * 50.0;
    let step = 2.0 * PI / n as f32;

    (0..n)
        .map(|i| {
            let angle = step * (i as f32 + rng.rand_float() * 0.5);
            Point::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

fn distance_to_line(pt: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> Real {
    let dir = (b - a).normalize();
    (pt - a).perp(&dir).abs()
}

#[test]
fn random_convex_cuts_conserve_area() {
    let mut rng = oorandom::Rand32::new(42);
    let mut num_cut = 0;

    for _ in 0..200 {
        let vertices = random_convex_polygon(&mut rng);
        let original = Polygon::new(vertices.clone()).unwrap();
        let offset = Vector::new(rng.rand_float() * 20.0 - 10.0, rng.rand_float() * 20.0 - 10.0);
        let position = Isometry::translation(offset.x, offset.y);

        // A line through the middle of the polygon, spanning way past it.
        let angle = rng.rand_float() * PI;
        let dir = Vector::new(angle.cos(), angle.sin()) * 1000.0;
        let jitter = Vector::new(rng.rand_float() - 0.5, rng.rand_float() - 0.5) * 20.0;
        let through = Point::from(offset + jitter);
        let (p1, p2) = (through - dir, through + dir);

        // Cuts grazing a vertex drop it from the fragments.
        if original
            .transformed(&position)
            .vertices()
            .iter()
            .any(|v| distance_to_line(v, &p1, &p2) < 3.0)
        {
            continue;
        }

        let mut world = SliceWorld::new();
        let target = world.insert_polygon(position, vertices).unwrap();
        let reports = Slicer::default().cut(&mut world, &p1, &p2).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].spawned.len(), 1);
        num_cut += 1;

        let mut area = 0.0;
        for handle in [target, reports[0].spawned[0]] {
            let fragment = world.polygon(handle).unwrap();
            assert!(fragment.is_simple());
            assert_eq!(fragment.winding(), Winding::CounterClockwise);
            area += fragment.area();
        }

        assert_relative_eq!(area, original.area(), max_relative = 1.0e-3);
    }

    assert!(num_cut > 50);
}
