use ipcore3d::animation::AnimationFilter;
use ipcore3d::contact::{Barrier, ContactPotential};
use ipcore3d::kernel::Kernel;
use ipcore3d::query::{self, PointTriangle};
use na::{Point3, Vector3};

const TET_FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
const TET_EDGES: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];
const D_HAT: f64 = 0.2;
const KAPPA: f64 = 1.0e3;

/// A tetrahedron with its apex at `(0, 1, 0)` and its base on `y = 0`, centered
/// on the `y` axis.
fn tetrahedron(lift: f64) -> [Point3<f64>; 4] {
    let s = 3.0f64.sqrt() / 2.0;
    [
        Point3::new(0.0, 1.0 + lift, 0.0),
        Point3::new(0.0, lift, 1.0),
        Point3::new(-s, lift, -0.5),
        Point3::new(s, lift, -0.5),
    ]
}

/// Both tetrahedra, the upper one's base `gap` above the lower one's apex.
fn scene(gap: f64) -> Vec<Point3<f64>> {
    let mut x = tetrahedron(0.0).to_vec();
    x.extend_from_slice(&tetrahedron(1.0 + gap));
    x
}

/// Total barrier energy and per-vertex gradient between the two tetrahedra.
fn contact_energy(x: &[Point3<f64>], barrier: &Barrier<f64>) -> (f64, Vec<Vector3<f64>>) {
    let mut energy = 0.0;
    let mut grad = vec![Vector3::zeros(); x.len()];
    let bodies = [0usize, 4];

    for (a, b) in [(bodies[0], bodies[1]), (bodies[1], bodies[0])] {
        // Vertices of `a` against the faces of `b`.
        for v in 0..4 {
            for f in &TET_FACES {
                let ids = [a + v, b + f[0], b + f[1], b + f[2]];
                let (p, t0, t1, t2) = (&x[ids[0]], &x[ids[1]], &x[ids[2]], &x[ids[3]]);
                let d2 = query::point_triangle_closest_distance2(p, t0, t1, t2);

                if barrier.is_active(d2) {
                    energy += KAPPA * barrier.value(d2);
                    let g = query::point_triangle_closest_distance2_gradient(p, t0, t1, t2)
                        * (KAPPA * barrier.derivative(d2));
                    for (k, id) in ids.iter().enumerate() {
                        grad[*id] += g.fixed_rows::<3>(3 * k);
                    }
                }
            }
        }
    }

    for ea in &TET_EDGES {
        for eb in &TET_EDGES {
            let ids = [ea[0], ea[1], 4 + eb[0], 4 + eb[1]];
            let (a0, a1, b0, b1) = (&x[ids[0]], &x[ids[1]], &x[ids[2]], &x[ids[3]]);
            let d2 = query::segment_segment_distance2(a0, a1, b0, b1);

            if barrier.is_active(d2) {
                energy += KAPPA * barrier.value(d2);
                let g = query::segment_segment_distance2_gradient(a0, a1, b0, b1)
                    * (KAPPA * barrier.derivative(d2));
                for (k, id) in ids.iter().enumerate() {
                    grad[*id] += g.fixed_rows::<3>(3 * k);
                }
            }
        }
    }

    (energy, grad)
}

#[test]
fn barrier_energy_decreases_with_the_gap() {
    let barrier = Barrier::new(D_HAT).unwrap();
    let gaps = [0.01, 0.02, 0.05, 0.1, 0.15, 0.19];
    let energies: Vec<f64> = gaps
        .iter()
        .map(|gap| contact_energy(&scene(*gap), &barrier).0)
        .collect();

    for w in energies.windows(2) {
        assert!(w[0] > w[1], "energy must decrease with the gap: {:?}", energies);
    }

    // Only the lower apex against the upper base is within `D_HAT`.
    for (gap, energy) in gaps.iter().zip(&energies) {
        assert_relative_eq!(
            *energy,
            KAPPA * barrier.value(gap * gap),
            max_relative = 1.0e-9
        );
    }
}

#[test]
fn barrier_energy_vanishes_beyond_activation_distance() {
    let barrier = Barrier::new(D_HAT).unwrap();

    for gap in [0.21, 0.3, 1.0] {
        let (energy, grad) = contact_energy(&scene(gap), &barrier);
        assert_eq!(energy, 0.0);
        assert!(grad.iter().all(|g| *g == Vector3::zeros()));
    }
}

#[test]
fn barrier_pushes_the_free_body_away() {
    let barrier = Barrier::new(D_HAT).unwrap();
    let x = scene(0.05);
    let (_, mut grad) = contact_energy(&x, &barrier);

    // The lower tetrahedron is scripted: its vertices are not solver DOFs.
    let flags = [true, true, true, true, false, false, false, false];
    let filter = AnimationFilter::new(&flags);
    filter
        .for_each_mut(&mut grad, |_, g| *g = Vector3::zeros())
        .unwrap();

    let total: Vector3<f64> = grad.iter().sum();
    assert!(grad[..4].iter().all(|g| *g == Vector3::zeros()));
    // Descending the energy moves the upper body up, away from the contact.
    assert!(total.y < 0.0);
    assert_relative_eq!(total.x, 0.0, epsilon = 1.0e-6 * total.y.abs());
    assert_relative_eq!(total.z, 0.0, epsilon = 1.0e-6 * total.y.abs());
}

#[test]
fn contact_potential_matches_manual_chain_rule() {
    let barrier = Barrier::new(D_HAT).unwrap();
    let x = scene(0.07);
    // Lower apex against the upper base face, closest in the face interior.
    let pair = PointTriangle::new(x[0], x[5], x[6], x[7]);
    let potential = ContactPotential::new(pair, KAPPA, barrier);
    let (energy, _) = contact_energy(&x, &barrier);

    assert_relative_eq!(potential.value(), energy, max_relative = 1.0e-9);
    assert_relative_eq!(
        potential.value(),
        KAPPA * barrier.value(0.07 * 0.07),
        max_relative = 1.0e-9
    );
}
