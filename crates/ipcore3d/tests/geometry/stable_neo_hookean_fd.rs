use super::fd::{self, check_derivatives, flatten, point};
use ipcore3d::constitution::stable_neo_hookean::{
    energy_density, energy_gradient, energy_hessian, StableNeoHookeanDensity,
};
use ipcore3d::constitution::{StableNeoHookean, TetElement, TetRestShape};
use ipcore3d::kernel::Kernel;
use ipcore3d::utils::project_psd;
use na::{Matrix3, Point3, SVector};
use oorandom::Rand64;

fn unflatten(x: &SVector<f64, 9>) -> Matrix3<f64> {
    Matrix3::from_column_slice(x.as_slice())
}

#[test]
fn density_derivatives() {
    let mut rng = Rand64::new(20);
    let params = StableNeoHookean::youngs_poisson(1.0e3, 0.35).unwrap();

    for _ in 0..32 {
        // Include inverted deformation gradients.
        let f = Matrix3::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0) * 1.5;
        let x = SVector::<f64, 9>::from_column_slice(f.as_slice());

        check_derivatives(
            |x| energy_density(&unflatten(x), &params),
            |x| energy_gradient(&unflatten(x), &params),
            |x| energy_hessian(&unflatten(x), &params),
            &x,
        );
    }
}

#[test]
fn density_kernel_matches_free_functions() {
    let params = StableNeoHookean::new(2.0, 5.0).unwrap();
    let f = Matrix3::new(1.1, 0.2, 0.0, -0.1, 0.9, 0.3, 0.0, 0.1, 1.2);
    let density = StableNeoHookeanDensity { f, params };

    assert_eq!(density.value(), energy_density(&f, &params));
    assert_eq!(density.gradient(), energy_gradient(&f, &params));
    assert_eq!(density.hessian(), energy_hessian(&f, &params));
}

#[test]
fn rest_state() {
    for nu in [-0.9, -0.3, 0.0, 0.25, 0.45, 0.499] {
        let params = StableNeoHookean::youngs_poisson(1.0e6, nu).unwrap();
        let id = Matrix3::identity();
        let h = energy_hessian(&id, &params);
        let scale = params.mu() + params.lambda();

        assert_relative_eq!(energy_density(&id, &params), 0.0, epsilon = 1.0e-6);
        assert_relative_eq!(energy_gradient(&id, &params).amax(), 0.0, epsilon = 1.0e-6);
        assert!(h
            .symmetric_eigenvalues()
            .iter()
            .all(|e| *e >= -1.0e-9 * scale));
        assert_relative_eq!(project_psd(&h), h, epsilon = 1.0e-6 * scale);
    }
}

#[test]
fn tetrahedron_element_derivatives() {
    let mut rng = Rand64::new(21);
    let material = StableNeoHookean::youngs_poisson(1.0e2, 0.3).unwrap();
    let rest_x = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.1, 0.0),
        Point3::new(0.2, 1.0, 0.1),
        Point3::new(0.1, 0.2, 0.9),
    ];
    let rest = TetRestShape::new(&rest_x).unwrap();

    for _ in 0..32 {
        let deformed: SVector<f64, 12> = flatten(&[
            rest_x[0] + fd::random_point(&mut rng).coords * 0.3,
            rest_x[1] + fd::random_point(&mut rng).coords * 0.3,
            rest_x[2] + fd::random_point(&mut rng).coords * 0.3,
            rest_x[3] + fd::random_point(&mut rng).coords * 0.3,
        ]);
        let element = |x: &SVector<f64, 12>| {
            TetElement::new(
                rest,
                material,
                [point(x, 0), point(x, 1), point(x, 2), point(x, 3)],
            )
        };

        check_derivatives(
            |x| element(x).value(),
            |x| element(x).gradient(),
            |x| element(x).hessian(),
            &deformed,
        );
    }
}

#[test]
fn projected_element_hessian_is_psd() {
    let material = StableNeoHookean::youngs_poisson(1.0e2, 0.3).unwrap();
    let rest_x = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let rest = TetRestShape::new(&rest_x).unwrap();
    // Inverted: the last vertex crossed the opposite face.
    let mut x = rest_x;
    x[3] = Point3::new(0.2, 0.2, -0.5);

    let h = TetElement::new(rest, material, x).hessian();
    let projected = project_psd(&h);

    assert!(projected
        .symmetric_eigenvalues()
        .iter()
        .all(|e| *e >= -1.0e-8 * h.amax()));
}
