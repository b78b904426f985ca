//! Central finite differences and random configurations shared by the tests.

use na::{Point3, SMatrix, SVector};
use oorandom::Rand64;

const STEP: f64 = 1.0e-6;

pub fn random_point(rng: &mut Rand64) -> Point3<f64> {
    Point3::new(
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
    )
}

pub fn flatten<const N: usize>(points: &[Point3<f64>]) -> SVector<f64, N> {
    SVector::from_iterator(points.iter().flat_map(|p| p.coords.iter().copied()))
}

pub fn point<const N: usize>(x: &SVector<f64, N>, i: usize) -> Point3<f64> {
    Point3::new(x[3 * i], x[3 * i + 1], x[3 * i + 2])
}

pub fn gradient<const N: usize>(
    f: impl Fn(&SVector<f64, N>) -> f64,
    x: &SVector<f64, N>,
) -> SVector<f64, N> {
    SVector::from_fn(|i, _| {
        let mut xp = *x;
        let mut xm = *x;
        xp[i] += STEP;
        xm[i] -= STEP;
        (f(&xp) - f(&xm)) / (2.0 * STEP)
    })
}

pub fn hessian<const N: usize>(
    g: impl Fn(&SVector<f64, N>) -> SVector<f64, N>,
    x: &SVector<f64, N>,
) -> SMatrix<f64, N, N> {
    let mut h = SMatrix::<f64, N, N>::zeros();

    for j in 0..N {
        let mut xp = *x;
        let mut xm = *x;
        xp[j] += STEP;
        xm[j] -= STEP;
        h.set_column(j, &((g(&xp) - g(&xm)) / (2.0 * STEP)));
    }

    h
}

/// Checks an analytic gradient and Hessian against finite differences of the
/// value and of the analytic gradient, and checks the Hessian symmetry.
pub fn check_derivatives<const N: usize>(
    f: impl Fn(&SVector<f64, N>) -> f64,
    g: impl Fn(&SVector<f64, N>) -> SVector<f64, N>,
    h: impl Fn(&SVector<f64, N>) -> SMatrix<f64, N, N>,
    x: &SVector<f64, N>,
) {
    let analytic_g = g(x);
    let analytic_h = h(x);
    let tol_g = 1.0e-5 * (1.0 + analytic_g.amax());
    let tol_h = 1.0e-5 * (1.0 + analytic_h.amax());

    assert_relative_eq!(analytic_g, gradient(&f, x), epsilon = tol_g);
    assert_relative_eq!(analytic_h, hessian(&g, x), epsilon = tol_h);
    assert_relative_eq!(
        analytic_h,
        analytic_h.transpose(),
        epsilon = 1.0e-10 * (1.0 + analytic_h.amax())
    );
}
