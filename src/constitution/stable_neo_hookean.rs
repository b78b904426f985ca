//! The stable Neo-Hookean hyperelastic energy density.
//!
//! The density of a deformation gradient `F` with `J = det F` is
//!
//! `Ψ(F) = μ/2 (‖F‖² − 3) − μ (J − 1) + λ/2 (J − 1)²`.
//!
//! It has no logarithm, so it stays finite through element inversion, and is
//! at rest (zero energy and zero stress) at `F = I`. Derivatives are taken with
//! respect to `vec(F)`, the 9 entries of `F` in column-major order.

use na::{Matrix3, RealField, SMatrix};

use super::ElasticModuli;
use crate::error::{check_non_negative, ParameterError};
use crate::kernel::Kernel;
use crate::math::FlatMatrix;

/// The material parameters of the stable Neo-Hookean energy.
///
/// `lambda` is the reparameterized `λ = λ_Lamé + μ` that makes the energy
/// match linear elasticity at rest.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct StableNeoHookean<T> {
    mu: T,
    lambda: T,
}

impl<T: RealField + Copy> StableNeoHookean<T> {
    /// Creates the material from its raw parameters.
    ///
    /// Fails if either is negative or if `3λ < μ` (negative bulk modulus).
    pub fn new(mu: T, lambda: T) -> Result<Self, ParameterError> {
        let mu = check_non_negative("mu", mu)?;
        let lambda = check_non_negative("lambda", lambda)?;

        let three = T::one() + T::one() + T::one();
        if three * lambda < mu {
            return Err(ParameterError::out_of_range(
                "lambda",
                lambda,
                "[mu / 3, +inf)",
            ));
        }

        Ok(Self { mu, lambda })
    }

    /// The material matching the given elastic moduli at rest.
    pub fn from_moduli(moduli: &ElasticModuli<T>) -> Self {
        let mu = moduli.shear_modulus();
        Self {
            mu,
            lambda: moduli.lame_lambda() + mu,
        }
    }

    /// Shortcut for `from_moduli(&ElasticModuli::youngs_poisson(E, ν)?)`.
    pub fn youngs_poisson(youngs_modulus: T, poisson_ratio: T) -> Result<Self, ParameterError> {
        ElasticModuli::youngs_poisson(youngs_modulus, poisson_ratio).map(|m| Self::from_moduli(&m))
    }

    /// The shear parameter `μ`.
    #[inline]
    pub fn mu(&self) -> T {
        self.mu
    }

    /// The volumetric parameter `λ`.
    #[inline]
    pub fn lambda(&self) -> T {
        self.lambda
    }
}

impl<T: RealField + Copy> From<ElasticModuli<T>> for StableNeoHookean<T> {
    fn from(moduli: ElasticModuli<T>) -> Self {
        Self::from_moduli(&moduli)
    }
}

/// The stable Neo-Hookean density `Ψ(F)`.
pub fn energy_density<T: RealField + Copy>(f: &Matrix3<T>, params: &StableNeoHookean<T>) -> T {
    let half = T::one() / (T::one() + T::one());
    let three = T::one() + T::one() + T::one();
    let j_minus_one = f.determinant() - T::one();

    half * params.mu * (f.norm_squared() - three) - params.mu * j_minus_one
        + half * params.lambda * j_minus_one * j_minus_one
}

/// The first Piola-Kirchhoff stress `∂Ψ/∂F`, flattened column-major.
pub fn energy_gradient<T: RealField + Copy>(
    f: &Matrix3<T>,
    params: &StableNeoHookean<T>,
) -> FlatMatrix<T> {
    let dj = det_gradient(f);
    let coeff = params.lambda * (f.determinant() - T::one()) - params.mu;
    let p = f * params.mu + dj * coeff;

    FlatMatrix::from_column_slice(p.as_slice())
}

/// The Hessian `∂²Ψ/∂vec(F)²`.
pub fn energy_hessian<T: RealField + Copy>(
    f: &Matrix3<T>,
    params: &StableNeoHookean<T>,
) -> SMatrix<T, 9, 9> {
    let g = FlatMatrix::from_column_slice(det_gradient(f).as_slice());
    let coeff = params.lambda * (f.determinant() - T::one()) - params.mu;

    SMatrix::<T, 9, 9>::identity() * params.mu
        + g * g.transpose() * params.lambda
        + det_hessian(f) * coeff
}

/// `∂J/∂F`, i.e., the cofactor matrix of `F`.
fn det_gradient<T: RealField + Copy>(f: &Matrix3<T>) -> Matrix3<T> {
    let f0 = f.column(0);
    let f1 = f.column(1);
    let f2 = f.column(2);

    Matrix3::from_columns(&[f1.cross(&f2), f2.cross(&f0), f0.cross(&f1)])
}

/// `∂²J/∂vec(F)²`, linear in `F`.
fn det_hessian<T: RealField + Copy>(f: &Matrix3<T>) -> SMatrix<T, 9, 9> {
    let f0 = f.column(0).cross_matrix();
    let f1 = f.column(1).cross_matrix();
    let f2 = f.column(2).cross_matrix();
    let mut h = SMatrix::<T, 9, 9>::zeros();

    h.fixed_view_mut::<3, 3>(0, 3).copy_from(&(-f2));
    h.fixed_view_mut::<3, 3>(0, 6).copy_from(&f1);
    h.fixed_view_mut::<3, 3>(3, 0).copy_from(&f2);
    h.fixed_view_mut::<3, 3>(3, 6).copy_from(&(-f0));
    h.fixed_view_mut::<3, 3>(6, 0).copy_from(&(-f1));
    h.fixed_view_mut::<3, 3>(6, 3).copy_from(&f0);
    h
}

/// The density at a given deformation gradient, as a 9-DOF kernel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StableNeoHookeanDensity<T: RealField + Copy> {
    /// The deformation gradient.
    pub f: Matrix3<T>,
    /// The material.
    pub params: StableNeoHookean<T>,
}

impl<T: RealField + Copy> Kernel<T, 9> for StableNeoHookeanDensity<T> {
    #[inline]
    fn value(&self) -> T {
        energy_density(&self.f, &self.params)
    }

    #[inline]
    fn gradient(&self) -> FlatMatrix<T> {
        energy_gradient(&self.f, &self.params)
    }

    #[inline]
    fn hessian(&self) -> SMatrix<T, 9, 9> {
        energy_hessian(&self.f, &self.params)
    }
}
