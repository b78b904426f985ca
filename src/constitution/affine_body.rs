//! Affine body dynamics: the orthogonality potential and the affine Jacobian.
//!
//! An affine body has 12 DOFs `q = [t, a₀, a₁, a₂]` where `t` is a translation
//! and `aᵢ` is the `i`-th row of the affine matrix `A`. A material point of rest
//! coordinates `x̄` lies at `x = t + A x̄`.

use na::{Matrix3, Point3, RealField, SMatrix, SVector, Vector3};

use crate::error::{check_non_negative, ParameterError};
use crate::kernel::Kernel;

/// The stiffness `κ` of the orthogonality potential.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AffineBodyStiffness<T> {
    kappa: T,
}

impl<T: RealField + Copy> AffineBodyStiffness<T> {
    /// Fails if `kappa` is negative or not finite.
    pub fn new(kappa: T) -> Result<Self, ParameterError> {
        Ok(Self {
            kappa: check_non_negative("kappa", kappa)?,
        })
    }

    /// The stiffness value.
    #[inline]
    pub fn kappa(&self) -> T {
        self.kappa
    }
}

/// The affine matrix `A` whose rows are `a₀, a₁, a₂`.
pub fn affine_matrix<T: RealField + Copy>(q: &SVector<T, 12>) -> Matrix3<T> {
    Matrix3::from_rows(&[
        q.fixed_rows::<3>(3).transpose(),
        q.fixed_rows::<3>(6).transpose(),
        q.fixed_rows::<3>(9).transpose(),
    ])
}

/// The world-space position `t + A x̄` of the material point `x̄`.
pub fn world_position<T: RealField + Copy>(q: &SVector<T, 12>, x_bar: &Point3<T>) -> Point3<T> {
    let t = Vector3::new(q[0], q[1], q[2]);
    Point3::from(t + affine_matrix(q) * x_bar.coords)
}

/// The constant Jacobian `∂x/∂q` of the material point `x̄`.
pub fn jacobian<T: RealField + Copy>(x_bar: &Point3<T>) -> SMatrix<T, 3, 12> {
    let mut j = SMatrix::<T, 3, 12>::zeros();

    for i in 0..3 {
        j[(i, i)] = T::one();

        for k in 0..3 {
            j[(i, 3 + 3 * i + k)] = x_bar[k];
        }
    }

    j
}

/// `κ ‖A Aᵀ − I‖²_F`.
pub fn orthogonal_potential<T: RealField + Copy>(q: &SVector<T, 12>, kappa: T) -> T {
    let a = affine_matrix(q);
    (a * a.transpose() - Matrix3::identity()).norm_squared() * kappa
}

/// The gradient of [`orthogonal_potential`] with respect to `q`.
pub fn orthogonal_potential_gradient<T: RealField + Copy>(
    q: &SVector<T, 12>,
    kappa: T,
) -> SVector<T, 12> {
    let a = affine_matrix(q);
    // Row k of (A Aᵀ − I) A is Σ_j (a_k · a_j − δ_kj) a_j.
    let rows = (a * a.transpose() - Matrix3::identity()) * a;
    let four = T::one() + T::one() + T::one() + T::one();
    let mut grad = SVector::<T, 12>::zeros();

    for k in 0..3 {
        grad.fixed_rows_mut::<3>(3 + 3 * k)
            .copy_from(&(rows.row(k).transpose() * (four * kappa)));
    }

    grad
}

/// The Hessian of [`orthogonal_potential`] with respect to `q`.
pub fn orthogonal_potential_hessian<T: RealField + Copy>(
    q: &SVector<T, 12>,
    kappa: T,
) -> SMatrix<T, 12, 12> {
    let a = affine_matrix(q);
    let rows: [Vector3<T>; 3] = [
        a.row(0).transpose(),
        a.row(1).transpose(),
        a.row(2).transpose(),
    ];
    let gram = a.transpose() * a; // Σ_j a_j a_jᵀ
    let four = T::one() + T::one() + T::one() + T::one();
    let mut hess = SMatrix::<T, 12, 12>::zeros();

    for k in 0..3 {
        for l in 0..3 {
            let block = if k == l {
                gram + rows[k] * rows[k].transpose()
                    + Matrix3::identity() * (rows[k].norm_squared() - T::one())
            } else {
                rows[l] * rows[k].transpose() + Matrix3::identity() * rows[k].dot(&rows[l])
            };

            hess.fixed_view_mut::<3, 3>(3 + 3 * k, 3 + 3 * l)
                .copy_from(&(block * (four * kappa)));
        }
    }

    hess
}

/// The orthogonality potential of one affine body, as a 12-DOF kernel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrthogonalPotential<T: RealField + Copy> {
    /// The affine body DOFs.
    pub q: SVector<T, 12>,
    /// The stiffness.
    pub stiffness: AffineBodyStiffness<T>,
}

impl<T: RealField + Copy> Kernel<T, 12> for OrthogonalPotential<T> {
    #[inline]
    fn value(&self) -> T {
        orthogonal_potential(&self.q, self.stiffness.kappa)
    }

    #[inline]
    fn gradient(&self) -> SVector<T, 12> {
        orthogonal_potential_gradient(&self.q, self.stiffness.kappa)
    }

    #[inline]
    fn hessian(&self) -> SMatrix<T, 12, 12> {
        orthogonal_potential_hessian(&self.q, self.stiffness.kappa)
    }
}
