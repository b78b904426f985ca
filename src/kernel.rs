//! The common shape of every differentiable kernel.

use na::{RealField, SMatrix, SVector};

/// A scalar function of `N` degrees of freedom with its exact derivatives.
///
/// Implemented by every primitive pair (squared distance) and every element
/// (strain energy) of this crate. Evaluation must be pure: the same value
/// always yields the same outputs, so independent kernels can be evaluated
/// concurrently (see [`batch`](crate::batch)).
pub trait Kernel<T: RealField + Copy, const N: usize> {
    /// The scalar value.
    fn value(&self) -> T;

    /// The gradient of [`Kernel::value`] with respect to the degrees of freedom.
    fn gradient(&self) -> SVector<T, N>;

    /// The Hessian of [`Kernel::value`] with respect to the degrees of freedom.
    ///
    /// Symmetric by construction.
    fn hessian(&self) -> SMatrix<T, N, N>;
}
