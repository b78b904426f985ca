//! Evaluation of many kernels at once.
//!
//! Output slot `i` is written by kernel `i` only, so evaluations never share
//! mutable state. With the `parallel` feature enabled, kernels are evaluated on
//! the rayon thread pool.

use na::{RealField, SMatrix, SVector};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::kernel::Kernel;

/// Error raised when an output slice does not match the kernel slice.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BatchError {
    /// The output slice length differs from the number of kernels.
    #[error("expected an output slice of length {expected}, got {got}.")]
    LengthMismatch {
        /// The number of kernels.
        expected: usize,
        /// The length of the output slice.
        got: usize,
    },
}

fn check_len(expected: usize, got: usize) -> Result<(), BatchError> {
    if expected == got {
        Ok(())
    } else {
        Err(BatchError::LengthMismatch { expected, got })
    }
}

#[cfg(feature = "parallel")]
fn for_each_slot<K: Sync, O: Send>(kernels: &[K], out: &mut [O], f: impl Fn(&K, &mut O) + Sync) {
    out.par_iter_mut()
        .zip(kernels.par_iter())
        .for_each(|(o, k)| f(k, o));
}

#[cfg(not(feature = "parallel"))]
fn for_each_slot<K: Sync, O: Send>(kernels: &[K], out: &mut [O], f: impl Fn(&K, &mut O) + Sync) {
    out.iter_mut().zip(kernels.iter()).for_each(|(o, k)| f(k, o));
}

/// Writes the value of `kernels[i]` to `out[i]`.
pub fn values<T, K, const N: usize>(kernels: &[K], out: &mut [T]) -> Result<(), BatchError>
where
    T: RealField + Copy,
    K: Kernel<T, N> + Sync,
{
    check_len(kernels.len(), out.len())?;
    for_each_slot(kernels, out, |k, o| *o = k.value());
    Ok(())
}

/// Writes the gradient of `kernels[i]` to `out[i]`.
pub fn gradients<T, K, const N: usize>(
    kernels: &[K],
    out: &mut [SVector<T, N>],
) -> Result<(), BatchError>
where
    T: RealField + Copy,
    K: Kernel<T, N> + Sync,
{
    check_len(kernels.len(), out.len())?;
    for_each_slot(kernels, out, |k, o| *o = k.gradient());
    Ok(())
}

/// Writes the Hessian of `kernels[i]` to `out[i]`.
pub fn hessians<T, K, const N: usize>(
    kernels: &[K],
    out: &mut [SMatrix<T, N, N>],
) -> Result<(), BatchError>
where
    T: RealField + Copy,
    K: Kernel<T, N> + Sync,
{
    check_len(kernels.len(), out.len())?;
    for_each_slot(kernels, out, |k, o| *o = k.hessian());
    Ok(())
}

/// Writes the value, gradient and Hessian of `kernels[i]` to the `i`-th slot
/// of each output.
///
/// All lengths are checked before anything is written.
pub fn evaluate<T, K, const N: usize>(
    kernels: &[K],
    values: &mut [T],
    gradients: &mut [SVector<T, N>],
    hessians: &mut [SMatrix<T, N, N>],
) -> Result<(), BatchError>
where
    T: RealField + Copy,
    K: Kernel<T, N> + Sync,
{
    check_len(kernels.len(), values.len())?;
    check_len(kernels.len(), gradients.len())?;
    check_len(kernels.len(), hessians.len())?;

    for_each_slot(kernels, values, |k, o| *o = k.value());
    for_each_slot(kernels, gradients, |k, o| *o = k.gradient());
    for_each_slot(kernels, hessians, |k, o| *o = k.hessian());
    Ok(())
}
