/*!
ipcore
======

**ipcore** is a library of differentiable kernels for barrier-based (incremental
potential) contact simulation of affine bodies and finite-element deformables,
written with the rust programming language.

Every kernel is a pure function returning a scalar together with its exact
gradient and Hessian with respect to the degrees of freedom of one primitive
pair or one element. Kernels are generic over the scalar type so the same
formula runs in `f64` for validation and in `f32` for throughput.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod animation;
pub mod batch;
pub mod constitution;
pub mod contact;
pub mod error;
pub mod kernel;
pub mod query;
pub mod utils;

mod real {
    /// The scalar type used by configuration-level values of this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used by configuration-level values of this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Point3, SMatrix, SVector, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// A deformation gradient flattened column-major.
    pub type FlatMatrix<N> = SVector<N, 9>;

    /// The gradient of a kernel with `D` degrees of freedom.
    pub type Gradient<N, const D: usize> = SVector<N, D>;

    /// The Hessian of a kernel with `D` degrees of freedom.
    pub type Hessian<N, const D: usize> = SMatrix<N, D, D>;
}
