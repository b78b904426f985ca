use na::{Matrix3, Point3, RealField, SMatrix, SVector};

use super::stable_neo_hookean::{self, StableNeoHookean};
use crate::kernel::Kernel;

/// Error raised when building the rest shape of an element.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementError {
    /// The rest vertices are coplanar (or not finite): the element has no volume.
    #[error("the rest tetrahedron is degenerate.")]
    DegenerateRestShape,
}

/// The rest configuration of a linear tetrahedron.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TetRestShape<T: RealField + Copy> {
    dm_inv: Matrix3<T>,
    volume: T,
}

impl<T: RealField + Copy> TetRestShape<T> {
    /// Precomputes the inverse rest edge matrix `Dm⁻¹` and the rest volume.
    pub fn new(x: &[Point3<T>; 4]) -> Result<Self, ElementError> {
        let dm = edge_matrix(x);
        let det = dm.determinant();

        if !det.is_finite() || det == T::zero() {
            return Err(ElementError::DegenerateRestShape);
        }

        let dm_inv = dm.try_inverse().ok_or(ElementError::DegenerateRestShape)?;
        let six: T = na::convert(6.0);

        Ok(Self {
            dm_inv,
            volume: det.abs() / six,
        })
    }

    /// The inverse of the rest edge matrix `[x1 - x0, x2 - x0, x3 - x0]`.
    #[inline]
    pub fn dm_inv(&self) -> &Matrix3<T> {
        &self.dm_inv
    }

    /// The (unsigned) rest volume.
    #[inline]
    pub fn volume(&self) -> T {
        self.volume
    }

    /// The deformation gradient `F = Ds Dm⁻¹` of the deformed vertices `x`.
    pub fn deformation_gradient(&self, x: &[Point3<T>; 4]) -> Matrix3<T> {
        edge_matrix(x) * self.dm_inv
    }

    /// The constant map `∂vec(F)/∂x` from the 12 vertex DOFs to the 9 entries
    /// of `F` (column-major).
    pub fn dfdx(&self) -> SMatrix<T, 9, 12> {
        let mut dfdx = SMatrix::<T, 9, 12>::zeros();

        for j in 0..3 {
            let sum = self.dm_inv.column(j).sum();

            for i in 0..3 {
                dfdx[(3 * j + i, i)] = -sum;

                for k in 0..3 {
                    dfdx[(3 * j + i, 3 * (k + 1) + i)] = self.dm_inv[(k, j)];
                }
            }
        }

        dfdx
    }
}

fn edge_matrix<T: RealField + Copy>(x: &[Point3<T>; 4]) -> Matrix3<T> {
    Matrix3::from_columns(&[x[1] - x[0], x[2] - x[0], x[3] - x[0]])
}

/// A stable Neo-Hookean tetrahedron, as a 12-DOF kernel over its vertices.
///
/// The element energy is `V Ψ(F)`, `V` being the rest volume.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TetElement<T: RealField + Copy> {
    /// The rest shape.
    pub rest: TetRestShape<T>,
    /// The material.
    pub material: StableNeoHookean<T>,
    /// The current vertex positions.
    pub x: [Point3<T>; 4],
}

impl<T: RealField + Copy> TetElement<T> {
    /// Creates an element from its rest shape, material and current positions.
    pub fn new(rest: TetRestShape<T>, material: StableNeoHookean<T>, x: [Point3<T>; 4]) -> Self {
        Self { rest, material, x }
    }

    /// The current deformation gradient.
    #[inline]
    pub fn deformation_gradient(&self) -> Matrix3<T> {
        self.rest.deformation_gradient(&self.x)
    }
}

impl<T: RealField + Copy> Kernel<T, 12> for TetElement<T> {
    fn value(&self) -> T {
        stable_neo_hookean::energy_density(&self.deformation_gradient(), &self.material)
            * self.rest.volume
    }

    fn gradient(&self) -> SVector<T, 12> {
        let p = stable_neo_hookean::energy_gradient(&self.deformation_gradient(), &self.material);
        self.rest.dfdx().tr_mul(&p) * self.rest.volume
    }

    fn hessian(&self) -> SMatrix<T, 12, 12> {
        let h = stable_neo_hookean::energy_hessian(&self.deformation_gradient(), &self.material);
        let dfdx = self.rest.dfdx();
        dfdx.tr_mul(&(h * dfdx)) * self.rest.volume
    }
}
