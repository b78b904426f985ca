use na::RealField;

use super::ContactCoefficient;
use crate::error::ParameterError;
use crate::kernel::Kernel;
use crate::math::{Gradient, Hessian, Real};

/// The clamped log barrier of incremental potential contact.
///
/// The barrier acts on squared distances `D`:
///
/// `b(D) = -(D - D̂)² ln(D / D̂)` if `0 < D < D̂`, and `0` otherwise,
///
/// where `D̂ = d̂²` is the squared activation distance. It is `C²` at `D̂` and
/// diverges as `D → 0`. Evaluating it at `D ≤ 0` is outside of its domain.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Barrier<T> {
    d_hat: T,
    d_hat2: T,
}

impl<T: RealField + Copy> Barrier<T> {
    /// Creates a barrier active below the distance `d_hat` (not squared).
    pub fn new(d_hat: T) -> Result<Self, ParameterError> {
        if !d_hat.is_finite() {
            return Err(ParameterError::non_finite("d_hat", d_hat));
        }
        if d_hat <= T::zero() {
            return Err(ParameterError::out_of_range("d_hat", d_hat, "(0, +inf)"));
        }

        Ok(Self {
            d_hat,
            d_hat2: d_hat * d_hat,
        })
    }

    /// The activation distance.
    #[inline]
    pub fn d_hat(&self) -> T {
        self.d_hat
    }

    /// The squared activation distance `D̂`.
    #[inline]
    pub fn d_hat2(&self) -> T {
        self.d_hat2
    }

    /// Is a pair at squared distance `d2` inside the activation range?
    #[inline]
    pub fn is_active(&self, d2: T) -> bool {
        d2 < self.d_hat2
    }

    /// `b(D)`.
    pub fn value(&self, d2: T) -> T {
        if !self.is_active(d2) {
            return T::zero();
        }

        let diff = d2 - self.d_hat2;
        -diff * diff * (d2 / self.d_hat2).ln()
    }

    /// `b'(D)`.
    pub fn derivative(&self, d2: T) -> T {
        if !self.is_active(d2) {
            return T::zero();
        }

        let two = T::one() + T::one();
        let diff = d2 - self.d_hat2;
        -two * diff * (d2 / self.d_hat2).ln() - diff * diff / d2
    }

    /// `b''(D)`.
    pub fn second_derivative(&self, d2: T) -> T {
        if !self.is_active(d2) {
            return T::zero();
        }

        let two = T::one() + T::one();
        let four = two + two;
        let diff = d2 - self.d_hat2;
        let ratio = diff / d2;
        -two * (d2 / self.d_hat2).ln() - four * ratio + ratio * ratio
    }

    /// The magnitude of the repulsive force `-kappa ∂b/∂d` at squared distance `d2`.
    ///
    /// This is the normal force bounding friction through
    /// [`ContactCoefficient::friction_bound`].
    pub fn normal_force(&self, kappa: T, d2: T) -> T {
        let two = T::one() + T::one();
        -kappa * self.derivative(d2) * two * d2.sqrt()
    }
}

/// A contact energy `kappa · b(D(x))` built on top of a squared-distance kernel.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactPotential<T, K> {
    /// The primitive pair providing `D(x)`.
    pub pair: K,
    /// The barrier stiffness.
    pub kappa: T,
    /// The barrier applied to `D(x)`.
    pub barrier: Barrier<T>,
}

impl<T: RealField + Copy, K> ContactPotential<T, K> {
    /// Creates a contact potential from an explicit stiffness.
    pub fn new(pair: K, kappa: T, barrier: Barrier<T>) -> Self {
        Self {
            pair,
            kappa,
            barrier,
        }
    }
}

impl<K> ContactPotential<Real, K> {
    /// Creates a contact potential using the stiffness of a contact coefficient.
    pub fn from_coefficient(pair: K, coeff: &ContactCoefficient, barrier: Barrier<Real>) -> Self {
        Self {
            pair,
            kappa: coeff.kappa(),
            barrier,
        }
    }
}

impl<T, K, const N: usize> Kernel<T, N> for ContactPotential<T, K>
where
    T: RealField + Copy,
    K: Kernel<T, N>,
{
    fn value(&self) -> T {
        self.kappa * self.barrier.value(self.pair.value())
    }

    fn gradient(&self) -> Gradient<T, N> {
        let d2 = self.pair.value();
        if !self.barrier.is_active(d2) {
            return Gradient::zeros();
        }

        self.pair.gradient() * (self.kappa * self.barrier.derivative(d2))
    }

    fn hessian(&self) -> Hessian<T, N> {
        let d2 = self.pair.value();
        if !self.barrier.is_active(d2) {
            return Hessian::zeros();
        }

        let grad = self.pair.gradient();
        let db = self.barrier.derivative(d2);
        let ddb = self.barrier.second_derivative(d2);

        (grad * grad.transpose() * ddb + self.pair.hessian() * db) * self.kappa
    }
}
