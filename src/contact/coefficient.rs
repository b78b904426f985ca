use crate::error::{check_non_negative, ParameterError};
use crate::math::{Real, Vector};

/// The stiffness and friction of one contact pair.
///
/// `kappa` scales the barrier energy `E = kappa · b(d²)`; `mu` bounds the
/// tangential (friction) force by `mu` times the normal force.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "bytemuck",
    derive(bytemuck::Pod, bytemuck::Zeroable)
)]
#[repr(C)]
pub struct ContactCoefficient {
    kappa: Real,
    mu: Real,
}

// Device buffers read coefficients as two packed scalars.
static_assertions::assert_eq_size!(ContactCoefficient, [Real; 2]);

/// How two touching materials' coefficients are merged into one.
///
/// The same rule is applied independently to `kappa` and to `mu`. Every rule
/// keeps `kappa ≥ 0` and `mu ∈ [0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CombineRule {
    /// The smaller of the two values.
    #[default]
    Min,
    /// The larger of the two values.
    Max,
    /// The arithmetic mean.
    Average,
    /// The geometric mean `sqrt(a b)`.
    GeometricMean,
    /// The harmonic mean `2ab / (a + b)`, zero if both are zero.
    HarmonicMean,
}

impl CombineRule {
    /// Merges two non-negative values.
    pub fn combine(self, a: Real, b: Real) -> Real {
        match self {
            CombineRule::Min => a.min(b),
            CombineRule::Max => a.max(b),
            CombineRule::Average => (a + b) * 0.5,
            CombineRule::GeometricMean => na::ComplexField::sqrt(a * b),
            CombineRule::HarmonicMean => {
                if a + b == 0.0 {
                    0.0
                } else {
                    2.0 * a * b / (a + b)
                }
            }
        }
    }
}

impl ContactCoefficient {
    /// Creates a contact coefficient.
    ///
    /// Fails if `kappa` is negative or if `mu` is outside of `[0, 1]`.
    pub fn new(kappa: Real, mu: Real) -> Result<Self, ParameterError> {
        let kappa = check_non_negative("kappa", kappa)?;

        if !mu.is_finite() {
            return Err(ParameterError::non_finite("mu", mu));
        }
        if !(0.0..=1.0).contains(&mu) {
            return Err(ParameterError::out_of_range("mu", mu, "[0, 1]"));
        }

        Ok(Self { kappa, mu })
    }

    /// Builds a coefficient from values already known to be admissible.
    pub(crate) const fn new_unchecked(kappa: Real, mu: Real) -> Self {
        Self { kappa, mu }
    }

    /// The normal (barrier) stiffness.
    #[inline]
    pub fn kappa(&self) -> Real {
        self.kappa
    }

    /// The friction coefficient.
    #[inline]
    pub fn mu(&self) -> Real {
        self.mu
    }

    /// The effective coefficient of a contact between two materials.
    pub fn combine(&self, other: &Self, rule: CombineRule) -> Self {
        Self {
            kappa: rule.combine(self.kappa, other.kappa),
            mu: rule.combine(self.mu, other.mu),
        }
    }

    /// The largest admissible tangential force magnitude for the given normal force.
    #[inline]
    pub fn friction_bound(&self, normal_force: Real) -> Real {
        self.mu * normal_force.max(0.0)
    }

    /// Projects a tangential force onto the Coulomb cone of radius `mu · normal_force`.
    pub fn clamp_tangential_force(
        &self,
        tangential_force: &Vector<Real>,
        normal_force: Real,
    ) -> Vector<Real> {
        let bound = self.friction_bound(normal_force);
        let norm = tangential_force.norm();

        if norm > bound {
            tangential_force * (bound / norm)
        } else {
            *tangential_force
        }
    }
}
