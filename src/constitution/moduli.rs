use na::RealField;

use crate::error::{check_non_negative, ParameterError};

/// The isotropic elastic moduli of a material.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ElasticModuli<T> {
    youngs_modulus: T,
    poisson_ratio: T,
}

impl<T: RealField + Copy> ElasticModuli<T> {
    /// Moduli from a Young's modulus (Pa) and a Poisson ratio.
    ///
    /// Fails unless `E ≥ 0` and `-1 < ν < 0.5`.
    pub fn youngs_poisson(youngs_modulus: T, poisson_ratio: T) -> Result<Self, ParameterError> {
        let youngs_modulus = check_non_negative("youngs_modulus", youngs_modulus)?;

        if !poisson_ratio.is_finite() {
            return Err(ParameterError::non_finite("poisson_ratio", poisson_ratio));
        }

        let half = T::one() / (T::one() + T::one());
        if poisson_ratio <= -T::one() || poisson_ratio >= half {
            return Err(ParameterError::out_of_range(
                "poisson_ratio",
                poisson_ratio,
                "(-1, 0.5)",
            ));
        }

        Ok(Self {
            youngs_modulus,
            poisson_ratio,
        })
    }

    /// Young's modulus `E`.
    #[inline]
    pub fn youngs_modulus(&self) -> T {
        self.youngs_modulus
    }

    /// Poisson ratio `ν`.
    #[inline]
    pub fn poisson_ratio(&self) -> T {
        self.poisson_ratio
    }

    /// The shear modulus (second Lamé parameter) `μ = E / (2(1 + ν))`.
    #[inline]
    pub fn shear_modulus(&self) -> T {
        let two = T::one() + T::one();
        self.youngs_modulus / (two * (T::one() + self.poisson_ratio))
    }

    /// The first Lamé parameter `λ = Eν / ((1 + ν)(1 - 2ν))`.
    #[inline]
    pub fn lame_lambda(&self) -> T {
        let two = T::one() + T::one();
        let nu = self.poisson_ratio;
        self.youngs_modulus * nu / ((T::one() + nu) * (T::one() - two * nu))
    }

    /// The bulk modulus `K = λ + 2μ/3`.
    #[inline]
    pub fn bulk_modulus(&self) -> T {
        let two = T::one() + T::one();
        let three = two + T::one();
        self.lame_lambda() + two * self.shear_modulus() / three
    }
}
