//! Errors raised when building kernel parameters.

use na::RealField;
use simba::scalar::SupersetOf;

/// A physical parameter was rejected at construction time.
///
/// This is the only validation performed by this crate: kernels assume their
/// parameters were built through one of the checked constructors, so an
/// out-of-range stiffness or Poisson ratio never reaches a kernel call.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ParameterError {
    /// The parameter is NaN or infinite.
    #[error("the parameter `{name}` must be finite, got {value}.")]
    NonFinite {
        /// The name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The parameter must be non-negative.
    #[error("the parameter `{name}` must be non-negative, got {value}.")]
    Negative {
        /// The name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The parameter lies outside of its admissible range.
    #[error("the parameter `{name}` must lie in {range}, got {value}.")]
    OutOfRange {
        /// The name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable admissible range.
        range: &'static str,
    },
}

impl ParameterError {
    pub(crate) fn non_finite<T: RealField>(name: &'static str, value: T) -> Self {
        Self::NonFinite {
            name,
            value: as_f64(value),
        }
    }

    pub(crate) fn negative<T: RealField>(name: &'static str, value: T) -> Self {
        Self::Negative {
            name,
            value: as_f64(value),
        }
    }

    pub(crate) fn out_of_range<T: RealField>(
        name: &'static str,
        value: T,
        range: &'static str,
    ) -> Self {
        Self::OutOfRange {
            name,
            value: as_f64(value),
            range,
        }
    }
}

/// Checks that `value` is finite and non-negative.
pub(crate) fn check_non_negative<T: RealField + Copy>(
    name: &'static str,
    value: T,
) -> Result<T, ParameterError> {
    if !value.is_finite() {
        Err(ParameterError::non_finite(name, value))
    } else if value < T::zero() {
        Err(ParameterError::negative(name, value))
    } else {
        Ok(value)
    }
}

fn as_f64<T: RealField>(value: T) -> f64 {
    SupersetOf::<f64>::to_subset(&value).unwrap_or(f64::NAN)
}
