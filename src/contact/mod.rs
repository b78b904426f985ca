//! Contact coefficients, their registry, and the log barrier they scale.

pub use self::barrier::{Barrier, ContactPotential};
pub use self::coefficient::{CombineRule, ContactCoefficient};
pub use self::tabular::{ContactElement, ContactTabular, TabularError};

mod barrier;
mod coefficient;
mod tabular;
