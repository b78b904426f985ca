//! Elastic energies of finite elements and affine bodies.

pub use self::affine_body::{AffineBodyStiffness, OrthogonalPotential};
pub use self::moduli::ElasticModuli;
pub use self::stable_neo_hookean::StableNeoHookean;
pub use self::tetrahedron::{ElementError, TetElement, TetRestShape};

pub mod affine_body;
mod moduli;
pub mod stable_neo_hookean;
mod tetrahedron;
