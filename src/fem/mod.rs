//! Implements the element-level kernels: finite strain kinematics and dynamic stress divergence

mod dynamic_stress_divergence;
mod element_integration;
mod property_storage;
mod spherical_finite_strain;
pub use crate::fem::dynamic_stress_divergence::*;
pub use crate::fem::element_integration::*;
pub use crate::fem::property_storage::*;
pub use crate::fem::spherical_finite_strain::*;
