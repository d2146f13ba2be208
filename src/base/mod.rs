//! Implements the base structures: parameters, configuration, and collaborator interfaces

mod config;
mod enums;
mod parameters;
mod phase_registry;
mod samples;
mod tensor_algebra;
pub use crate::base::config::*;
pub use crate::base::enums::*;
pub use crate::base::parameters::*;
pub use crate::base::phase_registry::*;
pub use crate::base::samples::*;
pub use crate::base::tensor_algebra::*;
