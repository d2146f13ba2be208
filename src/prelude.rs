//! Makes available common structures needed to evaluate the kernels
//!
//! You may write `use pmkernels::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, CoordSystem, FluidPhases, PhaseRegistry, SampleParams};
pub use crate::base::{ParamCapillaryPressure, ParamStressDivergence};
pub use crate::fem::{DynamicStressDivergence, ElementIntegration, PropertyStorage, SphericalFiniteStrain, StressHistory};
pub use crate::material::{ModelCapillaryPressure, StrainState, TwoPhasePS, TwoPhaseState};
