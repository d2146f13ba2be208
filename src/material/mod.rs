//! Implements material models: capillary pressure, the two-phase PS material, and finite strain updates

mod capillary_brooks_corey;
mod capillary_pressure;
mod capillary_van_genuchten;
mod finite_strain;
mod two_phase_ps;
pub use crate::material::capillary_brooks_corey::*;
pub use crate::material::capillary_pressure::*;
pub use crate::material::capillary_van_genuchten::*;
pub use crate::material::finite_strain::*;
pub use crate::material::two_phase_ps::*;
