use serde::{Deserialize, Serialize};

/// Specifies the registry of fluid phases and components of a porous flow problem
///
/// The registry is owned by the host simulation and queried once by the materials at construction.
pub trait PhaseRegistry {
    /// Returns the number of fluid phases
    fn num_phases(&self) -> usize;

    /// Returns the number of fluid components
    fn num_components(&self) -> usize;
}

/// Holds the declared fluid phases and components
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct FluidPhases {
    /// Number of fluid phases
    pub n_phase: usize,

    /// Number of fluid components
    pub n_component: usize,
}

impl FluidPhases {
    /// Allocates a new instance
    pub fn new(n_phase: usize, n_component: usize) -> Self {
        FluidPhases { n_phase, n_component }
    }
}

impl PhaseRegistry for FluidPhases {
    fn num_phases(&self) -> usize {
        self.n_phase
    }

    fn num_components(&self) -> usize {
        self.n_component
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
