use super::{CoordSystem, FluidPhases, ParamCapillaryPressure, ParamStressDivergence};
use crate::material::ModelCapillaryPressure;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds configuration data for the material and element kernels
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Coordinate system of the elements
    pub coord_system: CoordSystem,

    /// Declared fluid phases and components
    pub fluid_phases: FluidPhases,

    /// Parameters of the capillary pressure model (two-phase problems only)
    #[serde(default)]
    pub capillary_pressure: Option<ParamCapillaryPressure>,

    /// Parameters of the dynamic stress divergence
    #[serde(default)]
    pub stress_divergence: ParamStressDivergence,

    /// Prints diagnostic messages
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Allocates a new instance
    ///
    /// # Default values
    ///
    /// * Cartesian coordinates
    /// * One fluid phase with one component
    /// * No capillary pressure model
    /// * Quasi-static stress divergence (ζ = α = 0)
    pub fn new() -> Self {
        Config {
            coord_system: CoordSystem::Cartesian,
            fluid_phases: FluidPhases::new(1, 1),
            capillary_pressure: None,
            stress_divergence: ParamStressDivergence::default(),
            verbose: false,
        }
    }

    /// Parses a JSON string and validates the configuration
    pub fn from_json(json: &str) -> Result<Self, StrError> {
        let config: Config = serde_json::from_str(json).map_err(|_| "cannot parse JSON configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON file and validates the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(file);
        let config: Config = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all data
    pub fn validate(&self) -> Result<(), StrError> {
        if self.fluid_phases.n_phase < 1 {
            return Err("number of fluid phases must be ≥ 1");
        }
        if self.fluid_phases.n_component < 1 {
            return Err("number of fluid components must be ≥ 1");
        }
        if let Some(param) = &self.capillary_pressure {
            ModelCapillaryPressure::new(param)?;
        }
        if !self.stress_divergence.zeta.is_finite() || !self.stress_divergence.alpha.is_finite() {
            return Err("zeta and alpha must be finite numbers");
        }
        Ok(())
    }

    /// Sets the coordinate system
    pub fn set_coord_system(&mut self, coord_system: CoordSystem) -> Result<&mut Self, StrError> {
        self.coord_system = coord_system;
        Ok(self)
    }

    /// Sets the number of fluid phases and components
    pub fn set_fluid_phases(&mut self, n_phase: usize, n_component: usize) -> Result<&mut Self, StrError> {
        if n_phase < 1 {
            return Err("number of fluid phases must be ≥ 1");
        }
        if n_component < 1 {
            return Err("number of fluid components must be ≥ 1");
        }
        self.fluid_phases = FluidPhases::new(n_phase, n_component);
        Ok(self)
    }

    /// Sets the parameters of the capillary pressure model
    pub fn set_capillary_pressure(&mut self, param: ParamCapillaryPressure) -> Result<&mut Self, StrError> {
        ModelCapillaryPressure::new(&param)?;
        self.capillary_pressure = Some(param);
        Ok(self)
    }

    /// Sets the Rayleigh damping (ζ) and HHT (α) parameters
    pub fn set_damping(&mut self, zeta: f64, alpha: f64) -> Result<&mut Self, StrError> {
        if !zeta.is_finite() || !alpha.is_finite() {
            return Err("zeta and alpha must be finite numbers");
        }
        self.stress_divergence.zeta = zeta;
        self.stress_divergence.alpha = alpha;
        Ok(self)
    }

    /// Sets the prefix of the stress property name
    pub fn set_base_name(&mut self, base_name: &str) -> Result<&mut Self, StrError> {
        self.stress_divergence.base_name = base_name.to_string();
        Ok(self)
    }

    /// Enables or disables diagnostic messages
    pub fn set_verbose(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.verbose = flag;
        Ok(self)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
