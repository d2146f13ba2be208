use super::{ParamCapillaryPressure, ParamStressDivergence};

/// Holds samples of material/kernel parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for the van Genuchten capillary pressure model
    pub fn param_van_genuchten() -> ParamCapillaryPressure {
        ParamCapillaryPressure::VanGenuchten {
            sat_lr: 0.1,
            sat_ls: 0.9,
            m: 0.5,
            pc_max: 10.0,
            p0: 1.0,
        }
    }

    /// Returns sample parameters for the Brooks-Corey capillary pressure model
    pub fn param_brooks_corey() -> ParamCapillaryPressure {
        ParamCapillaryPressure::BrooksCorey {
            sat_lr: 0.1,
            sat_ls: 0.9,
            lambda: 2.0,
            pe: 1.0,
            pc_max: 10.0,
        }
    }

    /// Returns sample parameters for the dynamic stress divergence
    pub fn param_stress_divergence() -> ParamStressDivergence {
        ParamStressDivergence {
            zeta: 0.1,
            alpha: -0.3,
            base_name: String::new(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
