use serde::{Deserialize, Serialize};

/// Holds parameters for capillary pressure models
///
/// The capillary pressure `pc` is a function of the liquid (wetting phase) saturation `S`
/// written in terms of the normalized saturation:
///
/// ```text
///        S - sat_lr
/// seff = ───────────────
///        sat_ls - sat_lr
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum ParamCapillaryPressure {
    /// van Genuchten model
    ///
    /// ```text
    /// pc = p0 (seff^(-1/m) - 1)^(1-m)  with  pc ≤ pc_max
    /// ```
    VanGenuchten {
        /// Liquid residual saturation (0 ≤ sat_lr ≤ 1)
        sat_lr: f64,

        /// Liquid fully saturated saturation (0 ≤ sat_ls ≤ 1)
        sat_ls: f64,

        /// van Genuchten exponent (0 ≤ m ≤ 1)
        m: f64,

        /// Maximum capillary pressure
        pc_max: f64,

        /// Capillary pressure coefficient
        p0: f64,
    },

    /// Brooks-Corey model
    ///
    /// ```text
    /// pc = pe seff^(-1/λ)  with  pc ≤ pc_max
    /// ```
    BrooksCorey {
        /// Liquid residual saturation (0 ≤ sat_lr ≤ 1)
        sat_lr: f64,

        /// Liquid fully saturated saturation (0 ≤ sat_ls ≤ 1)
        sat_ls: f64,

        /// Pore-size distribution index λ (> 0)
        lambda: f64,

        /// Air-entry (threshold) pressure
        pe: f64,

        /// Maximum capillary pressure
        pc_max: f64,
    },
}

/// Holds parameters for the dynamic stress divergence (Rayleigh damping and HHT time integration)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamStressDivergence {
    /// Stiffness-proportional Rayleigh damping coefficient ζ
    #[serde(default)]
    pub zeta: f64,

    /// HHT time integration parameter α
    #[serde(default)]
    pub alpha: f64,

    /// Prefix of the stress property name (e.g., "concrete_" gives "concrete_stress")
    #[serde(default)]
    pub base_name: String,
}

impl Default for ParamStressDivergence {
    /// Returns the quasi-static parameters (no damping and no HHT correction)
    fn default() -> Self {
        ParamStressDivergence {
            zeta: 0.0,
            alpha: 0.0,
            base_name: String::new(),
        }
    }
}

impl ParamStressDivergence {
    /// Returns the name of the stress property read from the property storage
    pub fn stress_name(&self) -> String {
        format!("{}stress", self.base_name)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
