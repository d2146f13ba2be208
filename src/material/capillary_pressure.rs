use super::{CapillaryBrooksCorey, CapillaryVanGenuchten};
use crate::base::ParamCapillaryPressure;
use crate::StrError;

/// Specifies the essential functions for capillary pressure models
///
/// The independent variable is the liquid (wetting phase) saturation S. The functions never fail:
/// saturations outside the admissible range are clamped.
pub trait CapillaryPressureTrait: Send + Sync {
    /// Calculates the capillary pressure pc(S)
    fn pressure(&self, sat: f64) -> f64;

    /// Calculates the first derivative dpc/dS
    fn d_pressure(&self, sat: f64) -> f64;

    /// Calculates the second derivative d²pc/dS²
    fn d2_pressure(&self, sat: f64) -> f64;
}

/// Holds the actual capillary pressure model implementation
pub struct ModelCapillaryPressure {
    /// Holds the actual model implementation
    pub actual: Box<dyn CapillaryPressureTrait>,
}

impl ModelCapillaryPressure {
    /// Allocates a new instance
    pub fn new(param: &ParamCapillaryPressure) -> Result<Self, StrError> {
        let actual: Box<dyn CapillaryPressureTrait> = match *param {
            ParamCapillaryPressure::VanGenuchten {
                sat_lr,
                sat_ls,
                m,
                pc_max,
                p0,
            } => Box::new(CapillaryVanGenuchten::new(sat_lr, sat_ls, m, pc_max, p0)?),
            ParamCapillaryPressure::BrooksCorey {
                sat_lr,
                sat_ls,
                lambda,
                pe,
                pc_max,
            } => Box::new(CapillaryBrooksCorey::new(sat_lr, sat_ls, lambda, pe, pc_max)?),
        };
        Ok(ModelCapillaryPressure { actual })
    }
}

/// Returns the normalized saturation or None if S is outside the open interval (sat_lr, sat_ls)
pub(crate) fn normalized_saturation(sat: f64, sat_lr: f64, sat_ls: f64) -> Option<f64> {
    if sat <= sat_lr || sat >= sat_ls {
        None
    } else {
        Some((sat - sat_lr) / (sat_ls - sat_lr))
    }
}

/// Checks that a saturation limit is within [0, 1]
pub(crate) fn valid_saturation_limit(value: f64) -> bool {
    value >= 0.0 && value <= 1.0
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
