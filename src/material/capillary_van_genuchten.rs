use super::{normalized_saturation, valid_saturation_limit, CapillaryPressureTrait};
use crate::StrError;

/// Implements the van Genuchten model for the capillary pressure
///
/// ```text
///        S - sat_lr
/// seff = ───────────────          pc = min(p0 (seff^(-1/m) - 1)^(1-m), pc_max)
///        sat_ls - sat_lr
/// ```
///
/// The curve is clamped outside (sat_lr, sat_ls): `pc = pc_max` if `S ≤ sat_lr` and `pc = 0` if `S ≥ sat_ls`.
/// The clamping at `pc_max` also applies in the interior near sat_lr where the power law goes to infinity;
/// thus the curve is continuous at both breakpoints.
///
/// # Reference
///
/// * van Genuchten MT (1980) A closed-form equation for predicting the hydraulic conductivity of
///   unsaturated soils. Soil Science Society of America Journal, 44(5), 892-898
pub struct CapillaryVanGenuchten {
    sat_lr: f64, // liquid residual saturation
    sat_ls: f64, // liquid fully saturated saturation
    m: f64,      // exponent
    pc_max: f64, // maximum capillary pressure
    p0: f64,     // capillary pressure coefficient
}

impl CapillaryVanGenuchten {
    /// Allocates a new instance
    pub fn new(sat_lr: f64, sat_ls: f64, m: f64, pc_max: f64, p0: f64) -> Result<Self, StrError> {
        if !valid_saturation_limit(sat_lr) {
            return Err("sat_lr parameter for the van Genuchten capillary pressure model must be in [0, 1]");
        }
        if !valid_saturation_limit(sat_ls) {
            return Err("sat_ls parameter for the van Genuchten capillary pressure model must be in [0, 1]");
        }
        if !(m >= 0.0 && m <= 1.0) {
            return Err("m parameter for the van Genuchten capillary pressure model must be in [0, 1]");
        }
        if !(pc_max >= 0.0) {
            return Err("pc_max parameter for the van Genuchten capillary pressure model must be ≥ 0");
        }
        if !(p0 >= 0.0) {
            return Err("p0 parameter for the van Genuchten capillary pressure model must be ≥ 0");
        }
        Ok(CapillaryVanGenuchten {
            sat_lr,
            sat_ls,
            m,
            pc_max,
            p0,
        })
    }

    /// Calculates the (unclamped) power law and the auxiliary variables
    ///
    /// Returns `(pc, a, x)` with `a = seff^(-1/m)` and `x = a - 1`
    fn power_law(&self, seff: f64) -> (f64, f64, f64) {
        let a = f64::powf(seff, -1.0 / self.m);
        let x = a - 1.0;
        (self.p0 * f64::powf(x, 1.0 - self.m), a, x)
    }
}

impl CapillaryPressureTrait for CapillaryVanGenuchten {
    fn pressure(&self, sat: f64) -> f64 {
        if sat <= self.sat_lr {
            return self.pc_max;
        }
        if sat >= self.sat_ls {
            return 0.0;
        }
        let seff = (sat - self.sat_lr) / (self.sat_ls - self.sat_lr);
        let (pc, _, _) = self.power_law(seff);
        // also handles m = 0 where pc → ∞
        if pc < self.pc_max {
            pc
        } else {
            self.pc_max
        }
    }

    fn d_pressure(&self, sat: f64) -> f64 {
        let seff = match normalized_saturation(sat, self.sat_lr, self.sat_ls) {
            Some(s) => s,
            None => return 0.0,
        };
        let (pc, a, x) = self.power_law(seff);
        if !(pc < self.pc_max) || x <= 0.0 {
            return 0.0; // clamped or seff rounded to one
        }
        let dx_ds = -a / (self.m * seff);
        let dpc_ds = self.p0 * (1.0 - self.m) * f64::powf(x, -self.m) * dx_ds;
        dpc_ds / (self.sat_ls - self.sat_lr)
    }

    fn d2_pressure(&self, sat: f64) -> f64 {
        let seff = match normalized_saturation(sat, self.sat_lr, self.sat_ls) {
            Some(s) => s,
            None => return 0.0,
        };
        let (pc, a, x) = self.power_law(seff);
        if !(pc < self.pc_max) || x <= 0.0 {
            return 0.0;
        }
        let dx_ds = -a / (self.m * seff);
        let d2x_ds2 = a * (1.0 + self.m) / (self.m * self.m * seff * seff);
        let d2pc_ds2 = self.p0
            * (1.0 - self.m)
            * (-self.m * f64::powf(x, -self.m - 1.0) * dx_ds * dx_ds + f64::powf(x, -self.m) * d2x_ds2);
        let den = self.sat_ls - self.sat_lr;
        d2pc_ds2 / (den * den)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
