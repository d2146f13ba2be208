use super::{normalized_saturation, valid_saturation_limit, CapillaryPressureTrait};
use crate::StrError;

/// Implements the Brooks-Corey model for the capillary pressure
///
/// ```text
/// pc = min(pe seff^(-1/λ), pc_max)
/// ```
///
/// The curve is clamped outside (sat_lr, sat_ls): `pc = pc_max` if `S ≤ sat_lr` and `pc = min(pe, pc_max)`
/// if `S ≥ sat_ls`. The derivatives are zero outside (sat_lr, sat_ls) and where `pc` is clamped.
///
/// # Reference
///
/// * Brooks RH and Corey AT (1964) Hydraulic properties of porous media.
///   Hydrology Papers 3, Colorado State University, Fort Collins
pub struct CapillaryBrooksCorey {
    sat_lr: f64, // liquid residual saturation
    sat_ls: f64, // liquid fully saturated saturation
    lambda: f64, // pore-size distribution index
    pe: f64,     // air-entry pressure
    pc_max: f64, // maximum capillary pressure
}

impl CapillaryBrooksCorey {
    /// Allocates a new instance
    pub fn new(sat_lr: f64, sat_ls: f64, lambda: f64, pe: f64, pc_max: f64) -> Result<Self, StrError> {
        if !valid_saturation_limit(sat_lr) {
            return Err("sat_lr parameter for the Brooks-Corey capillary pressure model must be in [0, 1]");
        }
        if !valid_saturation_limit(sat_ls) {
            return Err("sat_ls parameter for the Brooks-Corey capillary pressure model must be in [0, 1]");
        }
        if !(lambda > 0.0) {
            return Err("lambda parameter for the Brooks-Corey capillary pressure model must be > 0");
        }
        if !(pe >= 0.0) {
            return Err("pe parameter for the Brooks-Corey capillary pressure model must be ≥ 0");
        }
        if !(pc_max >= 0.0) {
            return Err("pc_max parameter for the Brooks-Corey capillary pressure model must be ≥ 0");
        }
        Ok(CapillaryBrooksCorey {
            sat_lr,
            sat_ls,
            lambda,
            pe,
            pc_max,
        })
    }
}

impl CapillaryPressureTrait for CapillaryBrooksCorey {
    fn pressure(&self, sat: f64) -> f64 {
        if sat <= self.sat_lr {
            return self.pc_max;
        }
        let pc = match normalized_saturation(sat, self.sat_lr, self.sat_ls) {
            Some(seff) => self.pe * f64::powf(seff, -1.0 / self.lambda),
            None => self.pe,
        };
        f64::min(pc, self.pc_max)
    }

    fn d_pressure(&self, sat: f64) -> f64 {
        let seff = match normalized_saturation(sat, self.sat_lr, self.sat_ls) {
            Some(s) => s,
            None => return 0.0,
        };
        let a = f64::powf(seff, -1.0 / self.lambda);
        if self.pe * a >= self.pc_max {
            return 0.0;
        }
        -self.pe * a / (self.lambda * seff * (self.sat_ls - self.sat_lr))
    }

    fn d2_pressure(&self, sat: f64) -> f64 {
        let seff = match normalized_saturation(sat, self.sat_lr, self.sat_ls) {
            Some(s) => s,
            None => return 0.0,
        };
        let a = f64::powf(seff, -1.0 / self.lambda);
        if self.pe * a >= self.pc_max {
            return 0.0;
        }
        let den = seff * (self.sat_ls - self.sat_lr);
        self.pe * a * (1.0 + self.lambda) / (self.lambda * self.lambda * den * den)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::CapillaryBrooksCorey;
    use crate::material::CapillaryPressureTrait;
    use russell_lab::{approx_eq, deriv1_central5};

    fn sample() -> CapillaryBrooksCorey {
        CapillaryBrooksCorey::new(0.1, 0.9, 2.0, 1.0, 10.0).unwrap()
    }

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            CapillaryBrooksCorey::new(-0.1, 0.9, 2.0, 1.0, 10.0).err(),
            Some("sat_lr parameter for the Brooks-Corey capillary pressure model must be in [0, 1]")
        );
        assert_eq!(
            CapillaryBrooksCorey::new(0.1, 1.9, 2.0, 1.0, 10.0).err(),
            Some("sat_ls parameter for the Brooks-Corey capillary pressure model must be in [0, 1]")
        );
        assert_eq!(
            CapillaryBrooksCorey::new(0.1, 0.9, -2.0, 1.0, 10.0).err(),
            Some("lambda parameter for the Brooks-Corey capillary pressure model must be > 0")
        );
        assert_eq!(
            CapillaryBrooksCorey::new(0.1, 0.9, 2.0, -1.0, 10.0).err(),
            Some("pe parameter for the Brooks-Corey capillary pressure model must be ≥ 0")
        );
        assert_eq!(
            CapillaryBrooksCorey::new(0.1, 0.9, 2.0, 1.0, -10.0).err(),
            Some("pc_max parameter for the Brooks-Corey capillary pressure model must be ≥ 0")
        );
    }

    #[test]
    fn pressure_and_clamping_work() {
        let model = sample();
        approx_eq(model.pressure(0.5), f64::sqrt(2.0), 1e-15);
        for sat in [0.0, 0.1] {
            assert_eq!(model.pressure(sat), 10.0);
            assert_eq!(model.d_pressure(sat), 0.0);
            assert_eq!(model.d2_pressure(sat), 0.0);
        }
        for sat in [0.9, 1.0] {
            assert_eq!(model.pressure(sat), 1.0);
            assert_eq!(model.d_pressure(sat), 0.0);
            assert_eq!(model.d2_pressure(sat), 0.0);
        }
        // seff = 0.005 gives pe seff^(-1/2) ≈ 14.1 > pc_max
        assert_eq!(model.pressure(0.104), 10.0);
        assert_eq!(model.d_pressure(0.104), 0.0);
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let model = sample();
        struct Args {}
        let mut args = Args {};
        for sat in [0.3, 0.4, 0.5, 0.6, 0.7, 0.8] {
            let num = deriv1_central5(sat, &mut args, |s, _| Ok(model.pressure(s))).unwrap();
            approx_eq(model.d_pressure(sat), num, 1e-6);
            let num = deriv1_central5(sat, &mut args, |s, _| Ok(model.d_pressure(s))).unwrap();
            approx_eq(model.d2_pressure(sat), num, 1e-6);
        }
    }
}
