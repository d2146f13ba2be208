use super::ModelCapillaryPressure;
use crate::base::{ParamCapillaryPressure, PhaseRegistry};
use crate::StrError;

/// Index of the phase-0 porepressure among the primary variables
pub const VAR_PP0: usize = 0;

/// Index of the phase-1 saturation among the primary variables
pub const VAR_S1: usize = 1;

/// Holds the porepressures and saturations of both phases at an integration point
///
/// The primary variables are the phase-0 porepressure (pp0, index [VAR_PP0]) and
/// the phase-1 saturation (s1, index [VAR_S1]). Phase 0 is the liquid (wetting) phase.
#[derive(Clone, Debug, Default)]
pub struct TwoPhaseState {
    /// Porepressure of each phase
    pub porepressure: [f64; 2],

    /// Saturation of each phase
    pub saturation: [f64; 2],

    /// Gradient of the porepressure of each phase
    pub grad_porepressure: [[f64; 3]; 2],

    /// Gradient of the saturation of each phase
    pub grad_saturation: [[f64; 3]; 2],

    /// Derivatives of the porepressures w.r.t the primary variables: `∂p[phase]/∂u[var]`
    pub dporepressure_dvar: [[f64; 2]; 2],

    /// Derivatives of the saturations w.r.t the primary variables: `∂S[phase]/∂u[var]`
    pub dsaturation_dvar: [[f64; 2]; 2],

    /// Derivatives of the porepressure gradients w.r.t the gradients of the primary variables: `∂∇p[phase]/∂∇u[var]`
    pub dgrad_porepressure_dgradvar: [[f64; 2]; 2],

    /// Derivatives of the porepressure gradients w.r.t the primary variables: `∂∇p[phase]/∂u[var]`
    pub dgrad_porepressure_dvar: [[[f64; 3]; 2]; 2],
}

/// Implements the two-phase material with porepressure-saturation primary variables
///
/// ```text
/// S₀ = 1 - s1      S₁ = s1
/// p₀ = pp0         p₁ = pp0 + pc(S₀)
/// ```
///
/// where `pc` is the capillary pressure as a function of the liquid saturation.
pub struct TwoPhasePS {
    model: ModelCapillaryPressure,
}

impl TwoPhasePS {
    /// Allocates a new instance
    ///
    /// # Panics
    ///
    /// A panic will occur if the registry does not declare exactly two fluid phases.
    /// This is a fatal configuration error aborting the simulation setup.
    pub fn new(registry: &dyn PhaseRegistry, param: &ParamCapillaryPressure) -> Result<Self, StrError> {
        let n_phase = registry.num_phases();
        if n_phase != 2 {
            panic!(
                "the number of fluid phases is {} whereas the two-phase PS material can only be used for 2-phase simulations",
                n_phase
            );
        }
        Ok(TwoPhasePS {
            model: ModelCapillaryPressure::new(param)?,
        })
    }

    /// Calculates the capillary pressure pc(S)
    pub fn capillary_pressure(&self, sat: f64) -> f64 {
        self.model.actual.pressure(sat)
    }

    /// Calculates dpc/dS
    pub fn d_capillary_pressure_ds(&self, sat: f64) -> f64 {
        self.model.actual.d_pressure(sat)
    }

    /// Calculates d²pc/dS²
    pub fn d2_capillary_pressure_ds2(&self, sat: f64) -> f64 {
        self.model.actual.d2_pressure(sat)
    }

    /// Calculates the porepressures, saturations, and derivatives
    ///
    /// # Input
    ///
    /// * `pp0` -- porepressure of phase 0 (primary variable)
    /// * `s1` -- saturation of phase 1 (primary variable)
    /// * `grad_pp0` -- gradient of pp0
    /// * `grad_s1` -- gradient of s1
    pub fn calc_state(&self, state: &mut TwoPhaseState, pp0: f64, s1: f64, grad_pp0: &[f64; 3], grad_s1: &[f64; 3]) {
        let sl = 1.0 - s1;
        let pc = self.capillary_pressure(sl);
        let dpc = self.d_capillary_pressure_ds(sl);
        let d2pc = self.d2_capillary_pressure_ds2(sl);

        state.saturation = [sl, s1];
        state.porepressure = [pp0, pp0 + pc];

        // dpc/ds1 = -dpc/dS₀
        state.dporepressure_dvar = [[1.0, 0.0], [1.0, -dpc]];
        state.dsaturation_dvar = [[0.0, -1.0], [0.0, 1.0]];
        state.dgrad_porepressure_dgradvar = [[1.0, 0.0], [1.0, -dpc]];

        for i in 0..3 {
            state.grad_saturation[0][i] = -grad_s1[i];
            state.grad_saturation[1][i] = grad_s1[i];
            state.grad_porepressure[0][i] = grad_pp0[i];
            state.grad_porepressure[1][i] = grad_pp0[i] - dpc * grad_s1[i];
            state.dgrad_porepressure_dvar[0][VAR_PP0][i] = 0.0;
            state.dgrad_porepressure_dvar[0][VAR_S1][i] = 0.0;
            state.dgrad_porepressure_dvar[1][VAR_PP0][i] = 0.0;
            state.dgrad_porepressure_dvar[1][VAR_S1][i] = d2pc * grad_s1[i];
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{TwoPhasePS, TwoPhaseState, VAR_PP0, VAR_S1};
    use crate::base::{FluidPhases, ParamCapillaryPressure, PhaseRegistry, SampleParams};
    use crate::material::CapillaryVanGenuchten;
    use crate::material::CapillaryPressureTrait;
    use russell_lab::{approx_eq, deriv1_central5};
    use std::cell::Cell;

    struct CountingRegistry {
        n_phase: usize,
        n_call: Cell<usize>,
    }

    impl PhaseRegistry for CountingRegistry {
        fn num_phases(&self) -> usize {
            self.n_call.set(self.n_call.get() + 1);
            self.n_phase
        }
        fn num_components(&self) -> usize {
            1
        }
    }

    #[test]
    #[should_panic(expected = "the number of fluid phases is 3 whereas")]
    fn new_panics_on_wrong_number_of_phases() {
        let phases = FluidPhases::new(3, 1);
        TwoPhasePS::new(&phases, &SampleParams::param_van_genuchten()).unwrap();
    }

    #[test]
    #[should_panic(expected = "the number of fluid phases is 1 whereas")]
    fn new_checks_phases_before_parameters() {
        let phases = FluidPhases::new(1, 1);
        let wrong = ParamCapillaryPressure::VanGenuchten {
            sat_lr: 0.1,
            sat_ls: 0.9,
            m: 2.0,
            pc_max: 10.0,
            p0: 1.0,
        };
        let _ = TwoPhasePS::new(&phases, &wrong);
    }

    #[test]
    fn new_captures_errors() {
        let phases = FluidPhases::new(2, 2);
        let wrong = ParamCapillaryPressure::VanGenuchten {
            sat_lr: 0.1,
            sat_ls: 0.9,
            m: 2.0,
            pc_max: 10.0,
            p0: 1.0,
        };
        assert_eq!(
            TwoPhasePS::new(&phases, &wrong).err(),
            Some("m parameter for the van Genuchten capillary pressure model must be in [0, 1]")
        );
    }

    #[test]
    fn new_queries_the_registry_once() {
        let registry = CountingRegistry {
            n_phase: 2,
            n_call: Cell::new(0),
        };
        TwoPhasePS::new(&registry, &SampleParams::param_van_genuchten()).unwrap();
        assert_eq!(registry.n_call.get(), 1);
    }

    #[test]
    fn pass_through_works() {
        let phases = FluidPhases::new(2, 2);
        let material = TwoPhasePS::new(&phases, &SampleParams::param_van_genuchten()).unwrap();
        let curve = CapillaryVanGenuchten::new(0.1, 0.9, 0.5, 10.0, 1.0).unwrap();
        for sat in [0.0, 0.1, 0.2, 0.5, 0.8, 0.9, 1.0] {
            assert_eq!(material.capillary_pressure(sat), curve.pressure(sat));
            assert_eq!(material.d_capillary_pressure_ds(sat), curve.d_pressure(sat));
            assert_eq!(material.d2_capillary_pressure_ds2(sat), curve.d2_pressure(sat));
        }
        approx_eq(material.capillary_pressure(0.5), f64::sqrt(3.0), 1e-15);
    }

    #[test]
    fn calc_state_works() {
        let phases = FluidPhases::new(2, 2);
        let material = TwoPhasePS::new(&phases, &SampleParams::param_van_genuchten()).unwrap();
        let mut state = TwoPhaseState::default();
        let grad_pp0 = [1.0, 2.0, 3.0];
        let grad_s1 = [0.1, -0.2, 0.3];
        material.calc_state(&mut state, 100.0, 0.5, &grad_pp0, &grad_s1);

        // S₀ = 0.5 → pc = √3
        let dpc = material.d_capillary_pressure_ds(0.5);
        let d2pc = material.d2_capillary_pressure_ds2(0.5);
        approx_eq(state.saturation[0], 0.5, 1e-15);
        approx_eq(state.saturation[1], 0.5, 1e-15);
        approx_eq(state.porepressure[0], 100.0, 1e-15);
        approx_eq(state.porepressure[1], 100.0 + f64::sqrt(3.0), 1e-13);
        assert_eq!(state.dporepressure_dvar[0], [1.0, 0.0]);
        assert_eq!(state.dporepressure_dvar[1], [1.0, -dpc]);
        assert_eq!(state.dsaturation_dvar[0], [0.0, -1.0]);
        assert_eq!(state.dsaturation_dvar[1], [0.0, 1.0]);
        assert_eq!(state.dgrad_porepressure_dgradvar[1], [1.0, -dpc]);
        for i in 0..3 {
            approx_eq(state.grad_porepressure[0][i], grad_pp0[i], 1e-15);
            approx_eq(state.grad_porepressure[1][i], grad_pp0[i] - dpc * grad_s1[i], 1e-14);
            approx_eq(state.grad_saturation[0][i], -grad_s1[i], 1e-15);
            approx_eq(state.grad_saturation[1][i], grad_s1[i], 1e-15);
            approx_eq(state.dgrad_porepressure_dvar[1][VAR_S1][i], d2pc * grad_s1[i], 1e-14);
            assert_eq!(state.dgrad_porepressure_dvar[1][VAR_PP0][i], 0.0);
            assert_eq!(state.dgrad_porepressure_dvar[0][VAR_S1][i], 0.0);
        }
    }

    #[test]
    fn calc_state_derivatives_match_finite_differences() {
        let phases = FluidPhases::new(2, 2);
        let material = TwoPhasePS::new(&phases, &SampleParams::param_van_genuchten()).unwrap();
        let grad_pp0 = [1.0, 2.0, 3.0];
        let grad_s1 = [0.1, -0.2, 0.3];
        struct Args {
            state: TwoPhaseState,
        }
        let mut args = Args {
            state: TwoPhaseState::default(),
        };
        let mut state = TwoPhaseState::default();
        for s1 in [0.3, 0.5, 0.6] {
            material.calc_state(&mut state, 50.0, s1, &grad_pp0, &grad_s1);

            // ∂p₁/∂s1
            let num = deriv1_central5(s1, &mut args, |x, a| {
                material.calc_state(&mut a.state, 50.0, x, &grad_pp0, &grad_s1);
                Ok(a.state.porepressure[1])
            })
            .unwrap();
            approx_eq(state.dporepressure_dvar[1][VAR_S1], num, 1e-6);

            // ∂∇p₁/∂s1
            for i in 0..3 {
                let num = deriv1_central5(s1, &mut args, |x, a| {
                    material.calc_state(&mut a.state, 50.0, x, &grad_pp0, &grad_s1);
                    Ok(a.state.grad_porepressure[1][i])
                })
                .unwrap();
                approx_eq(state.dgrad_porepressure_dvar[1][VAR_S1][i], num, 1e-6);
            }

            // ∂p₁/∂pp0
            let num = deriv1_central5(50.0, &mut args, |x, a| {
                material.calc_state(&mut a.state, x, s1, &grad_pp0, &grad_s1);
                Ok(a.state.porepressure[1])
            })
            .unwrap();
            approx_eq(state.dporepressure_dvar[1][VAR_PP0], num, 1e-9);
        }
    }
}
