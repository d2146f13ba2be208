use super::{ElementIntegration, StressHistory};
use crate::base::{t2_row_dot, ParamStressDivergence};
use crate::StrError;
use russell_lab::{Matrix, Vector};
use russell_tensor::Tensor4;

/// Computes the contraction of the elasticity (tangent) tensor with the test and trial gradients
///
/// ```text
/// J = Σ_j Σ_l C_ijkl ∇ψ_j ∇φ_l
/// ```
///
/// Only the first `min(3, len)` components of the gradients are used.
pub fn elastic_jacobian(dd: &Tensor4, i: usize, k: usize, grad_test: &[f64], grad_phi: &[f64]) -> f64 {
    let nj = usize::min(3, grad_test.len());
    let nl = usize::min(3, grad_phi.len());
    let mut sum = 0.0;
    for j in 0..nj {
        for l in 0..nl {
            sum += dd.get(i, j, k, l) * grad_test[j] * grad_phi[l];
        }
    }
    sum
}

/// Implements the stress divergence term with stiffness-proportional Rayleigh damping and HHT time integration
///
/// The residual of `ζ K [(1+α) v - α v_old] + α K (u - u_old) + K u` is written in terms of the
/// stress history (current, old, and older) as follows (for Δt > 0):
///
/// ```text
/// R = σ_c·∇ψ [1 + α + (1+α) ζ/Δt] - σold_c·∇ψ [α + (1+2α) ζ/Δt] + σolder_c·∇ψ [α ζ/Δt]
/// J = (C ⁝ ∇ψ ⊗ ∇φ)_cc [1 + α + ζ/Δt]
/// ```
///
/// where `σ_c` is the row of the stress tensor corresponding to the displacement component `c`.
/// The residual and the Jacobians are zero if Δt ≤ 0.
pub struct DynamicStressDivergence {
    zeta: f64,                      // Rayleigh damping coefficient
    alpha: f64,                     // HHT parameter
    component: usize,               // displacement component c
    disp_vars: Vec<usize>,          // variable numbers of the displacement components
    temperature_var: Option<usize>, // variable number of the coupled temperature
    stress_name: String,            // name of the stress property
}

impl DynamicStressDivergence {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `param` -- damping and HHT parameters
    /// * `component` -- the displacement component c (0, 1, or 2) of this kernel
    /// * `disp_vars` -- the variable numbers of all displacement components
    /// * `temperature_var` -- the variable number of the coupled temperature, if any
    pub fn new(
        param: &ParamStressDivergence,
        component: usize,
        disp_vars: &[usize],
        temperature_var: Option<usize>,
    ) -> Result<Self, StrError> {
        if disp_vars.len() < 1 || disp_vars.len() > 3 {
            return Err("number of displacement variables must be 1, 2, or 3");
        }
        if component >= disp_vars.len() {
            return Err("component must be smaller than the number of displacement variables");
        }
        if let Some(t) = temperature_var {
            if disp_vars.contains(&t) {
                return Err("temperature variable cannot be a displacement variable");
            }
        }
        if !param.zeta.is_finite() || !param.alpha.is_finite() {
            return Err("zeta and alpha must be finite numbers");
        }
        Ok(DynamicStressDivergence {
            zeta: param.zeta,
            alpha: param.alpha,
            component,
            disp_vars: disp_vars.to_vec(),
            temperature_var,
            stress_name: param.stress_name(),
        })
    }

    /// Returns the name of the stress property read by this kernel
    pub fn stress_name(&self) -> &str {
        &self.stress_name
    }

    /// Calculates the residual at an integration point
    ///
    /// # Panics
    ///
    /// A panic occurs if `p` is out of range for any of the `stress` snapshots.
    /// Use [DynamicStressDivergence::calc_residual] to have the lengths checked.
    pub fn qp_residual(&self, stress: &StressHistory, p: usize, grad_test: &[f64], dt: f64) -> f64 {
        if !(dt > 0.0) {
            return 0.0;
        }
        let (a, z) = (self.alpha, self.zeta / dt);
        let c = self.component;
        t2_row_dot(&stress.current[p], c, grad_test) * (1.0 + a + (1.0 + a) * z)
            - (a + (1.0 + 2.0 * a) * z) * t2_row_dot(&stress.old[p], c, grad_test)
            + (a * z) * t2_row_dot(&stress.older[p], c, grad_test)
    }

    /// Calculates the diagonal Jacobian at an integration point
    pub fn qp_jacobian(&self, dd: &Tensor4, grad_test: &[f64], grad_phi: &[f64], dt: f64) -> f64 {
        if !(dt > 0.0) {
            return 0.0;
        }
        let c = self.component;
        elastic_jacobian(dd, c, c, grad_test, grad_phi) * self.jacobian_factor(dt)
    }

    /// Calculates the off-diagonal Jacobian with respect to a coupled variable at an integration point
    ///
    /// The result is zero for the temperature variable (independently of Δt) and for any
    /// variable that is not a displacement variable.
    pub fn qp_off_diag_jacobian(&self, jvar: usize, dd: &Tensor4, grad_test: &[f64], grad_phi: &[f64], dt: f64) -> f64 {
        if self.temperature_var == Some(jvar) {
            return 0.0;
        }
        let k = match self.disp_vars.iter().position(|v| *v == jvar) {
            Some(k) => k,
            None => return 0.0,
        };
        if !(dt > 0.0) {
            return 0.0;
        }
        elastic_jacobian(dd, self.component, k, grad_test, grad_phi) * self.jacobian_factor(dt)
    }

    /// Calculates the element residual vector
    ///
    /// ```text
    /// Rᵐ = Σ_p R(∇ψᵐ) JxW coord
    /// ```
    pub fn calc_residual(
        &self,
        residual: &mut Vector,
        integ: &ElementIntegration,
        stress: &StressHistory,
        dt: f64,
    ) -> Result<(), StrError> {
        let n_point = integ.points.len();
        if stress.current.len() != n_point || stress.old.len() != n_point || stress.older.len() != n_point {
            return Err("stress history must have the same length as the number of integration points");
        }
        let n_node = residual.dim();
        residual.fill(0.0);
        for (p, point) in integ.points.iter().enumerate() {
            if point.grad_shape.len() != n_node {
                return Err("residual vector must have the same dimension as the number of nodes");
            }
            let w = point.jxw * point.coord;
            for m in 0..n_node {
                residual[m] += self.qp_residual(stress, p, &point.grad_shape[m], dt) * w;
            }
        }
        Ok(())
    }

    /// Calculates the element (diagonal) Jacobian matrix
    ///
    /// ```text
    /// Kᵐⁿ = Σ_p J(∇ψᵐ, ∇φⁿ) JxW coord
    /// ```
    pub fn calc_jacobian(
        &self,
        jacobian: &mut Matrix,
        integ: &ElementIntegration,
        moduli: &[Tensor4],
        dt: f64,
    ) -> Result<(), StrError> {
        self.integrate_jacobian(jacobian, integ, moduli, |dd, gt, gp| self.qp_jacobian(dd, gt, gp, dt))
    }

    /// Calculates the element off-diagonal Jacobian matrix with respect to a coupled variable
    pub fn calc_off_diag_jacobian(
        &self,
        jacobian: &mut Matrix,
        jvar: usize,
        integ: &ElementIntegration,
        moduli: &[Tensor4],
        dt: f64,
    ) -> Result<(), StrError> {
        self.integrate_jacobian(jacobian, integ, moduli, |dd, gt, gp| {
            self.qp_off_diag_jacobian(jvar, dd, gt, gp, dt)
        })
    }

    /// Returns the factor multiplying the elastic contraction in the Jacobians
    fn jacobian_factor(&self, dt: f64) -> f64 {
        1.0 + self.alpha + self.zeta / dt
    }

    /// Integrates a Jacobian term over all pairs of test and trial functions
    fn integrate_jacobian<F>(
        &self,
        jacobian: &mut Matrix,
        integ: &ElementIntegration,
        moduli: &[Tensor4],
        mut qp_jacobian: F,
    ) -> Result<(), StrError>
    where
        F: FnMut(&Tensor4, &[f64], &[f64]) -> f64,
    {
        if moduli.len() != integ.points.len() {
            return Err("moduli must have the same length as the number of integration points");
        }
        let (nrow, ncol) = jacobian.dims();
        if nrow != ncol {
            return Err("Jacobian matrix must be square");
        }
        jacobian.fill(0.0);
        for (point, dd) in integ.points.iter().zip(moduli) {
            if point.grad_shape.len() != nrow {
                return Err("Jacobian matrix must have the same dimension as the number of nodes");
            }
            let w = point.jxw * point.coord;
            for m in 0..nrow {
                for n in 0..ncol {
                    let value = jacobian.get(m, n) + qp_jacobian(dd, &point.grad_shape[m], &point.grad_shape[n]) * w;
                    jacobian.set(m, n, value);
                }
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
