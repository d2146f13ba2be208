use super::{ElementIntegration, RadialDisplacement};
use crate::base::{t2_add_identity, t2_diagonal, t2_dot, t2_inverse, t2_new, t2_scale, t2_update, Config, CoordSystem};
use crate::material::{update_strain, StrainState};
use crate::StrError;
use russell_tensor::Tensor2;

/// Holds the kinematic results at an integration point
#[derive(Clone, Debug)]
pub struct FiniteStrainPoint {
    /// Deformation gradient F (with volumetric locking correction)
    pub deformation_gradient: Tensor2,

    /// Incremental deformation gradient F̂ (with volumetric locking correction)
    pub fhat: Tensor2,

    /// Strain increment Δε
    pub strain_increment: Tensor2,

    /// Strain rate Δε/Δt
    pub strain_rate: Tensor2,

    /// Updated total strain
    pub total_strain: Tensor2,

    /// Updated mechanical strain
    pub mechanical_strain: Tensor2,
}

/// Holds the kinematic results of an element
#[derive(Clone, Debug)]
pub struct FiniteStrainElement {
    /// Results at each integration point
    pub points: Vec<FiniteStrainPoint>,

    /// Volume average of the incremental deformation gradient
    pub ave_fhat: Tensor2,

    /// Volume average of the determinant of the deformation gradient
    pub ave_det_deformation_gradient: f64,
}

/// Implements the incremental finite strain kinematics for 1D spherically-symmetric problems
///
/// The only unknown is the radial displacement u(r). The deformation gradients are diagonal:
///
/// ```text
///     ┌                  ┐
///     │ 1+du/dr          │
/// F = │       1+u/r      │
///     │             1+u/r│
///     └                  ┘
/// ```
///
/// The incremental deformation gradient F̂ = I + (∇u - ∇u_old) · (I + ∇u_old)⁻¹ is corrected
/// for volumetric locking by scaling it so that its determinant equals the determinant of the
/// element-averaged F̂. The deformation gradient is corrected likewise with the element-averaged det F.
///
/// # Reference
///
/// * Rashid MM (1993) Incremental kinematics for finite element applications.
///   International Journal for Numerical Methods in Engineering, 36(23), 3937-3956
pub struct SphericalFiniteStrain {
    verbose: bool,
}

impl SphericalFiniteStrain {
    /// Allocates a new instance
    ///
    /// # Panics
    ///
    /// A panic will occur if the coordinate system is not spherical.
    pub fn new(config: &Config) -> Self {
        if config.coord_system != CoordSystem::Spherical {
            panic!(
                "the coordinate system must be Spherical for 1D spherically-symmetric simulations (found {:?})",
                config.coord_system
            );
        }
        SphericalFiniteStrain {
            verbose: config.verbose,
        }
    }

    /// Calculates the deformation gradients and strains at all integration points of an element
    ///
    /// # Input
    ///
    /// * `integ` -- integration data of the element
    /// * `disp` -- radial displacements (current and old) at each integration point
    /// * `strain_old` -- strains at the previous converged step at each integration point
    /// * `dt` -- time increment
    pub fn calc_element(
        &self,
        integ: &ElementIntegration,
        disp: &[RadialDisplacement],
        strain_old: &[StrainState],
        dt: f64,
    ) -> Result<FiniteStrainElement, StrError> {
        let n_point = integ.points.len();
        if disp.len() != n_point || strain_old.len() != n_point {
            return Err("arrays of displacements and strains must have the same length as the number of integration points");
        }
        if integ.coord_system != CoordSystem::Spherical {
            return Err("element integration data must use the spherical coordinate system");
        }
        if !(integ.volume > 0.0) {
            return Err("element volume must be positive");
        }

        // first pass: deformation gradients and element averages
        let mut ffs = Vec::with_capacity(n_point);
        let mut fhats = Vec::with_capacity(n_point);
        let mut ave_fhat = t2_new();
        let mut ave_det_ff = 0.0;
        for (point, d) in integ.points.iter().zip(disp) {
            // the hoop components are left unstretched only at the center (r = 0)
            let r = point.x[0];
            let (mut hoop, mut hoop_old) = (0.0, 0.0);
            if r != 0.0 {
                hoop = d.value / r;
                hoop_old = d.value_old / r;
            }
            let mut aa = t2_diagonal(d.gradient, hoop, hoop);
            let mut fbar = t2_diagonal(d.gradient_old, hoop_old, hoop_old);

            // F = I + ∇u
            let mut ff = aa.clone();
            t2_add_identity(&mut ff, 1.0);

            // F̂ = I + (∇u - ∇u_old) · (I + ∇u_old)⁻¹
            t2_update(&mut aa, -1.0, &fbar)?;
            t2_add_identity(&mut fbar, 1.0);
            let fbar_inv = t2_inverse(&fbar).map_err(|_| "cannot invert the old deformation gradient")?;
            let mut fhat = t2_dot(&aa, &fbar_inv)?;
            t2_add_identity(&mut fhat, 1.0);

            let w = point.jxw * point.coord;
            t2_update(&mut ave_fhat, w, &fhat)?;
            ave_det_ff += ff.determinant() * w;
            ffs.push(ff);
            fhats.push(fhat);
        }
        t2_scale(&mut ave_fhat, 1.0 / integ.volume);
        ave_det_ff /= integ.volume;
        let det_ave_fhat = ave_fhat.determinant();
        if !(det_ave_fhat > 0.0) {
            return Err("determinant of the average incremental deformation gradient must be positive");
        }
        if !(ave_det_ff > 0.0) {
            return Err("average determinant of the deformation gradient must be positive");
        }
        if self.verbose {
            println!(
                "spherical finite strain: det(ave F̂) = {:?}, ave(det F) = {:?}",
                det_ave_fhat, ave_det_ff
            );
        }

        // second pass: volumetric locking correction and strains
        let mut points = Vec::with_capacity(n_point);
        for ((mut ff, mut fhat), old) in ffs.into_iter().zip(fhats).zip(strain_old) {
            let det_fhat = fhat.determinant();
            if !(det_fhat > 0.0) {
                return Err("determinant of the incremental deformation gradient must be positive");
            }
            t2_scale(&mut fhat, f64::cbrt(det_ave_fhat / det_fhat));
            let update = update_strain(old, &fhat, dt)?;
            let det_ff = ff.determinant();
            if !(det_ff > 0.0) {
                return Err("determinant of the deformation gradient must be positive");
            }
            t2_scale(&mut ff, f64::cbrt(ave_det_ff / det_ff));
            points.push(FiniteStrainPoint {
                deformation_gradient: ff,
                fhat,
                strain_increment: update.strain_increment,
                strain_rate: update.strain_rate,
                total_strain: update.strain.total_strain,
                mechanical_strain: update.strain.mechanical_strain,
            });
        }
        Ok(FiniteStrainElement {
            points,
            ave_fhat,
            ave_det_deformation_gradient: ave_det_ff,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
