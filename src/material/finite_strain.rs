use crate::base::{t2_add_identity, t2_dot, t2_inverse, t2_new, t2_scale, t2_to_general, t2_transpose, t2_update};
use crate::StrError;
use russell_tensor::Tensor2;

/// Holds the strain measures at an integration point
#[derive(Clone, Debug)]
pub struct StrainState {
    /// Total strain ε
    pub total_strain: Tensor2,

    /// Mechanical strain (total strain minus eigenstrains)
    pub mechanical_strain: Tensor2,
}

/// Holds the results of a finite strain update at an integration point
#[derive(Clone, Debug)]
pub struct StrainUpdate {
    /// Strain increment Δε
    pub strain_increment: Tensor2,

    /// Strain rate Δε/Δt (zero if Δt ≤ 0)
    pub strain_rate: Tensor2,

    /// Updated strain measures
    pub strain: StrainState,
}

impl StrainState {
    /// Allocates a new instance with zero strains
    pub fn new() -> Self {
        StrainState {
            total_strain: t2_new(),
            mechanical_strain: t2_new(),
        }
    }
}

/// Calculates the strain increment from the incremental deformation gradient
///
/// Uses the Taylor expansion of the logarithmic strain proposed by Rashid (1993):
///
/// ```text
/// Â = I - F̂⁻¹
/// Ĉ⁻¹ - I = Â Âᵀ - Â - Âᵀ
/// Δε = -½ (Ĉ⁻¹ - I) + ¼ (Ĉ⁻¹ - I)²
/// ```
///
/// # Reference
///
/// * Rashid MM (1993) Incremental kinematics for finite element applications.
///   International Journal for Numerical Methods in Engineering, 36(23), 3937-3956
pub fn calc_strain_increment(fhat: &Tensor2) -> Result<Tensor2, StrError> {
    let fhat_inv = t2_inverse(fhat)?;
    let mut aa = t2_new();
    t2_add_identity(&mut aa, 1.0);
    t2_update(&mut aa, -1.0, &fhat_inv)?;
    let aa_t = t2_transpose(&aa)?;
    let mut cinv_i = t2_dot(&aa, &aa_t)?;
    t2_update(&mut cinv_i, -1.0, &aa)?;
    t2_update(&mut cinv_i, -1.0, &aa_t)?;
    let mut delta_strain = t2_dot(&cinv_i, &cinv_i)?;
    t2_scale(&mut delta_strain, 0.25);
    t2_update(&mut delta_strain, -0.5, &cinv_i)?;
    Ok(delta_strain)
}

/// Updates the strain measures given the incremental deformation gradient
///
/// The increment is assumed irrotational (e.g., diagonal F̂ in spherical symmetry);
/// thus no rotation is applied to the updated strains.
///
/// ```text
/// ε_mech = ε_mech_old + Δε
/// ε_total = ε_total_old + Δε
/// ```
///
/// The old strains may use any [russell_tensor::Mandel] representation; the updated strains
/// are returned in the general representation.
pub fn update_strain(strain_old: &StrainState, fhat: &Tensor2, dt: f64) -> Result<StrainUpdate, StrError> {
    let strain_increment = calc_strain_increment(fhat)?;
    let mut strain_rate = t2_new();
    if dt > 0.0 {
        t2_update(&mut strain_rate, 1.0 / dt, &strain_increment)?;
    }
    let mut strain = StrainState {
        total_strain: t2_to_general(&strain_old.total_strain)?,
        mechanical_strain: t2_to_general(&strain_old.mechanical_strain)?,
    };
    t2_update(&mut strain.mechanical_strain, 1.0, &strain_increment)?;
    t2_update(&mut strain.total_strain, 1.0, &strain_increment)?;
    Ok(StrainUpdate {
        strain_increment,
        strain_rate,
        strain,
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
