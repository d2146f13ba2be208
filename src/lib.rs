//! Pmkernels - material and element kernels for porous media and finite-strain mechanics
//!
//! The kernels are evaluated per quadrature point by an external finite element assembly
//! driver. This crate implements:
//!
//! * capillary pressure curves with analytic first and second derivatives (van Genuchten, Brooks-Corey)
//! * a two-phase porepressure-saturation material built on a capillary pressure curve
//! * the Rashid (1993) incremental deformation gradient in 1D spherical symmetry with volumetric locking correction
//! * the residual and Jacobian of the stress divergence with Rayleigh damping and HHT time integration

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod fem;
pub mod material;
pub mod prelude;
