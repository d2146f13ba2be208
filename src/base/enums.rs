use serde::{Deserialize, Serialize};

/// Defines the coordinate system of the element (as set by the assembly driver)
///
/// The coordinate system determines the factor multiplying the integration weights:
///
/// ```text
/// Cartesian:    coord = 1
/// Axisymmetric: coord = 2 π r
/// Spherical:    coord = 4 π r²
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum CoordSystem {
    /// Cartesian (x, y, z) coordinates
    Cartesian,

    /// Axisymmetric (r, z) coordinates
    Axisymmetric,

    /// 1D spherically-symmetric (r) coordinates
    Spherical,
}

impl CoordSystem {
    /// Returns the factor multiplying the integration weights at radius r
    pub fn coord_factor(&self, r: f64) -> f64 {
        match self {
            CoordSystem::Cartesian => 1.0,
            CoordSystem::Axisymmetric => 2.0 * std::f64::consts::PI * r,
            CoordSystem::Spherical => 4.0 * std::f64::consts::PI * r * r,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
