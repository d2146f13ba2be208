use crate::base::CoordSystem;
use crate::StrError;

/// Holds the data of an integration (quadrature) point as provided by the assembly driver
#[derive(Clone, Debug)]
pub struct IntegPoint {
    /// Integration weight times the Jacobian determinant (JxW)
    pub jxw: f64,

    /// Coordinate-system factor (1, 2πr, or 4πr²)
    pub coord: f64,

    /// Physical coordinates of the point; x[0] is the radius in axisymmetric and spherical problems
    pub x: [f64; 3],

    /// Shape functions Nᵐ evaluated at the point
    pub shape: Vec<f64>,

    /// Gradients of the shape functions Bᵐ = dNᵐ/dx evaluated at the point
    pub grad_shape: Vec<[f64; 3]>,
}

/// Holds the integration data of an element
#[derive(Clone, Debug)]
pub struct ElementIntegration {
    /// Coordinate system of the element
    pub coord_system: CoordSystem,

    /// Element volume: Σ JxW · coord
    pub volume: f64,

    /// Integration points
    pub points: Vec<IntegPoint>,
}

/// Holds the radial displacement and its gradient at an integration point (current and old)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RadialDisplacement {
    /// Radial displacement u
    pub value: f64,

    /// Radial gradient du/dr
    pub gradient: f64,

    /// Radial displacement at the previous converged step
    pub value_old: f64,

    /// Radial gradient at the previous converged step
    pub gradient_old: f64,
}

impl ElementIntegration {
    /// Allocates a new instance and computes the element volume
    pub fn new(coord_system: CoordSystem, points: Vec<IntegPoint>) -> Self {
        let volume = points.iter().fold(0.0, |acc, p| acc + p.jxw * p.coord);
        ElementIntegration {
            coord_system,
            volume,
            points,
        }
    }

    /// Allocates the integration data of a 2-node line element along the radial direction
    ///
    /// Uses the 2-point Gauss-Legendre rule. The shape functions are:
    ///
    /// ```text
    /// N⁰ = (1 - ξ) / 2    N¹ = (1 + ξ) / 2    r = N⁰ ra + N¹ rb
    /// ```
    pub fn new_radial_lin2(coord_system: CoordSystem, ra: f64, rb: f64) -> Result<Self, StrError> {
        if !(rb > ra) {
            return Err("the second node radius must be greater than the first node radius");
        }
        let length = rb - ra;
        let det_jac = length / 2.0;
        let xi = 1.0 / f64::sqrt(3.0);
        let points = [-xi, xi]
            .iter()
            .map(|ksi| {
                let shape = vec![(1.0 - ksi) / 2.0, (1.0 + ksi) / 2.0];
                let r = shape[0] * ra + shape[1] * rb;
                IntegPoint {
                    jxw: 1.0 * det_jac,
                    coord: coord_system.coord_factor(r),
                    x: [r, 0.0, 0.0],
                    shape,
                    grad_shape: vec![[-1.0 / length, 0.0, 0.0], [1.0 / length, 0.0, 0.0]],
                }
            })
            .collect();
        Ok(ElementIntegration::new(coord_system, points))
    }

    /// Interpolates nodal values at an integration point
    ///
    /// Returns `(value, gradient)` with `value = Σ Nᵐ uᵐ` and `gradient = Σ Bᵐ uᵐ`
    pub fn interpolate(&self, p: usize, nodal: &[f64]) -> Result<(f64, [f64; 3]), StrError> {
        let point = self.points.get(p).ok_or("index of integration point is out of bounds")?;
        if nodal.len() != point.shape.len() {
            return Err("number of nodal values must equal the number of nodes");
        }
        let mut value = 0.0;
        let mut gradient = [0.0; 3];
        for m in 0..nodal.len() {
            value += point.shape[m] * nodal[m];
            for j in 0..3 {
                gradient[j] += point.grad_shape[m][j] * nodal[m];
            }
        }
        Ok((value, gradient))
    }

    /// Computes the radial displacements at all integration points given current and old nodal values
    pub fn radial_displacements(&self, uu: &[f64], uu_old: &[f64]) -> Result<Vec<RadialDisplacement>, StrError> {
        let mut res = Vec::with_capacity(self.points.len());
        for p in 0..self.points.len() {
            let (value, gradient) = self.interpolate(p, uu)?;
            let (value_old, gradient_old) = self.interpolate(p, uu_old)?;
            res.push(RadialDisplacement {
                value,
                gradient: gradient[0],
                value_old,
                gradient_old: gradient_old[0],
            });
        }
        Ok(res)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
