use crate::StrError;
use russell_lab::{mat_inverse, vec_scale, Matrix};
use russell_tensor::{Mandel, Tensor2};

/// Defines the smallest determinant magnitude accepted by the tensor inversion
pub const MIN_DETERMINANT: f64 = 1e-14;

/// Allocates a new (zero) general second-order tensor
pub fn t2_new() -> Tensor2 {
    Tensor2::new(Mandel::General)
}

/// Allocates a new general second-order tensor from its diagonal components
pub fn t2_diagonal(d0: f64, d1: f64, d2: f64) -> Tensor2 {
    let mut tt = Tensor2::new(Mandel::General);
    let v = tt.vector_mut();
    v[0] = d0;
    v[1] = d1;
    v[2] = d2;
    tt
}

/// Adds a multiple of the identity tensor
///
/// ```text
/// T += α I
/// ```
///
/// The first three Mandel components are the diagonal components for all representations.
pub fn t2_add_identity(tt: &mut Tensor2, alpha: f64) {
    let v = tt.vector_mut();
    v[0] += alpha;
    v[1] += alpha;
    v[2] += alpha;
}

/// Scales a second-order tensor
///
/// ```text
/// T *= α
/// ```
pub fn t2_scale(tt: &mut Tensor2, alpha: f64) {
    vec_scale(tt.vector_mut(), alpha);
}

/// Updates a second-order tensor with another scaled tensor
///
/// ```text
/// A += α B
/// ```
///
/// Returns an error if the tensors have different [Mandel] representations.
pub fn t2_update(aa: &mut Tensor2, alpha: f64, bb: &Tensor2) -> Result<(), StrError> {
    if aa.mandel() != bb.mandel() {
        return Err("tensors must have the same Mandel representation");
    }
    let a = aa.vector_mut();
    let b = bb.vector();
    for i in 0..a.dim() {
        a[i] += alpha * b[i];
    }
    Ok(())
}

/// Returns a copy of a second-order tensor in the general (non-symmetric) representation
pub fn t2_to_general(aa: &Tensor2) -> Result<Tensor2, StrError> {
    let mut m = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            m[i][j] = aa.get(i, j);
        }
    }
    Tensor2::from_matrix(&m, Mandel::General)
}

/// Computes the single dot product between two second-order tensors
///
/// ```text
/// C = A · B
/// ```
pub fn t2_dot(aa: &Tensor2, bb: &Tensor2) -> Result<Tensor2, StrError> {
    let mut cc = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                cc[i][j] += aa.get(i, k) * bb.get(k, j);
            }
        }
    }
    Tensor2::from_matrix(&cc, Mandel::General)
}

/// Returns the transpose of a second-order tensor as a general tensor
pub fn t2_transpose(aa: &Tensor2) -> Result<Tensor2, StrError> {
    let mut tt = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            tt[i][j] = aa.get(j, i);
        }
    }
    Tensor2::from_matrix(&tt, Mandel::General)
}

/// Computes the inverse of a second-order tensor
///
/// Returns an error if the determinant is smaller than [MIN_DETERMINANT] in magnitude.
pub fn t2_inverse(aa: &Tensor2) -> Result<Tensor2, StrError> {
    let mut a = Matrix::new(3, 3);
    aa.to_matrix(&mut a);
    let mut ai = Matrix::new(3, 3);
    let det = mat_inverse(&mut ai, &a)?;
    if f64::abs(det) < MIN_DETERMINANT {
        return Err("cannot invert tensor because the determinant is too small");
    }
    let mut res = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            res[i][j] = ai.get(i, j);
        }
    }
    Tensor2::from_matrix(&res, Mandel::General)
}

/// Computes the dot product between the i-th row of a tensor and a vector
///
/// ```text
/// s = Σ_j T_ij v_j
/// ```
///
/// Only the first `min(3, v.len())` components of `v` are used.
pub fn t2_row_dot(tt: &Tensor2, i: usize, v: &[f64]) -> f64 {
    let n = usize::min(3, v.len());
    let mut s = 0.0;
    for j in 0..n {
        s += tt.get(i, j) * v[j];
    }
    s
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use russell_lab::approx_eq;

    fn sample_tensor() -> Tensor2 {
        Tensor2::from_matrix(
            &[
                [2.0, 1.0, 0.0], //
                [0.5, 3.0, 0.2], //
                [0.0, 0.1, 4.0], //
            ],
            Mandel::General,
        )
        .unwrap()
    }

    #[test]
    fn add_identity_and_scale_work() {
        let mut tt = t2_new();
        t2_add_identity(&mut tt, 1.0);
        for i in 0..3 {
            for j in 0..3 {
                let correct = if i == j { 1.0 } else { 0.0 };
                approx_eq(tt.get(i, j), correct, 1e-15);
            }
        }
        t2_scale(&mut tt, 3.0);
        approx_eq(tt.determinant(), 27.0, 1e-13);

        let dd = t2_diagonal(1.0, 2.0, 3.0);
        approx_eq(dd.get(1, 1), 2.0, 1e-15);
        approx_eq(dd.get(0, 1), 0.0, 1e-15);
        approx_eq(dd.determinant(), 6.0, 1e-14);
    }

    #[test]
    fn update_works() {
        let aa = sample_tensor();
        let mut bb = t2_new();
        t2_update(&mut bb, 2.0, &aa).unwrap();
        t2_update(&mut bb, -1.0, &aa).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                approx_eq(bb.get(i, j), aa.get(i, j), 1e-15);
            }
        }
    }

    #[test]
    fn update_captures_mixed_representations() {
        let aa = sample_tensor();
        let mut sym = Tensor2::new(Mandel::Symmetric);
        assert_eq!(
            t2_update(&mut sym, 1.0, &aa).err(),
            Some("tensors must have the same Mandel representation")
        );
    }

    #[test]
    fn to_general_works() {
        let mut sym = Tensor2::new(Mandel::Symmetric2D);
        sym.vector_mut()[0] = 1.0;
        sym.vector_mut()[1] = 2.0;
        let gen = t2_to_general(&sym).unwrap();
        assert_eq!(gen.mandel(), Mandel::General);
        approx_eq(gen.get(0, 0), 1.0, 1e-15);
        approx_eq(gen.get(1, 1), 2.0, 1e-15);
        approx_eq(gen.get(2, 2), 0.0, 1e-15);
        approx_eq(gen.get(0, 1), 0.0, 1e-15);
    }

    #[test]
    fn dot_transpose_and_inverse_work() {
        let aa = sample_tensor();
        let ai = t2_inverse(&aa).unwrap();
        let ii = t2_dot(&aa, &ai).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let correct = if i == j { 1.0 } else { 0.0 };
                approx_eq(ii.get(i, j), correct, 1e-14);
            }
        }
        let at = t2_transpose(&aa).unwrap();
        approx_eq(at.get(0, 1), 0.5, 1e-15);
        approx_eq(at.get(1, 0), 1.0, 1e-15);
        approx_eq(at.determinant(), aa.determinant(), 1e-13);
    }

    #[test]
    fn inverse_captures_singular_tensor() {
        let zero = t2_new();
        assert!(t2_inverse(&zero).is_err());
    }

    #[test]
    fn row_dot_works() {
        let aa = sample_tensor();
        approx_eq(t2_row_dot(&aa, 0, &[1.0, 2.0, 3.0]), 4.0, 1e-15);
        approx_eq(t2_row_dot(&aa, 1, &[1.0, 2.0, 3.0]), 7.1, 1e-14);
        approx_eq(t2_row_dot(&aa, 2, &[1.0]), 0.0, 1e-15);
    }
}
