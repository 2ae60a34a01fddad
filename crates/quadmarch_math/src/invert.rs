//! Matrix inversion via the adjugate method
//!
//! Each of the 16 cofactors is computed from a closed-form 3x3
//! sub-determinant using cyclic index arithmetic modulo 4; the determinant
//! is the cofactor sum along the first column, and the inverse is the
//! cofactor matrix divided by the determinant.
//!
//! This is branch-free and numerically adequate for the well-conditioned
//! translate/rotate/scale matrices the shape pipeline produces. It is NOT
//! a general-purpose solver: accuracy degrades for near-singular input,
//! which is why anything with `|det|` below [`DET_TOLERANCE`] is rejected
//! outright instead of being allowed to produce garbage.

use crate::error::MathError;
use crate::mat4::Mat4;

/// Determinants with absolute value below this are treated as singular
pub const DET_TOLERANCE: f64 = 1e-9;

fn cofactor(src: &Mat4, c: usize, r: usize) -> f64 {
    let s = |i: usize, j: usize| src[((c + i) & 3) | (((r + j) & 3) << 2)];
    let sign = if (c + r) & 1 == 1 { -1.0 } else { 1.0 };
    sign * ((s(1, 1) * (s(2, 2) * s(3, 3) - s(3, 2) * s(2, 3)))
        - (s(2, 1) * (s(1, 2) * s(3, 3) - s(3, 2) * s(1, 3)))
        + (s(3, 1) * (s(1, 2) * s(2, 3) - s(2, 2) * s(1, 3))))
}

/// Determinant, computed as the cofactor expansion along the first column
pub fn determinant(m: Mat4) -> f64 {
    (0..4).map(|n| m[n] * cofactor(&m, n, 0)).sum::<f64>()
}

/// Invert a matrix.
///
/// Fails with [`MathError::SingularTransform`] when the determinant falls
/// below [`DET_TOLERANCE`] in magnitude (e.g. any zero scale factor).
/// For every invertible `m`, `multiply(m, inverse(m)?)` equals the
/// identity within floating-point tolerance.
pub fn inverse(src: Mat4) -> Result<Mat4, MathError> {
    let mut dst = [0.0; 16];
    for (n, slot) in dst.iter_mut().enumerate() {
        *slot = cofactor(&src, n >> 2, n & 3);
    }

    let mut det = 0.0;
    for n in 0..4 {
        det += src[n] * dst[n << 2];
    }
    if det.abs() < DET_TOLERANCE {
        return Err(MathError::SingularTransform { det });
    }

    for slot in dst.iter_mut() {
        *slot /= det;
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat4::{identity, multiply, rotate_x, rotate_y, rotate_z, scale, translate, Mat4};

    fn mat_approx_eq(a: Mat4, b: Mat4, tol: f64) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < tol)
    }

    struct Lcg(u64);

    impl Lcg {
        fn next_f64(&mut self) -> f64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (self.0 >> 11) as f64 / (1u64 << 53) as f64
        }

        fn in_range(&mut self, lo: f64, hi: f64) -> f64 {
            lo + (hi - lo) * self.next_f64()
        }
    }

    fn random_transform(rng: &mut Lcg) -> Mat4 {
        let t = translate(
            rng.in_range(-10.0, 10.0),
            rng.in_range(-10.0, 10.0),
            rng.in_range(-10.0, 10.0),
        );
        let r = multiply(
            rotate_x(rng.in_range(0.0, std::f64::consts::TAU)),
            multiply(
                rotate_y(rng.in_range(0.0, std::f64::consts::TAU)),
                rotate_z(rng.in_range(0.0, std::f64::consts::TAU)),
            ),
        );
        let s = scale(
            rng.in_range(0.1, 10.0),
            rng.in_range(0.1, 10.0),
            rng.in_range(0.1, 10.0),
        );
        multiply(t, multiply(r, s))
    }

    #[test]
    fn test_inverse_of_translate() {
        let inv = inverse(translate(1.0, 2.0, 3.0)).unwrap();
        assert!(mat_approx_eq(inv, translate(-1.0, -2.0, -3.0), 1e-12));
    }

    #[test]
    fn test_inverse_of_rotation_is_transpose_mapping() {
        let theta = 0.9;
        let inv = inverse(rotate_z(theta)).unwrap();
        assert!(mat_approx_eq(inv, rotate_z(-theta), 1e-12));
    }

    #[test]
    fn test_inverse_round_trip_randomized() {
        let mut rng = Lcg(0x5eed);
        for _ in 0..100 {
            let m = random_transform(&mut rng);
            let inv = inverse(m).unwrap();
            assert!(
                mat_approx_eq(multiply(m, inv), identity(), 1e-5),
                "m * inverse(m) deviates from identity"
            );
            assert!(
                mat_approx_eq(multiply(inv, m), identity(), 1e-5),
                "inverse(m) * m deviates from identity"
            );
        }
    }

    #[test]
    fn test_zero_scale_is_singular() {
        match inverse(scale(0.0, 1.0, 1.0)) {
            Err(MathError::SingularTransform { det }) => assert_eq!(det, 0.0),
            other => panic!("expected SingularTransform, got {:?}", other),
        }
    }

    #[test]
    fn test_determinant_of_scale() {
        let d = determinant(scale(2.0, 3.0, 4.0));
        assert!((d - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_of_rotation_is_one() {
        let d = determinant(rotate_y(1.3));
        assert!((d - 1.0).abs() < 1e-12);
    }
}
