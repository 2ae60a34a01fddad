//! Quadric coefficient matrices and conjugation
//!
//! A quadric is a second-degree implicit surface written as a symmetric
//! 4x4 matrix `Q` over homogeneous coordinates: a point `p = (x, y, z, 1)`
//! lies on the surface when `p' Q p = 0` and inside the half-space when
//! `p' Q p <= 0`.
//!
//! Moving a quadric into world space is a change of basis. A world point
//! `p'` corresponds to the object-space point `inverse(M) * p'`, so
//! substituting into `p' Q p` gives the world-space coefficient matrix
//! `transpose(inverse(M)) * Q * inverse(M)`. Every surface the pipeline
//! emits is produced by exactly this conjugation.

use quadmarch_math::{inverse, mat4, Mat4, Vec4};

use crate::error::ShapeError;

/// A symmetric 4x4 quadric coefficient matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadricForm(pub Mat4);

impl QuadricForm {
    /// Canonical sphere of radius `r` about the origin: `x^2 + y^2 + z^2 - r^2`
    pub fn sphere(r: f64) -> Self {
        let mut q = [0.0; 16];
        q[0] = 1.0;
        q[5] = 1.0;
        q[10] = 1.0;
        q[15] = -r * r;
        QuadricForm(q)
    }

    /// Canonical infinite cylinder of radius `r` about the Z axis:
    /// `x^2 + y^2 - r^2` (no `z^2` coefficient)
    pub fn lateral_cylinder(r: f64) -> Self {
        let mut q = [0.0; 16];
        q[0] = 1.0;
        q[5] = 1.0;
        q[15] = -r * r;
        QuadricForm(q)
    }

    /// Half-space `a*x + b*y + c*z + d <= 0` as a degenerate quadric.
    ///
    /// The linear coefficients are split across the symmetric off-diagonal
    /// slots so that `p' Q p` reproduces the plane equation exactly.
    pub fn half_space(a: f64, b: f64, c: f64, d: f64) -> Self {
        let mut q = [0.0; 16];
        // column 3 holds half the linear terms, mirrored in row 3
        q[12] = a / 2.0;
        q[13] = b / 2.0;
        q[14] = c / 2.0;
        q[3] = a / 2.0;
        q[7] = b / 2.0;
        q[11] = c / 2.0;
        q[15] = d;
        QuadricForm(q)
    }

    /// Evaluate `p' Q p` at a homogeneous point
    pub fn evaluate(&self, p: Vec4) -> f64 {
        p.dot(mat4::transform(self.0, p))
    }

    /// Re-express this quadric under the affine placement `m`:
    /// `transpose(inverse(m)) * Q * inverse(m)`.
    ///
    /// Fails with the inversion error when `m` is singular; no coefficient
    /// matrix is produced in that case.
    pub fn conjugate(&self, m: Mat4) -> Result<Self, ShapeError> {
        let inv = inverse(m)?;
        Ok(self.conjugate_by_inverse(inv))
    }

    /// Conjugation with the inverse already in hand.
    ///
    /// Lets a caller invert a shared placement once and transform several
    /// canonical surfaces with it.
    pub fn conjugate_by_inverse(&self, inv: Mat4) -> Self {
        QuadricForm(mat4::multiply(
            mat4::transpose(inv),
            mat4::multiply(self.0, inv),
        ))
    }
}
