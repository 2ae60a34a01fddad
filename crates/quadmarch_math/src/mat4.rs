//! Flat 4x4 matrix constructors and composition
//!
//! Matrices are stored as a flat 16-element array. Element (i, j) of the
//! mathematical matrix lives at index `4*j + i`, so
//! `row(m, i) = [m[i], m[i+4], m[i+8], m[i+12]]` and
//! `col(m, j) = [m[4j], m[4j+1], m[4j+2], m[4j+3]]`.
//!
//! Points are column vectors: `transform(m, p)` computes `m * p`, and
//! `multiply(a, b)` applies `b` first, then `a`. Every transform built by
//! [`translate`], [`rotate_x`]/[`rotate_y`]/[`rotate_z`], [`scale`] and
//! [`identity`] keeps the last row at `[0, 0, 0, 1]`; [`perspective`] is
//! the one constructor that deliberately does not.

use crate::Vec4;

/// Flat 4x4 matrix
pub type Mat4 = [f64; 16];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// The multiplicative identity; leaves every point unchanged
#[inline]
pub fn identity() -> Mat4 {
    IDENTITY
}

/// Pure translation by (x, y, z)
pub fn translate(x: f64, y: f64, z: f64) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        x, y, z, 1.0,
    ]
}

/// Rotation by `theta` radians about the X axis.
///
/// Maps (0, 1, 0) to (0, cos θ, sin θ).
pub fn rotate_x(theta: f64) -> Mat4 {
    let (s, c) = theta.sin_cos();
    [
        1.0, 0.0, 0.0, 0.0,
        0.0, c, s, 0.0,
        0.0, -s, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation by `theta` radians about the Y axis.
///
/// Maps (0, 0, 1) to (-sin θ, 0, cos θ). Note: the sign layout is the
/// transpose of `rotate_x`/`rotate_z`. The shading stage depends on this
/// chirality, so it is kept as is rather than normalized.
pub fn rotate_y(theta: f64) -> Mat4 {
    let (s, c) = theta.sin_cos();
    [
        c, 0.0, s, 0.0,
        0.0, 1.0, 0.0, 0.0,
        -s, 0.0, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation by `theta` radians about the Z axis.
///
/// Maps (1, 0, 0) to (cos θ, sin θ, 0).
pub fn rotate_z(theta: f64) -> Mat4 {
    let (s, c) = theta.sin_cos();
    [
        c, s, 0.0, 0.0,
        -s, c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Diagonal scale along the X, Y, Z axes.
///
/// A zero factor is legal input and yields a degenerate matrix; inversion
/// of such a matrix fails with a singular-transform error.
pub fn scale(x: f64, y: f64, z: f64) -> Mat4 {
    [
        x, 0.0, 0.0, 0.0,
        0.0, y, 0.0, 0.0,
        0.0, 0.0, z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Projective constructor embedding (x, y, z, w) into the last row.
///
/// Not used by the shape pipeline; provided for completeness.
pub fn perspective(x: f64, y: f64, z: f64, w: f64) -> Mat4 {
    [
        1.0, 0.0, 0.0, x,
        0.0, 1.0, 0.0, y,
        0.0, 0.0, 1.0, z,
        0.0, 0.0, 0.0, w,
    ]
}

/// Row i of the matrix as a vector
#[inline]
pub fn row(m: Mat4, i: usize) -> Vec4 {
    Vec4::new(m[i], m[i + 4], m[i + 8], m[i + 12])
}

/// Column j of the matrix as a vector
#[inline]
pub fn col(m: Mat4, j: usize) -> Vec4 {
    Vec4::new(m[4 * j], m[4 * j + 1], m[4 * j + 2], m[4 * j + 3])
}

/// Matrix product `a * b`: element (i, j) is `row(a, i) . col(b, j)`.
///
/// Applied to a point, the result applies `b` first, then `a`.
/// Associative, not commutative.
pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    let mut out = [0.0; 16];
    for j in 0..4 {
        for i in 0..4 {
            out[4 * j + i] = row(a, i).dot(col(b, j));
        }
    }
    out
}

/// Transpose: swaps element (i, j) with (j, i)
pub fn transpose(m: Mat4) -> Mat4 {
    let mut out = [0.0; 16];
    for j in 0..4 {
        for i in 0..4 {
            out[4 * j + i] = m[4 * i + j];
        }
    }
    out
}

/// Apply the matrix to a homogeneous column vector: `m * v`
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        row(m, 0).dot(v),
        row(m, 1).dot(v),
        row(m, 2).dot(v),
        row(m, 3).dot(v),
    )
}

/// The translation column of an affine transform
#[inline]
pub fn translation(m: Mat4) -> Vec4 {
    col(m, 3)
}

/// Narrow to f32 for GPU upload as a flat uniform array
pub fn to_f32(m: Mat4) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for (dst, src) in out.iter_mut().zip(m.iter()) {
        *dst = *src as f32;
    }
    out
}
