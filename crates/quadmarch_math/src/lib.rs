//! Homogeneous 4x4 transform algebra
//!
//! This crate provides the matrix layer of the quadmarch renderer core:
//! elementary affine constructors, composition, and adjugate-method
//! inversion over a flat 16-element storage format.
//!
//! ## Core Types
//!
//! - [`Vec4`] - Homogeneous point/direction with x, y, z, w components
//! - [`Mat4`] - Flat 4x4 matrix, see [`mat4`] for the storage convention
//! - [`MathError`] - Domain errors (singular transforms)
//!
//! All operations are pure functions: no shared state, no I/O, and every
//! composition produces a fresh value.

mod vec4;
mod error;
pub mod mat4;
pub mod invert;

pub use vec4::Vec4;
pub use error::MathError;
pub use mat4::Mat4;
pub use invert::{determinant, inverse};
