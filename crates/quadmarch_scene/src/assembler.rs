//! Shape assembly: placement + kind -> world-space surfaces
//!
//! `build_shape` is the single entry point the world calls per shape per
//! frame. It folds the kind's time-driven animation into the placement,
//! inverts the result once, and conjugates every canonical surface with
//! that shared inverse.

use quadmarch_math::{inverse, mat4, Mat4};

use crate::error::ShapeError;
use crate::primitive::PrimitiveKind;
use crate::shape::{Shape, Surfaces};

/// Per-shape assembly parameters
#[derive(Clone, Copy, Debug)]
pub struct ShapeParams {
    /// Canonical (object-space) radius of the solid
    pub radius: f64,
    /// Amplitude of the sphere's oscillating squash; 0 disables it
    pub amplitude: f64,
    /// Phase offset of the squash waveform, in seconds
    pub phase: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            amplitude: 0.0,
            phase: 0.0,
        }
    }
}

/// Sphere squash factor: a pure function of time
fn squash(time: f64, params: &ShapeParams) -> f64 {
    1.0 + params.amplitude * (time + params.phase).sin()
}

/// Assemble one shape for one frame.
///
/// For spheres, an oscillating non-uniform scale along Y is composed into
/// the placement before conjugation; the other kinds use the placement as
/// given (callers compose their own time-varying rotations into it).
///
/// Fails with [`ShapeError::Singular`] when the effective placement cannot
/// be inverted, e.g. a zero scale factor. No partial shape is produced.
pub fn build_shape(
    kind: PrimitiveKind,
    placement: Mat4,
    time: f64,
    params: &ShapeParams,
) -> Result<Shape, ShapeError> {
    let placement = match kind {
        PrimitiveKind::Sphere => mat4::multiply(
            placement,
            mat4::scale(1.0, squash(time, params), 1.0),
        ),
        _ => placement,
    };

    let inv = inverse(placement)?;

    let mut surfaces = Surfaces::new();
    for q in &kind.canonical_surfaces(params.radius) {
        surfaces.push(q.conjugate_by_inverse(inv));
    }

    Ok(Shape {
        kind,
        placement,
        inverse_placement: inv,
        surfaces,
    })
}
