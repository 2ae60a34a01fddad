//! The renderer seam
//!
//! The core never talks to a graphics API. It hands a completed
//! [`FrameSubmission`] to whatever implements [`RendererSink`]; a GPU
//! backend would flatten each shape through [`ShapeUniform`] and upload,
//! a test sink just records what it saw.

use bytemuck::{Pod, Zeroable};

use quadmarch_math::mat4;

use crate::frame::{Light, Material};
use crate::shape::{Shape, MAX_SURFACES};

/// Everything the rendering stage needs for one frame
#[derive(Clone, Debug)]
pub struct FrameSubmission {
    /// Frame time in seconds
    pub time_s: f64,
    /// Cursor position in normalized device coordinates
    pub cursor: [f64; 3],
    /// Camera position in world space
    pub camera: [f64; 3],
    /// The frame's shapes, rebuilt from scratch
    pub shapes: Vec<Shape>,
    /// Directional lights
    pub lights: Vec<Light>,
    /// Material table, indexed per shape slot
    pub materials: Vec<Material>,
}

/// Consumer of per-frame shape data.
///
/// Implementations own all host concerns (uniform locations, buffers,
/// draw calls); the core only ever calls `submit`.
pub trait RendererSink {
    /// Accept one frame's worth of shapes and tables
    fn submit(&mut self, frame: &FrameSubmission);
}

/// GPU-ready flattening of a [`Shape`]: flat f32 matrices, one slot per
/// possible surface, explicit surface count.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ShapeUniform {
    /// Shader-side primitive tag
    pub kind: i32,
    /// Number of valid entries in `surfaces`
    pub surface_count: u32,
    /// Keeps the matrices 16-byte aligned in the uniform block
    pub _pad: [u32; 2],
    /// Object-to-world matrix
    pub matrix: [f32; 16],
    /// World-to-object matrix
    pub imatrix: [f32; 16],
    /// World-space quadric coefficient matrices
    pub surfaces: [[f32; 16]; MAX_SURFACES],
}

impl From<&Shape> for ShapeUniform {
    fn from(shape: &Shape) -> Self {
        let mut surfaces = [[0.0f32; 16]; MAX_SURFACES];
        for (slot, q) in surfaces.iter_mut().zip(shape.surfaces.iter()) {
            *slot = mat4::to_f32(q.0);
        }
        Self {
            kind: shape.kind.tag(),
            surface_count: shape.surface_count() as u32,
            _pad: [0; 2],
            matrix: mat4::to_f32(shape.placement),
            imatrix: mat4::to_f32(shape.inverse_placement),
            surfaces,
        }
    }
}
