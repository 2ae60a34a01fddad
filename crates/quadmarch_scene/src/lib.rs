//! Quadric surface construction for the quadmarch renderer
//!
//! A solid is the intersection of up to eight quadric half-spaces, each a
//! symmetric 4x4 coefficient matrix in homogeneous coordinates. This crate
//! selects the canonical surfaces for a primitive, folds any per-kind
//! animation into its placement, and conjugates every surface into world
//! space, producing a transient per-frame [`Shape`] value.
//!
//! ## Core Types
//!
//! - [`QuadricForm`] - Symmetric coefficient matrix, `p' Q p <= 0` inside
//! - [`PrimitiveKind`] - Sphere, Cube, Cylinder, Octahedron
//! - [`Shape`] - Placement, inverse placement, and world-space surfaces
//! - [`World`] - The demo scene: four animated shapes rebuilt each frame
//! - [`RendererSink`] - Seam to the (external) rendering stage
//!
//! Everything here is pure and synchronous; each frame's shapes are
//! recomputed from scratch so there is no stale-transform state to manage.

mod error;
mod quadric;
mod primitive;
mod shape;
mod assembler;
mod frame;
mod sink;
mod world;

pub use error::ShapeError;
pub use quadric::QuadricForm;
pub use primitive::PrimitiveKind;
pub use shape::{Shape, Surfaces, MAX_SURFACES};
pub use assembler::{build_shape, ShapeParams};
pub use frame::{default_lights, default_materials, FrameParameters, Light, Material};
pub use sink::{FrameSubmission, RendererSink, ShapeUniform};
pub use world::{World, WorldParams};
