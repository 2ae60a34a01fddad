//! quadmarch - quadric-surface construction core for an implicit-surface
//! raymarcher
//!
//! The pipeline: pick a primitive's canonical quadrics, build its
//! time-varying placement from elementary transforms, invert the placement
//! by the adjugate method, conjugate each quadric into world space, and
//! hand the resulting shapes to a renderer sink. Rendering itself (ray
//! intersection, shading) lives behind [`quadmarch_scene::RendererSink`]
//! and is not part of this crate.

pub mod config;

pub use quadmarch_math as math;
pub use quadmarch_scene as scene;

pub use config::{AppConfig, ConfigError, SceneConfig};
