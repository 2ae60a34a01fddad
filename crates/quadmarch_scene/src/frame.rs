//! Per-frame inputs and the light/material tables
//!
//! These types sit on the inbound boundary: the host render loop supplies
//! a [`FrameParameters`] every frame, and the light/material tables are
//! loaded once by the configuration layer. The core treats all of them as
//! plain data.

use serde::{Serialize, Deserialize};

/// Inputs the host layer supplies each frame.
///
/// `time_ms` is monotonic milliseconds since the world became active;
/// reset rules belong to the host, not to this core.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameParameters {
    /// Elapsed time in milliseconds since the world's epoch
    pub time_ms: f64,
    /// Cursor position in normalized device coordinates (x, y, button)
    pub cursor: [f64; 3],
    /// Camera position in world space
    pub camera: [f64; 3],
}

impl FrameParameters {
    /// Create frame parameters at a given elapsed time
    pub fn at_time_ms(time_ms: f64) -> Self {
        Self {
            time_ms,
            ..Self::default()
        }
    }

    /// Elapsed time in seconds, the unit the animation waveforms use
    #[inline]
    pub fn time_seconds(&self) -> f64 {
        self.time_ms / 1000.0
    }
}

/// A directional light
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Direction toward the light
    pub direction: [f32; 3],
    /// RGB color/intensity
    pub color: [f32; 3],
}

/// Surface material parameters consumed by the shading stage
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Ambient RGB response
    pub ambient: [f32; 3],
    /// Diffuse RGB response
    pub diffuse: [f32; 3],
    /// Specular RGB response
    pub specular: [f32; 3],
    /// Specular exponent
    pub power: f32,
    /// Reflection RGB weight
    pub reflect: [f32; 3],
    /// Transparency RGB weight
    pub transparent: [f32; 3],
    /// Index of refraction
    pub index_of_refraction: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: [0.8, 0.6, 0.8],
            diffuse: [0.1, 0.8, 0.8],
            specular: [0.2, 0.2, 0.8],
            power: 15.0,
            reflect: [0.8, 0.7, 0.6],
            transparent: [0.6, 0.6, 0.6],
            index_of_refraction: 1.2,
        }
    }
}

/// The default two-light rig
pub fn default_lights() -> Vec<Light> {
    vec![
        Light {
            direction: [0.5, 0.5, 0.6],
            color: [0.3, 0.3, 0.3],
        },
        Light {
            direction: [-0.5, -0.5, 0.7],
            color: [0.2, 0.2, 0.2],
        },
    ]
}

/// The default four-entry material table; the last entry is nearly opaque
pub fn default_materials() -> Vec<Material> {
    let mut materials = vec![Material::default(); 4];
    materials[3].transparent = [0.1, 0.1, 0.1];
    materials
}
