//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`QM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use quadmarch_scene::{default_lights, default_materials, Light, Material, World, WorldParams};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Directional light table
    #[serde(default = "default_lights")]
    pub lights: Vec<Light>,
    /// Material table, one entry per shape slot
    #[serde(default = "default_materials")]
    pub materials: Vec<Material>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            lights: default_lights(),
            materials: default_materials(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`QM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration, falling back to defaults when loading fails
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // QM_SCENE__RADIUS=0.5 -> scene.radius = 0.5
        figment = figment.merge(Env::prefixed("QM_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Build the demo world from this configuration
    pub fn world(&self) -> World {
        World::new(WorldParams {
            radius: self.scene.radius,
            amplitude: self.scene.amplitude,
            phase: self.scene.phase,
            lights: self.lights.clone(),
            materials: self.materials.clone(),
        })
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Canonical (object-space) radius of the solids
    pub radius: f64,
    /// Amplitude of the breathing/squash animations
    pub amplitude: f64,
    /// Phase offset of the animation waveforms, in seconds
    pub phase: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            amplitude: 0.3,
            phase: 0.0,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
