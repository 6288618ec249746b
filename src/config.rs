//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CLIFFORD_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::f64::consts::FRAC_PI_4;
use std::path::Path;

use clifford_core::{AnimationOptions, RotationParameters, ViewState};
use clifford_input::DEFAULT_DRAG_SENSITIVITY;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Rotation speeds and point count at startup
    #[serde(default)]
    pub parameters: RotationParameters,
    /// View rotation and drag configuration
    #[serde(default)]
    pub view: ViewConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CLIFFORD_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // CLIFFORD_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("CLIFFORD_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Mount options derived from the view and debug sections
    pub fn animation_options(&self) -> AnimationOptions {
        let mut options = AnimationOptions::default()
            .with_initial_view(self.view.initial_view())
            .with_drag_sensitivity(self.view.drag_sensitivity);
        options.seed = self.debug.seed;
        options
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Clifford Torus Projection".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// View configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Pitch at startup in radians
    pub initial_pitch: f64,
    /// Yaw at startup in radians
    pub initial_yaw: f64,
    /// Radians of view rotation per pixel of drag
    pub drag_sensitivity: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_pitch: FRAC_PI_4,
            initial_yaw: FRAC_PI_4,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
        }
    }
}

impl ViewConfig {
    /// Starting view, with pitch clamped
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.initial_pitch, self.initial_yaw)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Markers the GPU buffer is sized for at startup
    pub max_markers: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            max_markers: 10_000,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Fixed seed for point generation
    pub seed: Option<u64>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed: None,
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
