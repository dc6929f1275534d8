//! User settings for payloadqr.
//!
//! Render defaults and the output directory are stored in
//! `~/.payloadqr/config.toml`. A missing file means built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::qr::{parse_color, parse_ec_level, QrConfig, QrFormat};

/// Errors that can occur when loading or saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("Invalid setting {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// `[render]` section: how payloads are drawn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// `png`, `svg` or `ascii`
    pub format: String,
    /// Minimum image width/height in pixels
    pub size: u32,
    /// Error correction level: `L`, `M`, `Q` or `H`
    pub ec_level: String,
    pub quiet_zone: bool,
    pub dark_color: String,
    pub light_color: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            format: "png".to_string(),
            size: 256,
            ec_level: "M".to_string(),
            quiet_zone: true,
            dark_color: "#000000".to_string(),
            light_color: "#ffffff".to_string(),
        }
    }
}

/// `[output]` section: where default-named files go.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory for files written without an explicit path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// The settings file stored in TOML format.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path()?)
    }

    /// Load settings from the default location, or use defaults when there
    /// is no home directory to look in.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_in(get_config_dir())
    }

    fn load_in(config_dir: Result<PathBuf, ConfigError>) -> Result<Self, ConfigError> {
        match config_dir {
            Ok(dir) => Self::load_from(dir.join("config.toml")),
            Err(ConfigError::NoConfigDir) => {
                warn!("no home directory, using default settings");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Load settings from `path`, falling back to defaults if it doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the settings file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Builds a render configuration, validating every field.
    pub fn qr_config(&self) -> Result<QrConfig, ConfigError> {
        let render = &self.render;

        let format: QrFormat = render.format.parse().map_err(|_| ConfigError::InvalidValue {
            key: "render.format",
            value: render.format.clone(),
        })?;

        let ec_level = parse_ec_level(&render.ec_level).ok_or_else(|| ConfigError::InvalidValue {
            key: "render.ec_level",
            value: render.ec_level.clone(),
        })?;

        if render.size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "render.size",
                value: render.size.to_string(),
            });
        }

        for (key, color) in [
            ("render.dark_color", &render.dark_color),
            ("render.light_color", &render.light_color),
        ] {
            parse_color(color).map_err(|_| ConfigError::InvalidValue {
                key,
                value: color.clone(),
            })?;
        }

        Ok(QrConfig {
            ec_level,
            size: render.size,
            quiet_zone: render.quiet_zone,
            dark_color: render.dark_color.clone(),
            light_color: render.light_color.clone(),
            format,
        })
    }

    /// Directory for default-named output files (current directory if unset).
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Get the payloadqr config directory (`~/.payloadqr`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".payloadqr"))
        .ok_or(ConfigError::NoConfigDir)
}
