//! Startup configuration.
//!
//! Loaded once from a TOML file before the window opens. Every field has a
//! default, so an empty or missing file yields a working setup.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use quickdraw_ui::{Color, Theme};

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid TOML or has the wrong shape.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Window width in pixels.
    pub width: i32,
    /// Window height in pixels.
    pub height: i32,
    /// Initial background color; the demo's sliders edit it afterwards.
    pub background: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "quickdraw".to_owned(),
            width: 640,
            height: 480,
            background: Color::argb(0xFF16_1616),
        }
    }
}

/// The full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window settings.
    pub window: WindowConfig,
    /// Widget theme overrides.
    pub theme: Theme,
}

/// Loads the configuration from `path`.
///
/// A missing file is not an error: defaults are returned and the fallback is
/// logged. Anything else (unreadable file, bad TOML) is reported to the
/// caller.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let config = toml::from_str(&text)?;
            tracing::info!(path = %path.display(), "loaded config");
            Ok(config)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            Ok(AppConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}
