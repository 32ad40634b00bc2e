//! Engine configuration
//!
//! TOML-backed settings an application reads once at startup. Every field
//! has a sensible default so a missing file, or a file that only overrides
//! a couple of values, works out of the box:
//!
//! ```toml
//! [window]
//! width = 1280
//! height = 720
//! title = "My Game"
//!
//! [assets]
//! root = "assets"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Window settings for the embedding application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "sprite_engine".to_string(),
        }
    }
}

/// Asset lookup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory texture paths are resolved against
    pub root: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Asset settings
    pub assets: AssetConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or malformed. The fallback is logged, not silent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => {
                log::info!(
                    "no config file at {}, using defaults",
                    path.display()
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.assets.root, PathBuf::from("assets"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "[window]\ntitle = \"Walker\"\n").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.window.title, "Walker");
        // Unset fields keep their defaults.
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.assets, AssetConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = EngineConfig::load("no/such/engine.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "window = 3").unwrap();

        let result = EngineConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = EngineConfig::load_or_default("no/such/engine.toml");
        assert_eq!(config, EngineConfig::default());
    }
}
