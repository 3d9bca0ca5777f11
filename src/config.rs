//! Generator configuration.
//!
//! Loaded from YAML (`~/.config/emoji-forge/config.yaml` by default). Every
//! field has a default, so a missing file or a partial file is fine; with no
//! file and no flags the generator reproduces its fixed built-in behaviour.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use emoji_forge_fonts::EMOJI_FAMILIES;
use emoji_forge_registry::DEFAULT_REGISTRY_URL;

use crate::debug::LogLevel;

/// Font used for the Basic subset when nothing else is configured.
#[cfg(windows)]
pub const DEFAULT_FONT_PATH: &str = r"C:\Windows\Fonts\seguiemj.ttf";
#[cfg(target_os = "macos")]
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Apple Color Emoji.ttc";
#[cfg(not(any(windows, target_os = "macos")))]
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/noto/NotoColorEmoji.ttf";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry URL or path to a local `emoji-test.txt`
    pub source: String,

    /// Font file used for the glyph-support check
    pub font_path: Option<PathBuf>,

    /// Installed font families to try when `font_path` is missing
    pub font_families: Vec<String>,

    /// Directory the generated files are written to
    pub output_dir: PathBuf,

    /// Namespace of the generated declarations
    pub namespace: String,

    /// Log verbosity
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_REGISTRY_URL.to_string(),
            font_path: Some(PathBuf::from(DEFAULT_FONT_PATH)),
            font_families: EMOJI_FAMILIES.iter().map(|f| f.to_string()).collect(),
            output_dir: PathBuf::from("out"),
            namespace: "NeoSmart.Unicode".to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("emoji-forge")
            .join("config.yaml")
    }

    /// Load `path`, or the default location when `path` is `None`.
    ///
    /// A missing default file yields `Config::default()`; an explicitly
    /// requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if !explicit && !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_yaml(&contents).with_context(|| format!("Invalid config file {:?}", path))
    }

    /// Parse a YAML document.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(contents)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("output_dir: generated\nlog_level: warn\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("generated"));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.source, DEFAULT_REGISTRY_URL);
        assert_eq!(config.namespace, "NeoSmart.Unicode");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            font_path: None,
            ..Config::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Config::from_yaml("log_level: [loud]").is_err());
    }
}
