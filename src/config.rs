//! Launcher Configuration
//!
//! `LauncherConfig` carries the limits every core component is built with. `Settings` is the
//! on-disk TOML file that wraps it together with the location of the snippet collection.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_WINDOW_SIZE: usize = 5;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 10_000;
pub const DEFAULT_MAX_COMBINED_SIZE: usize = 10_000;
/// Largest window the overlay can lay out as list rows
pub const MAX_WINDOW_SIZE: usize = 60;

const APP_DIR: &str = "snix-launcher";

/// Limits shared by the validator, navigation and combination controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Number of rows in the sliding window
    pub max_window_size: usize,
    pub max_title_length: usize,
    pub max_content_length: usize,
    /// Upper bound for the summed content length of a combination
    pub max_combined_size: usize,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            max_window_size: DEFAULT_MAX_WINDOW_SIZE,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            max_combined_size: DEFAULT_MAX_COMBINED_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_window_size must be at least 1")]
    ZeroWindow,
    #[error("max_window_size must be at most {max}")]
    WindowTooLarge { max: usize },
    #[error("{field} must be at least 1")]
    ZeroLimit { field: &'static str },
}

impl LauncherConfig {
    /// Rejects limits the controllers cannot operate with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_window_size == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if self.max_window_size > MAX_WINDOW_SIZE {
            return Err(ConfigError::WindowTooLarge {
                max: MAX_WINDOW_SIZE,
            });
        }
        for (field, value) in [
            ("max_title_length", self.max_title_length),
            ("max_content_length", self.max_content_length),
            ("max_combined_size", self.max_combined_size),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroLimit { field });
            }
        }
        Ok(())
    }

    pub fn with_max_window_size(mut self, max_window_size: usize) -> Self {
        self.max_window_size = max_window_size;
        self
    }
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overrides the default snippet collection location
    pub snippets_file: Option<PathBuf>,
    pub launcher: LauncherConfig,
}

impl Settings {
    /// Default location of the settings file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Loads settings from the platform config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::info!("No config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Settings file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::parse(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;

        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).context("Failed to parse settings TOML")?;
        settings.launcher.validate()?;
        Ok(settings)
    }

    /// Resolves the snippet collection path: explicit override, then setting, then data dir
    pub fn snippets_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.snippets_file.clone())
            .or_else(default_snippets_path)
    }
}

pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

fn default_snippets_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("snippets.json"))
}
