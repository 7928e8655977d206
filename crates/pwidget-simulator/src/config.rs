//! Simulator configuration file
//!
//! Read from the path in `PWIDGET_CONFIG`, or `pwidget.toml` in the working
//! directory. A missing file gives the defaults; a malformed one is an error.

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info};
use pwidget_core::WindowConfig;
use serde::Deserialize;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "PWIDGET_CONFIG";

/// Config file looked up when `PWIDGET_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "pwidget.toml";

/// Glyph size used when no tile sheet is configured
pub const DEFAULT_FONT_SIZE: u32 = 10;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
    pub window: WindowConfig,
    /// Pixel scale of the SDL window
    pub scale: u32,
    pub title: String,
    pub font: FontConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            scale: 1,
            title: "pwidget".to_string(),
            font: FontConfig::default(),
        }
    }
}

/// Optional tile sheet; without a path the built-in mono font is used
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    pub path: Option<PathBuf>,
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl SimulatorConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("Invalid simulator config")
    }

    /// Load the config from `PWIDGET_CONFIG` or the default path.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        info!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
