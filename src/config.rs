//! TOML configuration for the command-line driver and embedding front-ends.
//!
//! ```toml
//! [parameters]          # optional, percent units for rate/volatility
//! spot = 52.5
//! strike = 55.0
//! time = 0.5
//! rate = 4.5
//! volatility = 27.0
//!
//! [sweep.strike]        # any omitted sweep falls back to the standard preset
//! half_width = 10.0
//! step = 0.5
//! axis_padding = 2.0
//!
//! [output]
//! csv_path = "sweeps.csv"
//! svg_path = "sensitivity.svg"
//! ```

use crate::models::types::OptionParameters;
use crate::sweep::config::SweepConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where sweep results are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// CSV file receiving every sweep point
    #[serde(default)]
    pub csv_path: Option<PathBuf>,

    /// SVG file receiving the 2×2 panel chart
    #[serde(default)]
    pub svg_path: Option<PathBuf>,

    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: None,
            svg_path: None,
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Submitted inputs; None means nothing was submitted yet
    #[serde(default)]
    pub parameters: Option<OptionParameters>,

    #[serde(default)]
    pub sweep: SweepConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text).context("failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(params) = &self.parameters {
            params.validate().context("invalid [parameters]")?;
        }
        self.sweep.validate().context("invalid [sweep]")?;
        anyhow::ensure!(
            self.output.width > 0 && self.output.height > 0,
            "chart dimensions must be positive, got {}x{}",
            self.output.width,
            self.output.height
        );
        Ok(())
    }
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    960
}
