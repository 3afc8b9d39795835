//! Optional JSON configuration for CLI defaults and time estimates.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const LOCAL_CONFIG: &str = "slidekit.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
    Jpeg,
    Tiff,
}

impl ImageFormat {
    /// Output flag understood by `pdftoppm`.
    pub fn pdftoppm_flag(self) -> &'static str {
        match self {
            Self::Png => "-png",
            Self::Jpg | Self::Jpeg => "-jpeg",
            Self::Tiff => "-tiff",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Tiff => "tiff",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliDefaults {
    pub output_directory: PathBuf,
    pub image_format: ImageFormat,
    pub dpi: u32,
    pub output_filename: String,
}

impl Default for CliDefaults {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("./output"),
            image_format: ImageFormat::Png,
            dpi: 300,
            output_filename: "presentation_content.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    pub base_timeout_seconds: u64,
    pub per_slide_basic_seconds: u64,
    pub max_timeout_seconds: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            base_timeout_seconds: 60,
            per_slide_basic_seconds: 5,
            max_timeout_seconds: 600,
        }
    }
}

impl Timeouts {
    /// Upper bound on processing time for `slides` slides, in seconds.
    pub fn estimate(&self, slides: usize) -> u64 {
        let per_slide = self.per_slide_basic_seconds.saturating_mul(slides as u64);
        self.base_timeout_seconds
            .saturating_add(per_slide)
            .min(self.max_timeout_seconds)
    }
}

/// Unknown keys are ignored so older configuration files keep loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub cli_defaults: CliDefaults,
    pub timeouts: Timeouts,
}

impl CliConfig {
    /// An explicit path must exist and parse. Otherwise the first existing
    /// default location is used, falling back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        match default_locations().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::read(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(LOCAL_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("slidekit").join("config.json"));
    }
    locations
}
