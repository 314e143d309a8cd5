//! Library configuration module.
//!
//! Handles loading and validating the `config.toml` that lives in the
//! library root. All settings are optional: a sparse file overrides just
//! the values it names and stock defaults fill in the rest. Unknown keys
//! are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [segmentation]
//! rows = 3                   # Panel grid rows
//! columns = 2                # Panel grid columns
//! whiteness_threshold = 250  # Min channel value for a "white" pixel (0-255)
//! row_whiteness_ratio = 0.95 # Fraction of white pixels a margin row must exceed
//! margins = "both"           # Margin detection: "none" | "bottom" | "both"
//! format = "jpeg"            # Panel output: "jpeg" | "png" | "webp"
//! quality = 90               # JPEG quality (1-100)
//!
//! [processing]
//! max_processes = 4          # Max parallel workers (omit for auto = CPU cores)
//! ```

use crate::segment::{MarginMode, PanelFormat, Quality, SegmentConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Library configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfConfig {
    /// Page segmentation settings.
    pub segmentation: SegmentationConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl ShelfConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segmentation.rows == 0 {
            return Err(ConfigError::Validation(
                "segmentation.rows must be at least 1".into(),
            ));
        }
        if self.segmentation.columns == 0 {
            return Err(ConfigError::Validation(
                "segmentation.columns must be at least 1".into(),
            ));
        }
        if self.segmentation.quality == 0 || self.segmentation.quality > 100 {
            return Err(ConfigError::Validation(
                "segmentation.quality must be 1-100".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.segmentation.row_whiteness_ratio) {
            return Err(ConfigError::Validation(
                "segmentation.row_whiteness_ratio must be 0.0-1.0".into(),
            ));
        }
        Ok(())
    }

    /// Build the engine-level [`SegmentConfig`] from this config.
    pub fn segment_config(&self) -> SegmentConfig {
        let s = &self.segmentation;
        SegmentConfig {
            rows: s.rows,
            columns: s.columns,
            whiteness_threshold: s.whiteness_threshold,
            row_whiteness_ratio: s.row_whiteness_ratio,
            margins: s.margins,
            format: s.format,
            quality: Quality::new(s.quality),
        }
    }
}

/// Page segmentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentationConfig {
    /// Panel grid rows.
    pub rows: u32,
    /// Panel grid columns.
    pub columns: u32,
    /// Minimum channel value for a pixel to count as white (0-255).
    pub whiteness_threshold: u8,
    /// Fraction of white pixels a row must exceed to classify as a margin row.
    pub row_whiteness_ratio: f32,
    /// Which page edges are scanned for whitespace margins.
    pub margins: MarginMode,
    /// Output codec for panel artifacts.
    pub format: PanelFormat,
    /// JPEG encoding quality (1 = worst, 100 = best).
    pub quality: u32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 2,
            whiteness_threshold: 250,
            row_whiteness_ratio: 0.95,
            margins: MarginMode::default(),
            format: PanelFormat::default(),
            quality: 90,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel panel-extraction workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Load config from `config.toml` in the library root.
///
/// Missing file means stock defaults. Unknown keys are rejected and the
/// result is validated.
pub fn load_config(root: &Path) -> Result<ShelfConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        ShelfConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Comic Shelf Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the library root (next to the comic directories).
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Page segmentation
# ---------------------------------------------------------------------------
[segmentation]
# Panel grid shape. Every imported page is cut into rows x columns panels,
# ordered top-to-bottom then left-to-right.
rows = 3
columns = 2

# A pixel counts as white when its R, G and B channels are all at or above
# this value (0-255). Lower it for yellowed or dim scans.
whiteness_threshold = 250

# A row classifies as margin when its white-pixel fraction exceeds this
# ratio (0.0-1.0). Lower it for dusty scans.
row_whiteness_ratio = 0.95

# Which page edges are scanned for whitespace margins before partitioning:
#   "both"   - trim top and bottom runs (recommended)
#   "bottom" - trim only the bottom run
#   "none"   - partition the full page
margins = "both"

# Panel artifact format: "jpeg" (lossy, small), "png" or "webp" (lossless).
format = "jpeg"

# JPEG quality (1 = worst, 100 = best). Ignored for lossless formats.
quality = 90

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel panel-extraction workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
