//! Parameter types for the segmentation engine.
//!
//! These types describe *what* to produce, not *how* to produce it. They are
//! the interface between the application layer (which loads them from
//! `config.toml`) and the [`pipeline`](super::pipeline) (which executes them).
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`PanelFormat`] — Output codec for panel artifacts (JPEG by default).
//! - [`MarginMode`] — Which page edges are scanned for whitespace margins.
//! - [`SegmentConfig`] — Full specification for one segmentation run: grid
//!   shape, whiteness classification bounds, margin policy, output encoding.

use serde::{Deserialize, Serialize};

/// Quality setting for lossy panel encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Output codec for panel artifacts.
///
/// JPEG is the default: panels are photographic scans and the library can
/// hold thousands of them. PNG is available for lossless archival. WebP
/// output uses the `image` crate's lossless encoder, so [`Quality`] applies
/// to JPEG only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelFormat {
    #[default]
    Jpeg,
    Png,
    WebP,
}

impl PanelFormat {
    /// File extension for persisted artifacts.
    pub fn extension(self) -> &'static str {
        match self {
            PanelFormat::Jpeg => "jpg",
            PanelFormat::Png => "png",
            PanelFormat::WebP => "webp",
        }
    }
}

/// Which page edges are scanned for whitespace margins.
///
/// Margin detection is an optional stage: `Both` is the canonical behavior,
/// while `Bottom` and `None` reproduce degraded setups where only the lower
/// scan border (or nothing at all) is trimmed before partitioning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginMode {
    /// No margin detection; the full page is partitioned.
    None,
    /// Detect and trim only the bottom whitespace run.
    Bottom,
    /// Detect and trim both the bottom and top whitespace runs.
    #[default]
    Both,
}

/// Full specification for one segmentation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentConfig {
    /// Number of panel rows in the grid.
    pub rows: u32,
    /// Number of panel columns in the grid.
    pub columns: u32,
    /// Minimum channel value for a pixel to count as white (applied to R, G
    /// and B; alpha is ignored).
    pub whiteness_threshold: u8,
    /// Fraction of white pixels a row must *exceed* to classify as white.
    pub row_whiteness_ratio: f32,
    /// Margin detection policy.
    pub margins: MarginMode,
    /// Output codec for panel artifacts.
    pub format: PanelFormat,
    /// Encoding quality for lossy formats.
    pub quality: Quality,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 2,
            whiteness_threshold: 250,
            row_whiteness_ratio: 0.95,
            margins: MarginMode::default(),
            format: PanelFormat::default(),
            quality: Quality::default(),
        }
    }
}
