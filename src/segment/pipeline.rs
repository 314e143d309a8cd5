//! The segmentation pipeline — the engine's only public entry point.
//!
//! One call runs the full sequence over a single page:
//!
//! ```text
//! decode → validate → margin detection → partition → extract → cover
//! ```
//!
//! Stages are strictly sequential and never retried. The call is atomic
//! from the caller's perspective: it returns either a complete
//! [`SegmentationResult`] or a single [`SegmentError`], never a partial
//! panel sequence.
//!
//! ## Parallel extraction
//!
//! The `rows * columns` extractions are mutually independent — each reads a
//! disjoint region of the read-only page and produces its own artifact — so
//! they fan out across the rayon pool. Results are collected back in cell
//! index order, not completion order, so panel ordering is row-major
//! regardless of scheduling. Margin detection short-circuits row by row and
//! stays sequential.
//!
//! ## Zero-drawable fallback
//!
//! A fully white page classifies every row as margin, leaving a drawable
//! height of zero. Rather than producing zero-sized panels, the pipeline
//! falls back to partitioning the full page height with both margins
//! ignored.

use super::codec::PanelCodec;
use super::error::SegmentError;
use super::extract::{Panel, extract_panel};
use super::grid::{self, Rect};
use super::image_codec::ImageCodec;
use super::params::{MarginMode, SegmentConfig};
use super::whitespace::{detect_bottom_margin, detect_top_margin};
use image::RgbaImage;
use rayon::prelude::*;

/// The ordered panel sequence produced from one page.
#[derive(Debug, Clone)]
pub struct SegmentationResult {
    /// Panels in row-major order; length is `rows * columns`.
    pub panels: Vec<Panel>,
}

impl SegmentationResult {
    /// The cover artifact: always the first row-major panel (top-left).
    ///
    /// `None` only for an empty panel sequence; callers display a
    /// placeholder in that case.
    pub fn cover(&self) -> Option<&[u8]> {
        self.panels.first().map(|panel| panel.bytes.as_slice())
    }
}

/// Segment an encoded page image into an ordered set of panel artifacts.
///
/// The sole public operation of the engine. Decodes `bytes`, trims
/// whitespace margins per `config.margins`, partitions the drawable area
/// into a `rows` x `columns` grid and re-encodes every cell. Invocations
/// are independent and may run concurrently over separate pages.
pub fn segment(bytes: &[u8], config: &SegmentConfig) -> Result<SegmentationResult, SegmentError> {
    segment_with_codec(&ImageCodec::new(), bytes, config)
}

/// [`segment`] with an injected codec backend (allows testing with a mock).
pub fn segment_with_codec(
    codec: &impl PanelCodec,
    bytes: &[u8],
    config: &SegmentConfig,
) -> Result<SegmentationResult, SegmentError> {
    if config.rows == 0 || config.columns == 0 {
        return Err(SegmentError::InvalidGrid {
            rows: config.rows,
            columns: config.columns,
        });
    }

    let page = codec.decode(bytes).map_err(SegmentError::Decode)?;
    let (width, height) = page.dimensions();
    if width == 0 || height == 0 {
        return Err(SegmentError::InvalidDimensions { width, height });
    }

    let (top, bottom) = detect_margins(&page, config);
    let drawable = drawable_rect(width, height, top, bottom);

    let cells = grid::partition(drawable, config.rows, config.columns);
    if cells.iter().any(|cell| cell.width == 0 || cell.height == 0) {
        // Page smaller than the grid: no cell can hold a pixel.
        return Err(SegmentError::InvalidDimensions { width, height });
    }

    let panels: Vec<Panel> = cells
        .par_iter()
        .enumerate()
        .map(|(index, &rect)| {
            extract_panel(codec, &page, index, rect, config.format, config.quality)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SegmentationResult { panels })
}

/// Detected (top, bottom) margin row counts per the configured mode.
fn detect_margins(page: &RgbaImage, config: &SegmentConfig) -> (u32, u32) {
    let threshold = config.whiteness_threshold;
    let ratio = config.row_whiteness_ratio;
    match config.margins {
        MarginMode::None => (0, 0),
        MarginMode::Bottom => (0, detect_bottom_margin(page, threshold, ratio)),
        MarginMode::Both => {
            let bottom = detect_bottom_margin(page, threshold, ratio);
            let top = detect_top_margin(page, page.height() - bottom, threshold, ratio);
            (top, bottom)
        }
    }
}

/// The sub-rectangle left after removing margins, or the full page when the
/// margins consumed everything (see the module docs on the fallback).
fn drawable_rect(width: u32, height: u32, top: u32, bottom: u32) -> Rect {
    let drawable_height = height - top - bottom;
    if drawable_height == 0 {
        return Rect {
            x: 0,
            y: 0,
            width,
            height,
        };
    }
    Rect {
        x: 0,
        y: top,
        width,
        height: drawable_height,
    }
}
