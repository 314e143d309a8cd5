//! Panel extraction: crop a cell rectangle and re-encode it.

use super::codec::PanelCodec;
use super::error::SegmentError;
use super::grid::Rect;
use super::params::{PanelFormat, Quality};
use image::RgbaImage;

/// One cropped, individually encoded sub-image of a page.
///
/// Panels are immutable once created; ownership transfers to the caller of
/// the pipeline.
#[derive(Debug, Clone)]
pub struct Panel {
    /// 0-based position in row-major order.
    pub index: usize,
    /// Encoded artifact in the configured output format.
    pub bytes: Vec<u8>,
    /// The region of the source page this panel was cut from.
    pub source_rect: Rect,
}

/// Crop `rect` out of `page` and encode it as a panel artifact.
///
/// The source buffer is read-only throughout; each call produces an
/// independent output, which is what lets the pipeline run extractions in
/// parallel. `rect` must lie within the page bounds.
pub fn extract_panel(
    codec: &impl PanelCodec,
    page: &RgbaImage,
    index: usize,
    rect: Rect,
    format: PanelFormat,
    quality: Quality,
) -> Result<Panel, SegmentError> {
    if !rect.fits_within(page.width(), page.height()) {
        return Err(SegmentError::OutOfBounds {
            index,
            rect,
            width: page.width(),
            height: page.height(),
        });
    }

    let cell = image::imageops::crop_imm(page, rect.x, rect.y, rect.width, rect.height).to_image();
    let bytes = codec
        .encode(&cell, format, quality)
        .map_err(|source| SegmentError::Encode { index, source })?;

    Ok(Panel {
        index,
        bytes,
        source_rect: rect,
    })
}
