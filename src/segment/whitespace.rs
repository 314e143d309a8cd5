//! Scan-line whitespace classification and margin detection.
//!
//! Scanned comic pages carry blank paper above and below the artwork. These
//! functions find those runs so the partitioner only tiles the drawable
//! area. All functions are pure over an already-decoded buffer.
//!
//! Margins are single contiguous runs anchored at an edge: each scan starts
//! at the outermost row and stops at the first row that is not mostly
//! white. A blank band in the interior of the page (e.g. an empty panel) is
//! therefore never treated as a margin.

use image::RgbaImage;

/// Whether the row at `y` is mostly white.
///
/// A pixel counts as white only when its red, green and blue channels are
/// all at or above `threshold`; alpha is ignored. The row classifies as
/// white when the white-pixel fraction strictly exceeds `ratio`.
///
/// `y` must be within the buffer; callers scan within known bounds.
pub fn row_is_white(page: &RgbaImage, y: u32, threshold: u8, ratio: f32) -> bool {
    let width = page.width();
    let mut white_pixels = 0u32;
    for x in 0..width {
        let [r, g, b, _] = page.get_pixel(x, y).0;
        if r >= threshold && g >= threshold && b >= threshold {
            white_pixels += 1;
        }
    }
    white_pixels as f32 / width as f32 > ratio
}

/// Count the contiguous run of white rows at the bottom of the page.
///
/// Scans upward from `y = height - 1` and short-circuits at the first
/// non-white row. Returns `height` for a fully white page.
pub fn detect_bottom_margin(page: &RgbaImage, threshold: u8, ratio: f32) -> u32 {
    let height = page.height();
    let mut margin = 0;
    while margin < height && row_is_white(page, height - 1 - margin, threshold, ratio) {
        margin += 1;
    }
    margin
}

/// Count the contiguous run of white rows at the top of the page, scanning
/// no further than `search_height` (exclusive).
///
/// `search_height` is the page height minus the already-detected bottom
/// margin, so the top scan never re-examines the bottom run. With
/// `search_height == 0` (fully white page) the scan terminates immediately
/// and returns 0.
pub fn detect_top_margin(page: &RgbaImage, search_height: u32, threshold: u8, ratio: f32) -> u32 {
    let mut margin = 0;
    while margin < search_height && row_is_white(page, margin, threshold, ratio) {
        margin += 1;
    }
    margin
}
