//! Geometric partitioning of the drawable page area.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! ## Rounding Rule
//!
//! Cell width and height are computed **once** with truncating integer
//! division and reused for every cell. Cell origins are exact multiples of
//! that shared size, so abutting cells never overlap and there is no
//! rounding drift across rows or columns. When the drawable area does not
//! divide evenly, at most `columns - 1` pixels at the right edge and
//! `rows - 1` pixels at the bottom edge are left uncovered — always less
//! than one cell's rounding unit per boundary.

/// An axis-aligned rectangle in source-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Whether this rectangle lies entirely within a `width` x `height` area
    /// anchored at the origin.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x as u64 + self.width as u64 <= width as u64
            && self.y as u64 + self.height as u64 <= height as u64
    }
}

/// Split `drawable` into a `rows` x `columns` grid of cell rectangles.
///
/// Cells are returned in row-major order: all columns of row 0 left to
/// right, then row 1, and so on. Callers must ensure `rows` and `columns`
/// are non-zero; the pipeline validates this before partitioning.
///
/// Cells can come out zero-sized when the drawable area is smaller than the
/// grid (e.g. a 1-pixel-wide page split into two columns). The pipeline
/// rejects that case; see
/// [`SegmentError::InvalidDimensions`](super::SegmentError::InvalidDimensions).
pub fn partition(drawable: Rect, rows: u32, columns: u32) -> Vec<Rect> {
    let cell_width = drawable.width / columns;
    let cell_height = drawable.height / rows;

    let mut cells = Vec::with_capacity((rows * columns) as usize);
    for row in 0..rows {
        for col in 0..columns {
            cells.push(Rect {
                x: drawable.x + col * cell_width,
                y: drawable.y + row * cell_height,
                width: cell_width,
                height: cell_height,
            });
        }
    }
    cells
}
