//! Failure taxonomy for the segmentation pipeline.
//!
//! A failed stage aborts the whole `segment` call; there are no internal
//! retries and no partially populated results. The caller decides whether
//! to try again with a different page or configuration.

use super::codec::CodecError;
use super::grid::Rect;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentError {
    /// The input bytes could not be interpreted as an image.
    #[error("could not decode page image: {0}")]
    Decode(#[source] CodecError),

    /// The decoded page has a zero side, or is too small to give every grid
    /// cell at least one pixel.
    #[error("page of {width}x{height} pixels is too small to segment")]
    InvalidDimensions { width: u32, height: u32 },

    /// The configured grid shape has a zero side.
    #[error("grid must have at least one row and one column (got {rows}x{columns})")]
    InvalidGrid { rows: u32, columns: u32 },

    /// A computed cell rectangle escaped the page bounds. Unreachable with a
    /// correct partitioner; an invariant breach rather than a recoverable
    /// condition.
    #[error("panel {index} rectangle {rect:?} exceeds page bounds {width}x{height}")]
    OutOfBounds {
        index: usize,
        rect: Rect,
        width: u32,
        height: u32,
    },

    /// Re-encoding a cropped panel failed. Carries the failing panel index.
    #[error("could not encode panel {index}: {source}")]
    Encode {
        index: usize,
        #[source]
        source: CodecError,
    },
}
