//! Page segmentation — pure Rust, zero external dependencies.
//!
//! Turns one scanned comic page into an ordered set of panel artifacts plus
//! a cover thumbnail:
//!
//! | Stage | Mechanism |
//! |---|---|
//! | **Decode / encode** | [`PanelCodec`] trait + [`ImageCodec`] (`image` crate) |
//! | **Whitespace margins** | scan-line classification, short-circuit per edge |
//! | **Grid partitioning** | pure geometry, truncating division, unit testable |
//! | **Panel extraction** | crop + re-encode, rayon-parallel |
//! | **Orchestration** | [`segment`] — the single entry point |
//!
//! The module is split into:
//! - **Params**: Data structures describing a segmentation run
//! - **Whitespace / Grid**: Pure functions over the decoded buffer
//! - **Codec**: [`PanelCodec`] trait + [`ImageCodec`]
//! - **Extract / Pipeline**: Crop-and-encode plus the state machine gluing
//!   it all together

pub mod codec;
mod error;
mod extract;
mod grid;
pub mod image_codec;
mod params;
pub mod pipeline;
mod whitespace;

pub use codec::{CodecError, PanelCodec};
pub use error::SegmentError;
pub use extract::Panel;
pub use grid::Rect;
pub use image_codec::ImageCodec;
pub use params::{MarginMode, PanelFormat, Quality, SegmentConfig};
pub use pipeline::{SegmentationResult, segment, segment_with_codec};
pub use whitespace::{detect_bottom_margin, detect_top_margin, row_is_white};
