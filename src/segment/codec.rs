//! Codec backend trait and shared error type.
//!
//! The [`PanelCodec`] trait defines the two pixel-level operations the
//! pipeline needs: decoding a page byte stream into a raster buffer and
//! encoding a cropped panel back into compressed bytes.
//!
//! The production implementation is
//! [`ImageCodec`](super::image_codec::ImageCodec) — pure Rust via the
//! `image` crate. Tests inject a mock that records operations without
//! touching real pixels, so pipeline logic is exercised without paying for
//! encoding.

use super::params::{PanelFormat, Quality};
use image::RgbaImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Trait for codec backends.
///
/// `Sync` is required because panel extraction fans out across the rayon
/// pool with a shared backend reference.
pub trait PanelCodec: Sync {
    /// Decode an encoded image byte stream into an RGBA buffer.
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, CodecError>;

    /// Encode an RGBA buffer into `format` at `quality`.
    fn encode(
        &self,
        image: &RgbaImage,
        format: PanelFormat,
        quality: Quality,
    ) -> Result<Vec<u8>, CodecError>;
}
