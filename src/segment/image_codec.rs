//! Pure Rust codec backend — zero external dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP) | `image::load_from_memory` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (quality 1–100) |
//! | Encode → PNG | `image::ImageFormat::Png` via `write_to` |
//! | Encode → WebP | `image::codecs::webp::WebPEncoder` (lossless) |

use super::codec::{CodecError, PanelCodec};
use super::params::{PanelFormat, Quality};
use image::buffer::ConvertBuffer;
use image::{ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelCodec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, CodecError> {
        image::load_from_memory(bytes)
            .map(|decoded| decoded.to_rgba8())
            .map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn encode(
        &self,
        image: &RgbaImage,
        format: PanelFormat,
        quality: Quality,
    ) -> Result<Vec<u8>, CodecError> {
        let mut buffer = Vec::new();
        match format {
            PanelFormat::Jpeg => {
                // JPEG has no alpha channel; drop it before encoding.
                let rgb: RgbImage = image.convert();
                let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                    &mut buffer,
                    quality.value() as u8,
                );
                rgb.write_with_encoder(encoder)
                    .map_err(|e| CodecError::Encode(e.to_string()))?;
            }
            PanelFormat::Png => {
                image
                    .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
                    .map_err(|e| CodecError::Encode(e.to_string()))?;
            }
            PanelFormat::WebP => {
                let encoder = image::codecs::webp::WebPEncoder::new_lossless(&mut buffer);
                image
                    .write_with_encoder(encoder)
                    .map_err(|e| CodecError::Encode(e.to_string()))?;
            }
        }
        Ok(buffer)
    }
}
