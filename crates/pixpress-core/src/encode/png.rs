//! PNG encoding.
//!
//! PNG is lossless, so there is no quality parameter. The encoder uses the
//! strongest deflate setting with adaptive row filtering.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use super::types::validate_rgba;
use super::{EncodeError, OutputFormat};

/// Encode RGBA pixel data to PNG bytes, preserving alpha.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate_rgba(pixels, width, height)?;

    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: OutputFormat::Png,
            reason: e.to_string(),
        })?;

    Ok(buffer)
}
