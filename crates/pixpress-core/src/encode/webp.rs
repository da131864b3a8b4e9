//! WebP encoding.
//!
//! The pure-Rust WebP encoder in the `image` crate only writes lossless
//! bitstreams. To give the quality setting an effect, colour channels are
//! quantized to fewer levels before encoding when quality is below 100;
//! fewer distinct values compress considerably better. Alpha is never
//! quantized.

use image::codecs::webp::WebPEncoder;
use image::ExtendedColorType;

use super::types::validate_rgba;
use super::{EncodeError, OutputFormat};

/// Encode RGBA pixel data to WebP bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - Quality (1-100); 100 is a lossless encode
pub fn encode_webp(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate_rgba(pixels, width, height)?;

    let quality = quality.clamp(1, 100);
    let mut working = pixels.to_vec();
    quantize_rgb(&mut working, quality);

    let mut buffer = Vec::new();
    WebPEncoder::new_lossless(&mut buffer)
        .encode(&working, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: OutputFormat::WebP,
            reason: e.to_string(),
        })?;

    Ok(buffer)
}

/// Snap each colour channel to the nearest of `levels_for_quality` evenly
/// spaced values.
fn quantize_rgb(pixels: &mut [u8], quality: u8) {
    if quality >= 100 {
        return;
    }

    let levels = levels_for_quality(quality);
    let step = 255.0 / (f32::from(levels) - 1.0);

    for px in pixels.chunks_exact_mut(4) {
        for channel in px.iter_mut().take(3) {
            let bucket = (f32::from(*channel) / step).round();
            *channel = (bucket * step).round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Quadratic curve: high qualities keep nearly every level, low qualities
/// collapse to a coarse palette.
fn levels_for_quality(quality: u8) -> u16 {
    if quality >= 100 {
        return 256;
    }
    let normalized = f32::from(quality.max(1)) / 100.0;
    let levels = 2.0 + normalized * normalized * 254.0;
    levels.round().clamp(2.0, 256.0) as u16
}
