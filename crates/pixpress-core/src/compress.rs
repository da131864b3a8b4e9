//! The per-image compression decision.
//!
//! [`compress`] decides whether to resize, which format to encode to, and
//! whether the encoded result is worth keeping over the original file. The
//! pixel work itself is delegated to a [`RasterCodec`].
//!
//! # Decision order
//!
//! 1. Resize when the source is wider than `max_width` (height follows the
//!    aspect ratio).
//! 2. Pick the output format from the declared MIME type. PNG stays PNG only
//!    when the (resized) raster has a transparent pixel; otherwise it drops
//!    to JPEG.
//! 3. Encode, then compare against the original size. An encode that did not
//!    shrink the file is discarded unless a resize happened, since a resize
//!    was explicitly requested.

use tracing::debug;

use crate::codec::RasterCodec;
use crate::config::CompressionConfig;
use crate::decode::{fit_to_width, normalize_mime, RgbaRaster, SourceImage};
use crate::encode::OutputFormat;
use crate::error::CodecError;

/// Result of compressing one image with one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionOutcome {
    mime_type: String,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
    byte_size: usize,
    original_byte_size: usize,
    quality: f32,
    was_resized: bool,
    used_original: bool,
}

impl CompressionOutcome {
    /// An outcome that hands back the source file untouched.
    fn original(source: &SourceImage) -> Self {
        Self {
            mime_type: source.declared_mime().to_string(),
            width: source.width(),
            height: source.height(),
            bytes: source.original_bytes().to_vec(),
            byte_size: source.original_byte_size(),
            original_byte_size: source.original_byte_size(),
            quality: 1.0,
            was_resized: false,
            used_original: true,
        }
    }

    /// MIME type of [`Self::bytes`].
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The bytes to offer for download.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    pub fn original_byte_size(&self) -> usize {
        self.original_byte_size
    }

    /// Quality fraction applied; 1.0 when the original was kept.
    pub fn quality(&self) -> f32 {
        self.quality
    }

    pub fn was_resized(&self) -> bool {
        self.was_resized
    }

    /// True when encoding did not help and no resize happened, so the
    /// original file is returned as-is.
    pub fn used_original(&self) -> bool {
        self.used_original
    }
}

/// Choose the output format for a declared MIME type and the raster that
/// will be encoded.
pub fn choose_format(declared_mime: &str, raster: &RgbaRaster) -> OutputFormat {
    match normalize_mime(declared_mime).as_str() {
        "image/png" if raster.has_transparency() => OutputFormat::Png,
        "image/png" => OutputFormat::Jpeg,
        "image/jpeg" | "image/jpg" => OutputFormat::Jpeg,
        "image/webp" => OutputFormat::WebP,
        // Everything else (including an empty type) is normalized to JPEG
        _ => OutputFormat::Jpeg,
    }
}

/// Compress one source image.
///
/// Never fails for a valid source and configuration; only codec failures
/// propagate.
pub fn compress<C>(
    codec: &C,
    source: &SourceImage,
    config: &CompressionConfig,
) -> Result<CompressionOutcome, CodecError>
where
    C: RasterCodec + ?Sized,
{
    let raster = source.raster();

    let resized;
    let (working, was_resized) = match fit_to_width(raster.width, raster.height, config.max_width())
    {
        Some((width, height)) => {
            resized = codec.resize(raster, width, height)?;
            (&resized, true)
        }
        None => (raster, false),
    };

    let format = choose_format(source.declared_mime(), working);
    let encoded = codec.encode(working, format, config.quality())?;
    let byte_size = encoded.len();

    debug!(
        name = source.name(),
        %format,
        width = working.width,
        height = working.height,
        was_resized,
        original = source.original_byte_size(),
        encoded = byte_size,
        "encoded image"
    );

    if byte_size >= source.original_byte_size() && !was_resized {
        debug!(name = source.name(), "encoding did not shrink the file, keeping original");
        return Ok(CompressionOutcome::original(source));
    }

    Ok(CompressionOutcome {
        mime_type: format.mime_type().to_string(),
        width: working.width,
        height: working.height,
        bytes: encoded,
        byte_size,
        original_byte_size: source.original_byte_size(),
        quality: config.quality(),
        was_resized,
        used_original: false,
    })
}
