//! Output formats and encoding errors.

use thiserror::Error;

/// Errors that can occur while encoding a raster.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("{format} encoding failed: {reason}")]
    EncodingFailed {
        format: OutputFormat,
        reason: String,
    },
}

/// Formats the compressor can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// MIME type written into the outcome and data URLs.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::WebP => "WebP",
        };
        f.write_str(label)
    }
}

/// Convert a quality fraction (0.0 to 1.0) into an encoder quality (1-100).
///
/// Out-of-range and NaN inputs are clamped.
pub fn quality_to_percent(quality: f32) -> u8 {
    if quality.is_nan() {
        return 1;
    }
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Check that an RGBA buffer matches the given dimensions.
pub(crate) fn validate_rgba(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_mime_and_label() {
        assert_eq!(OutputFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(OutputFormat::Png.mime_type(), "image/png");
        assert_eq!(OutputFormat::WebP.mime_type(), "image/webp");
        assert_eq!(OutputFormat::WebP.to_string(), "WebP");
    }

    #[test]
    fn test_quality_to_percent() {
        assert_eq!(quality_to_percent(0.8), 80);
        assert_eq!(quality_to_percent(1.0), 100);
        assert_eq!(quality_to_percent(0.001), 1);
        assert_eq!(quality_to_percent(3.0), 100);
        assert_eq!(quality_to_percent(f32::NAN), 1);
    }

    #[test]
    fn test_validate_rgba() {
        assert!(validate_rgba(&[0; 16], 2, 2).is_ok());
        assert!(matches!(
            validate_rgba(&[0; 12], 2, 2),
            Err(EncodeError::InvalidPixelData {
                expected: 16,
                actual: 12
            })
        ));
        assert!(matches!(
            validate_rgba(&[], 0, 2),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encoding_failed_display() {
        let err = EncodeError::EncodingFailed {
            format: OutputFormat::Png,
            reason: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "PNG encoding failed: boom");
    }
}
