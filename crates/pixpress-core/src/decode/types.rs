//! Core types for decoded rasters and source images.

use thiserror::Error;

/// Error types for image decoding and resizing.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No bytes were supplied.
    #[error("Image data is empty")]
    Empty,

    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation, close to what a browser canvas does by default.
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded raster with RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaRaster {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl RgbaRaster {
    /// Create a new raster with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a raster filled with a single RGBA colour.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = (width as usize) * (height as usize);
        let pixels = rgba.iter().copied().cycle().take(count * 4).collect();
        Self::new(width, height, pixels)
    }

    /// Create a raster from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbaImage for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Returns true if any pixel has an alpha value below fully opaque.
    ///
    /// Stops at the first transparent pixel.
    pub fn has_transparency(&self) -> bool {
        self.pixels.chunks_exact(4).any(|px| px[3] < u8::MAX)
    }
}

/// An image captured at ingestion: its identity, declared type, the original
/// encoded bytes and the decoded raster.
///
/// Immutable once built; the compression engine only reads it.
#[derive(Debug, Clone)]
pub struct SourceImage {
    name: String,
    declared_mime: String,
    original_bytes: Vec<u8>,
    raster: RgbaRaster,
}

impl SourceImage {
    /// Assemble a source image from already-decoded parts.
    pub fn new(
        name: impl Into<String>,
        declared_mime: impl Into<String>,
        original_bytes: Vec<u8>,
        raster: RgbaRaster,
    ) -> Self {
        Self {
            name: name.into(),
            declared_mime: declared_mime.into(),
            original_bytes,
            raster,
        }
    }

    /// File name as selected by the user.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type reported at ingestion (may be empty).
    pub fn declared_mime(&self) -> &str {
        &self.declared_mime
    }

    /// The original encoded file bytes.
    pub fn original_bytes(&self) -> &[u8] {
        &self.original_bytes
    }

    /// Size of the original encoded file in bytes.
    pub fn original_byte_size(&self) -> usize {
        self.original_bytes.len()
    }

    /// The decoded RGBA raster.
    pub fn raster(&self) -> &RgbaRaster {
        &self.raster
    }

    pub fn width(&self) -> u32 {
        self.raster.width
    }

    pub fn height(&self) -> u32 {
        self.raster.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_raster_filled() {
        let raster = RgbaRaster::filled(3, 2, [10, 20, 30, 255]);
        assert_eq!((raster.width, raster.height), (3, 2));
        assert_eq!(raster.pixels.len(), 24);
        assert_eq!(&raster.pixels[20..24], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_opaque_raster_has_no_transparency() {
        let raster = RgbaRaster::filled(8, 8, [0, 0, 0, 255]);
        assert!(!raster.has_transparency());
    }

    #[test]
    fn test_single_translucent_pixel_is_transparency() {
        let mut raster = RgbaRaster::filled(8, 8, [0, 0, 0, 255]);
        let last = raster.pixels.len() - 1;
        raster.pixels[last] = 254;
        assert!(raster.has_transparency());
    }

    #[test]
    fn test_source_image_accessors() {
        let raster = RgbaRaster::filled(4, 2, [0, 0, 0, 255]);
        let source = SourceImage::new("a.png", "image/png", vec![0u8; 123], raster);
        assert_eq!(source.name(), "a.png");
        assert_eq!(source.declared_mime(), "image/png");
        assert_eq!(source.original_byte_size(), 123);
        assert_eq!((source.width(), source.height()), (4, 2));
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("truncated".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image file: truncated");

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
