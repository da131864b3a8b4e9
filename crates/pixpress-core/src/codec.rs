//! The raster codec used by the compression engine.
//!
//! [`RasterCodec`] is the seam between the decision logic in
//! [`crate::compress`] and the pixel work: decoding files, resizing rasters
//! and encoding them to a target format. [`ImageCodec`] implements it on top
//! of the `image` crate; tests substitute their own implementations to force
//! specific encoder outputs.

use crate::decode::{self, FilterType, RgbaRaster, SourceImage};
use crate::encode::{self, quality_to_percent, OutputFormat};
use crate::error::CodecError;

/// Decode, resize and encode capability required by the engine.
pub trait RasterCodec {
    /// Decode encoded file bytes into an RGBA raster.
    fn decode(&self, bytes: &[u8]) -> Result<RgbaRaster, CodecError>;

    /// Resize a raster to exact dimensions.
    fn resize(&self, raster: &RgbaRaster, width: u32, height: u32)
        -> Result<RgbaRaster, CodecError>;

    /// Encode a raster to `format` at a quality fraction in (0, 1].
    ///
    /// Lossless formats may ignore `quality`.
    fn encode(
        &self,
        raster: &RgbaRaster,
        format: OutputFormat,
        quality: f32,
    ) -> Result<Vec<u8>, CodecError>;

    /// Decode a file and capture it as a [`SourceImage`].
    fn load(
        &self,
        name: &str,
        declared_mime: &str,
        bytes: Vec<u8>,
    ) -> Result<SourceImage, CodecError> {
        let raster = self.decode(&bytes)?;
        Ok(SourceImage::new(name, declared_mime, bytes, raster))
    }
}

impl<C: RasterCodec + ?Sized> RasterCodec for &C {
    fn decode(&self, bytes: &[u8]) -> Result<RgbaRaster, CodecError> {
        (**self).decode(bytes)
    }

    fn resize(
        &self,
        raster: &RgbaRaster,
        width: u32,
        height: u32,
    ) -> Result<RgbaRaster, CodecError> {
        (**self).resize(raster, width, height)
    }

    fn encode(
        &self,
        raster: &RgbaRaster,
        format: OutputFormat,
        quality: f32,
    ) -> Result<Vec<u8>, CodecError> {
        (**self).encode(raster, format, quality)
    }
}

/// [`RasterCodec`] backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageCodec {
    filter: FilterType,
}

impl ImageCodec {
    /// Create a codec with the default (bilinear) resize filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec that resizes with the given filter.
    pub fn with_filter(filter: FilterType) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> FilterType {
        self.filter
    }
}

impl RasterCodec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<RgbaRaster, CodecError> {
        Ok(decode::decode_image(bytes)?)
    }

    fn resize(
        &self,
        raster: &RgbaRaster,
        width: u32,
        height: u32,
    ) -> Result<RgbaRaster, CodecError> {
        Ok(decode::resize(raster, width, height, self.filter)?)
    }

    fn encode(
        &self,
        raster: &RgbaRaster,
        format: OutputFormat,
        quality: f32,
    ) -> Result<Vec<u8>, CodecError> {
        let (pixels, width, height) = (&raster.pixels, raster.width, raster.height);
        let quality = quality_to_percent(quality);

        let bytes = match format {
            OutputFormat::Jpeg => encode::encode_jpeg(pixels, width, height, quality)?,
            OutputFormat::Png => encode::encode_png(pixels, width, height)?,
            OutputFormat::WebP => encode::encode_webp(pixels, width, height, quality)?,
        };
        Ok(bytes)
    }
}
