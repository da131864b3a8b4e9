//! Decoding of encoded image files into RGBA rasters.
//!
//! The browser draws an image onto a canvas with its EXIF orientation already
//! applied, so decoding does the same before handing the raster on.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, Orientation, RgbaRaster};

/// Decode image bytes (JPEG, PNG, WebP, GIF, BMP) into an RGBA raster,
/// applying EXIF orientation correction.
///
/// The format is detected from the magic bytes, not from a declared type.
///
/// # Errors
///
/// Returns `DecodeError::Empty` for empty input, `DecodeError::InvalidFormat`
/// if the format cannot be recognized, and `DecodeError::CorruptedFile` if
/// the data is truncated or malformed.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaRaster, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    let raster = RgbaRaster::from_rgba_image(oriented.into_rgba8());

    if raster.width == 0 || raster.height == 0 {
        return Err(DecodeError::InvalidDimensions {
            width: raster.width,
            height: raster.height,
        });
    }

    Ok(raster)
}

/// Read the EXIF orientation, `Normal` when there is no EXIF block or tag.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
