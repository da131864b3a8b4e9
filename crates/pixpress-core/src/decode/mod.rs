//! Image decoding pipeline for Pixpress.
//!
//! This module provides functionality for:
//! - Decoding JPEG, PNG, WebP, GIF and BMP files into RGBA rasters
//! - Applying EXIF orientation the way a browser canvas does
//! - Width-bounded, aspect-preserving resizing
//! - MIME type detection and validation for ingestion
//!
//! # Architecture
//!
//! Decoding is a single blocking call that either returns the raster or an
//! explicit error. All operations are synchronous and single-threaded within
//! WASM.

mod load;
mod mime;
mod resize;
mod types;

pub use load::decode_image;
pub use mime::{is_image_mime, normalize_mime, sniff_mime};
pub use resize::{fit_to_width, resize};
pub use types::{DecodeError, FilterType, Orientation, RgbaRaster, SourceImage};
