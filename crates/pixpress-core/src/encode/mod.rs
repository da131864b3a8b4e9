//! Image encoding pipeline for Pixpress.
//!
//! This module provides functionality for:
//! - Encoding RGBA rasters to JPEG with configurable quality
//! - Encoding RGBA rasters to PNG, preserving transparency
//! - Encoding RGBA rasters to WebP with a quality-driven colour quantizer
//!
//! All encoders take RGBA input (4 bytes per pixel, row-major) and validate
//! the buffer length before encoding.

mod jpeg;
mod png;
mod types;
mod webp;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::{quality_to_percent, EncodeError, OutputFormat};
pub use webp::encode_webp;
