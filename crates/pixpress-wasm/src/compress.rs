//! One-shot compression WASM binding.
//!
//! # Example
//!
//! ```typescript
//! import { compress_image } from '@pixpress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const outcome = compress_image(file.name, file.type, bytes, 80, 1920);
//! link.href = outcome.data_url();
//! ```

use crate::types::JsCompressionOutcome;
use pixpress_core::{compress, CompressionConfig, ImageCodec, RasterCodec};
use wasm_bindgen::prelude::*;

/// Decode and compress a single image file.
///
/// # Arguments
///
/// * `name` - Original file name
/// * `mime` - Declared MIME type (`file.type`)
/// * `bytes` - The file contents as a `Uint8Array`
/// * `quality_percent` - Quality slider value (1-100)
/// * `max_width` - Maximum output width in pixels
///
/// # Errors
///
/// Returns an error if the settings are invalid or the image cannot be
/// decoded or encoded.
#[wasm_bindgen]
pub fn compress_image(
    name: &str,
    mime: &str,
    bytes: Vec<u8>,
    quality_percent: u8,
    max_width: u32,
) -> Result<JsCompressionOutcome, JsValue> {
    let config = CompressionConfig::from_percent(quality_percent, max_width)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let codec = ImageCodec::new();
    let source = codec
        .load(name, mime, bytes)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    compress(&codec, &source, &config)
        .map(JsCompressionOutcome::from_outcome)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
