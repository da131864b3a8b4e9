//! Presentation helper bindings.
//!
//! Small formatting helpers the result list uses, exposed so the page and the
//! core agree on names and sizes.

use pixpress_core::{report, size};
use wasm_bindgen::prelude::*;

/// Derive the download name for a compressed file.
///
/// `"photo.png"` becomes `"photo-compressed.png"`; `"IMG"` becomes
/// `"IMG-compressed"`.
#[wasm_bindgen]
pub fn compressed_file_name(name: &str) -> String {
    report::compressed_file_name(name)
}

/// Format a byte count for display, e.g. `1536` as `"1.5 KB"`.
///
/// Negative and non-finite inputs are treated as zero.
#[wasm_bindgen]
pub fn format_size(bytes: f64) -> String {
    let bytes = if bytes.is_finite() && bytes > 0.0 {
        bytes as u64
    } else {
        0
    };
    report::format_size(bytes)
}

/// Percentage saved, rounded; negative when the output grew.
#[wasm_bindgen]
pub fn savings_percent(original: usize, compressed: usize) -> i32 {
    report::savings_percent(original, compressed) as i32
}

/// Build a `data:` URL from a MIME type and bytes.
#[wasm_bindgen]
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    size::to_data_url(mime, bytes)
}

/// Estimate the binary size of a `data:` URL payload.
///
/// Returns `undefined` if the string has no payload.
#[wasm_bindgen]
pub fn estimate_data_url_size(url: &str) -> Option<u32> {
    size::data_url_byte_size(url).and_then(|n| u32::try_from(n).ok())
}
