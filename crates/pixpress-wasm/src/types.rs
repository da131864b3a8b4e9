//! WASM-compatible wrapper types for compression results.
//!
//! This module provides JavaScript-friendly types that wrap the core Pixpress
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use pixpress_core::size::to_data_url;
use pixpress_core::{CompressionOutcome, Savings};
use wasm_bindgen::prelude::*;

/// A compression outcome wrapper for JavaScript.
///
/// # Memory Management
///
/// The encoded bytes are stored in WASM memory. `bytes()` and `data_url()`
/// copy them out to JavaScript; call them once and keep the result.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsCompressionOutcome {
    inner: CompressionOutcome,
}

#[wasm_bindgen]
impl JsCompressionOutcome {
    /// MIME type of the encoded bytes
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    /// Output width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Output height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Size of the encoded bytes
    #[wasm_bindgen(getter)]
    pub fn byte_size(&self) -> usize {
        self.inner.byte_size()
    }

    /// Size of the original file
    #[wasm_bindgen(getter)]
    pub fn original_byte_size(&self) -> usize {
        self.inner.original_byte_size()
    }

    /// Quality fraction applied (1 when the original was kept)
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f32 {
        self.inner.quality()
    }

    #[wasm_bindgen(getter)]
    pub fn was_resized(&self) -> bool {
        self.inner.was_resized()
    }

    /// True when the original file is returned unchanged
    #[wasm_bindgen(getter)]
    pub fn used_original(&self) -> bool {
        self.inner.used_original()
    }

    /// The user-facing savings message.
    pub fn savings_message(&self) -> String {
        Savings::for_outcome(&self.inner).to_string()
    }

    /// Returns the encoded bytes as Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes().to_vec()
    }

    /// Returns the encoded bytes as a `data:` URL, usable as an `<img>` source
    /// or download link.
    pub fn data_url(&self) -> String {
        to_data_url(self.inner.mime_type(), self.inner.bytes())
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsCompressionOutcome {
    pub(crate) fn from_outcome(outcome: CompressionOutcome) -> Self {
        Self { inner: outcome }
    }
}
