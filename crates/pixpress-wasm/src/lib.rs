//! Pixpress WASM - WebAssembly bindings for Pixpress
//!
//! This crate provides WASM bindings to expose the pixpress-core
//! functionality to the browser page.
//!
//! # Module Structure
//!
//! - `session` - The batch object the page issues commands against
//! - `compress` - One-shot compression of a single file
//! - `types` - WASM-compatible wrapper for compression outcomes
//! - `report` - Formatting helpers for the result list
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCompressionSession } from '@pixpress/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsCompressionSession();
//! session.add_image(file.name, file.type, new Uint8Array(await file.arrayBuffer()));
//! session.compress_all(80, 1920);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod report;
mod session;
mod types;

// Re-export public types
pub use compress::compress_image;
pub use report::{
    compressed_file_name, estimate_data_url_size, format_size, savings_percent, to_data_url,
};
pub use session::JsCompressionSession;
pub use types::JsCompressionOutcome;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default quality percent for the slider
#[wasm_bindgen]
pub fn default_quality_percent() -> u8 {
    pixpress_core::DEFAULT_QUALITY_PERCENT
}

/// Default maximum width for the width input
#[wasm_bindgen]
pub fn default_max_width() -> u32 {
    pixpress_core::DEFAULT_MAX_WIDTH
}
