//! Batch session WASM bindings.
//!
//! The page keeps one `JsCompressionSession` and issues commands against it
//! from its event handlers: add files as they are dropped, remove them from
//! the list, compress the whole batch, then download the results.
//!
//! # Example
//!
//! ```typescript
//! const session = new JsCompressionSession();
//!
//! for (const file of files) {
//!   try {
//!     const id = session.add_image(file.name, file.type, new Uint8Array(await file.arrayBuffer()));
//!     renderPending(id, file);
//!   } catch (err) {
//!     alert(err);
//!   }
//! }
//!
//! const summary = session.compress_all(quality, maxWidth);
//! for (const report of session.reports()) renderResult(report);
//! downloadAll.disabled = !session.can_download;
//! ```

use pixpress_core::{CompressionConfig, CompressionSession};
use wasm_bindgen::prelude::*;

use crate::types::JsCompressionOutcome;

/// A batch of images for JavaScript.
#[wasm_bindgen]
pub struct JsCompressionSession {
    inner: CompressionSession,
}

impl Default for JsCompressionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsCompressionSession {
    /// Create an empty session.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsCompressionSession {
        JsCompressionSession {
            inner: CompressionSession::new(),
        }
    }

    /// Add a file to the batch and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error message for non-image types ("Only image files are
    /// supported!") and for files that cannot be decoded.
    pub fn add_image(&mut self, name: &str, mime: &str, bytes: Vec<u8>) -> Result<u32, JsValue> {
        self.inner
            .add(name, mime, bytes)
            .map(|id| id.get())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Remove a pending image. Returns false if the id is unknown.
    pub fn remove_image(&mut self, id: u32) -> bool {
        self.inner.remove(id.into())
    }

    /// Number of pending images
    #[wasm_bindgen(getter)]
    pub fn image_count(&self) -> usize {
        self.inner.len()
    }

    /// Whether the compress button should be enabled
    #[wasm_bindgen(getter)]
    pub fn can_compress(&self) -> bool {
        self.inner.can_compress()
    }

    /// Whether the download-all button should be enabled
    #[wasm_bindgen(getter)]
    pub fn can_download(&self) -> bool {
        self.inner.can_download()
    }

    /// Compress every pending image.
    ///
    /// Images that fail are skipped (and reported to the console); the rest
    /// of the batch still completes.
    ///
    /// # Returns
    ///
    /// `{ compressed: number, failed: number }`
    pub fn compress_all(&mut self, quality_percent: u8, max_width: u32) -> Result<JsValue, JsValue> {
        let config = CompressionConfig::from_percent(quality_percent, max_width)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.run_batch(&config)
    }

    /// Compress every pending image using a settings object
    /// `{ quality: number, maxWidth: number }` where quality is a fraction.
    pub fn compress_with(&mut self, settings: JsValue) -> Result<JsValue, JsValue> {
        let config: CompressionConfig = serde_wasm_bindgen::from_value(settings)
            .map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))?;
        self.run_batch(&config)
    }

    /// Number of results from the last batch
    #[wasm_bindgen(getter)]
    pub fn result_count(&self) -> usize {
        self.inner.results().len()
    }

    /// Get one result of the last batch by position.
    pub fn result(&self, index: usize) -> Option<JsCompressionOutcome> {
        self.inner
            .results()
            .get(index)
            .map(|r| JsCompressionOutcome::from_outcome(r.outcome.clone()))
    }

    /// Reports for the result list, as an array of plain objects.
    pub fn reports(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.reports())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Every result as `{ fileName, mimeType, bytes }` for bulk download.
    pub fn downloads(&self) -> Result<js_sys::Array, JsValue> {
        let list = js_sys::Array::new();
        for download in self.inner.downloads() {
            let entry = js_sys::Object::new();
            js_sys::Reflect::set(
                &entry,
                &JsValue::from_str("fileName"),
                &JsValue::from_str(&download.file_name),
            )?;
            js_sys::Reflect::set(
                &entry,
                &JsValue::from_str("mimeType"),
                &JsValue::from_str(download.mime_type),
            )?;
            js_sys::Reflect::set(
                &entry,
                &JsValue::from_str("bytes"),
                &js_sys::Uint8Array::from(download.bytes),
            )?;
            list.push(&entry);
        }
        Ok(list)
    }

    /// Drop the results of the last batch.
    pub fn clear_results(&mut self) {
        self.inner.clear_results();
    }
}

impl JsCompressionSession {
    fn run_batch(&mut self, config: &CompressionConfig) -> Result<JsValue, JsValue> {
        let summary = self.inner.compress_all(config);

        for failure in self.inner.failures() {
            report_failure(&format!(
                "Error compressing {}: {}",
                failure.name, failure.error
            ));
        }

        serde_wasm_bindgen::to_value(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
fn report_failure(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

// Console imports only exist in the browser; core already logs via tracing.
#[cfg(not(target_arch = "wasm32"))]
fn report_failure(_message: &str) {}

#[cfg(test)]
mod tests {
    use super::*;
    use pixpress_core::encode::encode_png;

    fn png(width: u32, height: u32) -> Vec<u8> {
        encode_png(&vec![128u8; (width * height * 4) as usize], width, height).unwrap()
    }

    #[test]
    fn test_session_add_and_remove() {
        let mut session = JsCompressionSession::new();
        assert!(!session.can_compress());

        let id = session.add_image("a.png", "image/png", png(4, 4)).ok().unwrap();
        assert_eq!(session.image_count(), 1);
        assert!(session.can_compress());

        assert!(session.remove_image(id));
        assert!(!session.remove_image(id));
        assert_eq!(session.image_count(), 0);
    }

    #[test]
    fn test_session_result_access() {
        let mut session = JsCompressionSession::new();
        session.add_image("b.png", "image/png", png(64, 32)).ok().unwrap();

        let config = CompressionConfig::from_percent(80, 32).unwrap();
        session.inner.compress_all(&config);

        assert_eq!(session.result_count(), 1);
        assert!(session.can_download());
        let outcome = session.result(0).unwrap();
        assert_eq!((outcome.width(), outcome.height()), (32, 16));
        assert!(session.result(1).is_none());

        session.clear_results();
        assert_eq!(session.result_count(), 0);
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use pixpress_core::encode::encode_png;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_rejects_text_file() {
        let mut session = JsCompressionSession::new();
        let err = session
            .add_image("notes.txt", "text/plain", b"hi".to_vec())
            .unwrap_err();
        assert!(err
            .as_string()
            .unwrap()
            .starts_with("Only image files are supported!"));
    }

    #[wasm_bindgen_test]
    fn test_compress_and_download() {
        let mut session = JsCompressionSession::new();
        let png = encode_png(&vec![90u8; 20 * 20 * 4], 20, 20).unwrap();
        session.add_image("tile.png", "image/png", png).unwrap();

        session.compress_all(80, 10).unwrap();
        let downloads = session.downloads().unwrap();
        assert_eq!(downloads.length(), 1);

        let entry = downloads.get(0);
        let name = js_sys::Reflect::get(&entry, &JsValue::from_str("fileName")).unwrap();
        assert_eq!(name.as_string().unwrap(), "tile-compressed.png");
    }

    #[wasm_bindgen_test]
    fn test_compress_all_rejects_zero_width() {
        let mut session = JsCompressionSession::new();
        assert!(session.compress_all(80, 0).is_err());
    }
}
