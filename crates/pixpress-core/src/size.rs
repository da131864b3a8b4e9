//! Byte-size estimation for base64 payloads and data URLs.
//!
//! The browser hands encoded images around as `data:` URLs; the binary size
//! of such a payload is recovered from its base64 length without decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Number of bytes a base64 payload decodes to.
///
/// Computed as `round(len * 3 / 4) - padding`, where padding is the number of
/// trailing `=` characters (at most 2).
pub fn base64_decoded_len(payload: &str) -> usize {
    let padding = if payload.ends_with("==") {
        2
    } else if payload.ends_with('=') {
        1
    } else {
        0
    };

    // round(len * 3 / 4) with halves rounded up
    let raw = (payload.len() * 3 + 2) / 4;
    raw.saturating_sub(padding)
}

/// Build a `data:` URL for the given MIME type and bytes.
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Estimate the binary size carried by a `data:` URL.
///
/// Returns `None` if the URL has no payload separator.
pub fn data_url_byte_size(url: &str) -> Option<usize> {
    url.split_once(',')
        .map(|(_, payload)| base64_decoded_len(payload))
}
