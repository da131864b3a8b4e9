//! Result reporting for the UI: savings, human-readable sizes and download
//! names.

use std::fmt;

use serde::Serialize;

use crate::compress::CompressionOutcome;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Derive the download name for a compressed file.
///
/// `-compressed` is inserted before the last extension, or appended when the
/// name has none: `photo.png` becomes `photo-compressed.png`, `IMG` becomes
/// `IMG-compressed`.
pub fn compressed_file_name(original: &str) -> String {
    match original.rfind('.') {
        Some(dot) => format!("{}-compressed{}", &original[..dot], &original[dot..]),
        None => format!("{original}-compressed"),
    }
}

/// Format a byte count with binary (1024) units and up to two decimals.
///
/// `0` is `"0 Bytes"`, `1536` is `"1.5 KB"`. Units stop at GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Percentage of the original size saved, rounded to the nearest integer
/// (halves toward positive infinity). Negative when the output grew.
///
/// Returns 0 for an empty original.
pub fn savings_percent(original: usize, compressed: usize) -> i64 {
    if original == 0 {
        return 0;
    }
    let ratio = compressed as f64 / original as f64;
    ((1.0 - ratio) * 100.0 + 0.5).floor() as i64
}

/// How a result should be described to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Savings {
    /// The original file was kept.
    NoCompression,
    /// Nothing was saved but the image was resized.
    ResizedOnly { width: u32, height: u32 },
    /// The output is smaller by `percent`.
    Saved { percent: i64 },
}

impl Savings {
    pub fn for_outcome(outcome: &CompressionOutcome) -> Self {
        if outcome.used_original() {
            return Savings::NoCompression;
        }

        let percent = savings_percent(outcome.original_byte_size(), outcome.byte_size());
        if percent <= 0 {
            Savings::ResizedOnly {
                width: outcome.width(),
                height: outcome.height(),
            }
        } else {
            Savings::Saved { percent }
        }
    }
}

impl fmt::Display for Savings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Savings::NoCompression => {
                f.write_str("No compression applied (original was already optimized)")
            }
            Savings::ResizedOnly { width, height } => write!(
                f,
                "Size remained the same but dimensions were adjusted to {width}x{height}px"
            ),
            Savings::Saved { percent } => write!(f, "Saved {percent}% of original size"),
        }
    }
}

/// Everything the result list shows for one compressed image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionReport {
    pub name: String,
    pub download_name: String,
    pub mime_type: String,
    pub original_size: usize,
    pub compressed_size: usize,
    pub original_size_label: String,
    pub compressed_size_label: String,
    pub width: u32,
    pub height: u32,
    pub savings: Savings,
    pub message: String,
}

impl CompressionReport {
    pub fn new(name: &str, outcome: &CompressionOutcome) -> Self {
        let savings = Savings::for_outcome(outcome);
        Self {
            name: name.to_string(),
            download_name: compressed_file_name(name),
            mime_type: outcome.mime_type().to_string(),
            original_size: outcome.original_byte_size(),
            compressed_size: outcome.byte_size(),
            original_size_label: format_size(outcome.original_byte_size() as u64),
            compressed_size_label: format_size(outcome.byte_size() as u64),
            width: outcome.width(),
            height: outcome.height(),
            savings,
            message: savings.to_string(),
        }
    }
}
