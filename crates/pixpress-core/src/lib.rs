//! Pixpress Core - image compression library
//!
//! This crate provides the core functionality for Pixpress: decoding
//! user-selected images, deciding how each one should be compressed
//! (resize, output format, keep-or-revert), encoding the result, and
//! reporting the savings.
//!
//! # Example
//!
//! ```ignore
//! use pixpress_core::{CompressionConfig, CompressionSession};
//!
//! let mut session = CompressionSession::new();
//! session.add("photo.png", "image/png", std::fs::read("photo.png")?)?;
//!
//! let config = CompressionConfig::from_percent(80, 1920)?;
//! session.compress_all(&config);
//! for report in session.reports() {
//!     println!("{}: {}", report.download_name, report.message);
//! }
//! ```

pub mod codec;
pub mod compress;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod report;
pub mod session;
pub mod size;

pub use codec::{ImageCodec, RasterCodec};
pub use compress::{choose_format, compress, CompressionOutcome};
pub use config::{CompressionConfig, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY_PERCENT};
pub use decode::{RgbaRaster, SourceImage};
pub use encode::OutputFormat;
pub use error::{CodecError, ConfigError, IngestError};
pub use report::{compressed_file_name, format_size, CompressionReport, Savings};
pub use session::{BatchSummary, CompressionSession, Download, ImageId};
