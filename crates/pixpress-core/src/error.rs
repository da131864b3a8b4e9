//! Error types shared across the crate.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// A failure reported by the raster codec while decoding, resizing or
/// encoding an image.
///
/// The compression engine never fails on its own; this is the only error
/// `compress` can return.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Invalid compression settings, rejected before the engine is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("Quality must be greater than 0 and at most 1, got {0}")]
    QualityOutOfRange(f32),

    #[error("Maximum width must be a positive number of pixels")]
    InvalidMaxWidth,
}

/// Errors raised while adding a file to a session.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The declared type is not an image type.
    #[error("Only image files are supported! '{name}' has type '{mime}'")]
    NotAnImage { name: String, mime: String },

    /// The file claims to be an image but could not be decoded.
    #[error("Failed to load '{name}': {source}")]
    Codec {
        name: String,
        #[source]
        source: CodecError,
    },
}
