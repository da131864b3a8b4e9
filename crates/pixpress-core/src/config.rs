//! Compression settings.
//!
//! The UI exposes quality as an integer percent (0-100) and a maximum width
//! in pixels. Both are validated here, before any image is touched; settings
//! are not persisted.

use serde::{Deserialize, Serialize};

use crate::encode::quality_to_percent;
use crate::error::ConfigError;

/// Default quality shown by the slider.
pub const DEFAULT_QUALITY_PERCENT: u8 = 80;

/// Default maximum output width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 1920;

/// Validated compression settings.
///
/// `quality` is a fraction in (0, 1]; `max_width` is a positive pixel count.
/// Deserialization goes through the same validation as [`CompressionConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ConfigFields")]
pub struct CompressionConfig {
    quality: f32,
    max_width: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFields {
    quality: f32,
    max_width: u32,
}

impl TryFrom<ConfigFields> for CompressionConfig {
    type Error = ConfigError;

    fn try_from(fields: ConfigFields) -> Result<Self, Self::Error> {
        Self::new(fields.quality, fields.max_width)
    }
}

impl CompressionConfig {
    /// Create settings from a quality fraction and a maximum width.
    pub fn new(quality: f32, max_width: u32) -> Result<Self, ConfigError> {
        // NaN fails both comparisons
        if !(quality > 0.0 && quality <= 1.0) {
            return Err(ConfigError::QualityOutOfRange(quality));
        }
        if max_width == 0 {
            return Err(ConfigError::InvalidMaxWidth);
        }
        Ok(Self { quality, max_width })
    }

    /// Create settings from the slider's integer percent.
    pub fn from_percent(quality_percent: u8, max_width: u32) -> Result<Self, ConfigError> {
        Self::new(f32::from(quality_percent) / 100.0, max_width)
    }

    /// Quality as a fraction in (0, 1].
    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Quality mapped onto the 1-100 encoder scale.
    pub fn quality_percent(&self) -> u8 {
        quality_to_percent(self.quality)
    }

    /// Maximum output width in pixels.
    pub fn max_width(&self) -> u32 {
        self.max_width
    }
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            quality: f32::from(DEFAULT_QUALITY_PERCENT) / 100.0,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}
