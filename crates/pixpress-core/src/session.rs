//! A batch of images and their compression results.
//!
//! The session owns the pending images and the latest results. The UI drives
//! it with commands (`add`, `remove`, `compress_all`, `downloads`) instead of
//! sharing mutable lists.
//!
//! Each image is compressed independently: a codec failure on one image is
//! recorded and the rest of the batch continues.

use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::{ImageCodec, RasterCodec};
use crate::compress::{compress, CompressionOutcome};
use crate::config::CompressionConfig;
use crate::decode::{is_image_mime, sniff_mime, SourceImage};
use crate::error::{CodecError, IngestError};
use crate::report::{compressed_file_name, CompressionReport};

/// Identifier of an image within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ImageId(u32);

impl ImageId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ImageId {
    fn from(value: u32) -> Self {
        ImageId(value)
    }
}

/// A successfully compressed image.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    pub id: ImageId,
    pub name: String,
    pub outcome: CompressionOutcome,
}

impl CompressedImage {
    /// File name to offer the download under.
    pub fn download_name(&self) -> String {
        compressed_file_name(&self.name)
    }

    pub fn report(&self) -> CompressionReport {
        CompressionReport::new(&self.name, &self.outcome)
    }
}

/// An image the batch could not compress.
#[derive(Debug)]
pub struct BatchFailure {
    pub id: ImageId,
    pub name: String,
    pub error: CodecError,
}

/// Counts from one `compress_all` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub compressed: usize,
    pub failed: usize,
}

/// A file ready to be handed to the browser's download mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download<'a> {
    pub file_name: String,
    pub mime_type: &'a str,
    pub bytes: &'a [u8],
}

/// In-memory collection of pending images plus the latest batch results.
#[derive(Debug)]
pub struct CompressionSession<C = ImageCodec> {
    codec: C,
    next_id: u32,
    images: Vec<(ImageId, SourceImage)>,
    results: Vec<CompressedImage>,
    failures: Vec<BatchFailure>,
}

impl Default for CompressionSession<ImageCodec> {
    fn default() -> Self {
        Self::with_codec(ImageCodec::default())
    }
}

impl CompressionSession<ImageCodec> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: RasterCodec> CompressionSession<C> {
    /// Create a session that decodes and encodes with `codec`.
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            next_id: 1,
            images: Vec::new(),
            results: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Add a file to the batch.
    ///
    /// An empty declared type is replaced by the type sniffed from the bytes.
    ///
    /// # Errors
    ///
    /// `IngestError::NotAnImage` if the type is not `image/*`;
    /// `IngestError::Codec` if the bytes cannot be decoded.
    pub fn add(
        &mut self,
        name: &str,
        declared_mime: &str,
        bytes: Vec<u8>,
    ) -> Result<ImageId, IngestError> {
        let mime = if declared_mime.trim().is_empty() {
            sniff_mime(&bytes).unwrap_or_default()
        } else {
            declared_mime
        };

        if !is_image_mime(mime) {
            return Err(IngestError::NotAnImage {
                name: name.to_string(),
                mime: declared_mime.to_string(),
            });
        }

        let source = self
            .codec
            .load(name, mime, bytes)
            .map_err(|source| IngestError::Codec {
                name: name.to_string(),
                source,
            })?;

        let id = ImageId(self.next_id);
        self.next_id += 1;

        debug!(
            id = id.get(),
            name,
            mime,
            width = source.width(),
            height = source.height(),
            "added image"
        );
        self.images.push((id, source));
        Ok(id)
    }

    /// Remove a pending image. Existing results are left alone.
    ///
    /// Returns false if no image has that id.
    pub fn remove(&mut self, id: ImageId) -> bool {
        let before = self.images.len();
        self.images.retain(|(image_id, _)| *image_id != id);
        self.images.len() != before
    }

    /// Look up a pending image.
    pub fn get(&self, id: ImageId) -> Option<&SourceImage> {
        self.images
            .iter()
            .find(|(image_id, _)| *image_id == id)
            .map(|(_, source)| source)
    }

    /// Pending images in insertion order.
    pub fn images(&self) -> impl Iterator<Item = (ImageId, &SourceImage)> {
        self.images.iter().map(|(id, source)| (*id, source))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether there is anything to compress.
    pub fn can_compress(&self) -> bool {
        !self.images.is_empty()
    }

    /// Whether there is anything to download.
    pub fn can_download(&self) -> bool {
        !self.results.is_empty()
    }

    /// Compress every pending image with `config`, replacing previous results.
    pub fn compress_all(&mut self, config: &CompressionConfig) -> BatchSummary {
        self.clear_results();

        for (id, source) in &self.images {
            match compress(&self.codec, source, config) {
                Ok(outcome) => self.results.push(CompressedImage {
                    id: *id,
                    name: source.name().to_string(),
                    outcome,
                }),
                Err(error) => {
                    warn!(id = id.get(), name = source.name(), %error, "failed to compress image");
                    self.failures.push(BatchFailure {
                        id: *id,
                        name: source.name().to_string(),
                        error,
                    });
                }
            }
        }

        BatchSummary {
            compressed: self.results.len(),
            failed: self.failures.len(),
        }
    }

    /// Results of the last batch, in insertion order.
    pub fn results(&self) -> &[CompressedImage] {
        &self.results
    }

    /// Images that failed in the last batch.
    pub fn failures(&self) -> &[BatchFailure] {
        &self.failures
    }

    /// Reports for every result of the last batch.
    pub fn reports(&self) -> Vec<CompressionReport> {
        self.results.iter().map(CompressedImage::report).collect()
    }

    /// Every result as a named download.
    pub fn downloads(&self) -> Vec<Download<'_>> {
        self.results
            .iter()
            .map(|result| Download {
                file_name: result.download_name(),
                mime_type: result.outcome.mime_type(),
                bytes: result.outcome.bytes(),
            })
            .collect()
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
        self.failures.clear();
    }
}
