//! Uploaded attachment extracted at the request boundary.

use bytes::Bytes;

/// MIME type stamped on every extracted attachment.
///
/// The extractor performs no content sniffing, so this value is fixed
/// regardless of what the payload actually contains. Downstream code must
/// not treat it as real type detection; it exists only to satisfy the
/// `image/` gate.
pub const STAMPED_MIME: &str = "image/jpeg";

/// Filename substituted when a part declares none.
pub const DEFAULT_FILENAME: &str = "upload.jpg";

/// A single binary attachment pulled out of a `multipart/form-data` body.
///
/// Request-scoped: constructed once by the extractor, never mutated, and
/// dropped when the request flow completes. The payload length is always
/// read through [`UploadedAttachment::size`]; no separate length field can
/// drift out of sync with the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAttachment {
    bytes: Bytes,
    declared_name: Option<String>,
    declared_mime: String,
}

impl UploadedAttachment {
    /// Build an attachment the way the extractor does: stamped MIME type,
    /// filename exactly as declared (or absent).
    pub fn new(bytes: Bytes, declared_name: Option<String>) -> Self {
        Self {
            bytes,
            declared_name,
            declared_mime: STAMPED_MIME.to_string(),
        }
    }

    /// Build an attachment with an explicit MIME type.
    ///
    /// The extractor never produces anything but [`STAMPED_MIME`]; this
    /// constructor exists so the non-image gate path stays exercisable.
    pub fn with_mime(
        bytes: Bytes,
        declared_name: Option<String>,
        declared_mime: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            declared_name,
            declared_mime: declared_mime.into(),
        }
    }

    /// Raw payload bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Filename taken from the part's `Content-Disposition`, if any.
    pub fn declared_name(&self) -> Option<&str> {
        self.declared_name.as_deref()
    }

    /// Filename used for scoring: the declared name, or the fixed default
    /// when the part declared none.
    pub fn effective_name(&self) -> &str {
        self.declared_name.as_deref().unwrap_or(DEFAULT_FILENAME)
    }

    /// Declared MIME type as stamped by the extractor.
    pub fn declared_mime(&self) -> &str {
        &self.declared_mime
    }

    /// Byte length of the payload.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
