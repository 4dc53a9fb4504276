//! Content and extension hints for uploaded attachments.
//!
//! Uses `infer` for content-based detection and `mime_guess` for
//! extension-based hints. The hints exist for operators reading logs;
//! neither the upload gate nor the verdict engine consults them, and the
//! stamped attachment MIME is never corrected from here.

use std::path::Path;

use tracing::debug;

use crate::core::attachment::UploadedAttachment;

/// Best-effort type hints for one attachment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SniffReport {
    /// MIME detected from payload magic bytes, if any.
    pub content_mime: Option<String>,
    /// Short label from content detection, e.g. `png`.
    pub content_label: Option<String>,
    /// MIME guessed from the declared filename's extension, if any.
    pub extension_mime: Option<String>,
    /// True when both hints are present and disagree.
    pub mismatch: bool,
}

impl SniffReport {
    /// True when content detection recognized some kind of image.
    pub fn looks_like_image(&self) -> bool {
        self.content_mime
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"))
    }
}

/// Sniff an attachment's payload and declared name.
pub fn sniff(attachment: &UploadedAttachment) -> SniffReport {
    let detected = infer::get(attachment.bytes());
    let content_mime = detected.map(|kind| kind.mime_type().to_string());
    let content_label = detected.map(|kind| kind.extension().to_string());

    let extension_mime = attachment
        .declared_name()
        .and_then(|name| Path::new(name).extension())
        .and_then(|extension| extension.to_str())
        .and_then(|extension| mime_guess::from_ext(extension).first())
        .map(|mime| mime.to_string());

    let mismatch = matches!(
        (&content_mime, &extension_mime),
        (Some(content), Some(extension)) if content != extension
    );

    match detected {
        Some(kind) => debug!(
            mime = kind.mime_type(),
            label = kind.extension(),
            mismatch,
            "content type detected"
        ),
        None => debug!(size = attachment.size(), "no content type detected"),
    }

    SniffReport {
        content_mime,
        content_label,
        extension_mime,
        mismatch,
    }
}
