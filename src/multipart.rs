//! Hand-rolled `multipart/form-data` extraction.
//!
//! This is deliberately not a general multipart parser. It does exactly one
//! job: pull the `image` field's payload and declared filename out of a raw
//! request body, byte-for-byte, the way the upload endpoint needs them. The
//! body is split at every occurrence of the boundary delimiter, each segment
//! is inspected for a `name="image"` part, and the first match wins. Every
//! malformed input degrades to `None`; nothing in here panics on hostile
//! bytes.

use bytes::Bytes;
use memchr::{memchr, memmem};

use crate::core::attachment::UploadedAttachment;

/// Separator between a part's header block and its payload.
const HEADER_SEPARATOR: &[u8] = b"\r\n\r\n";
/// Marker identifying the form field this extractor cares about. The
/// closing quote is part of the needle, so `name="imagefile"` does not
/// match.
const IMAGE_FIELD_MARKER: &[u8] = b"name=\"image\"";
/// Prefix of the filename attribute inside `Content-Disposition`.
const FILENAME_PREFIX: &[u8] = b"filename=\"";

/// Pull the `image` part out of `body`, if one exists.
///
/// `content_type` must carry a `boundary=` parameter; the token is taken
/// verbatim up to the next `;`, with no unquoting, and prefixed with `--`
/// to form the delimiter. The returned attachment is always stamped
/// `image/jpeg` regardless of payload contents.
pub fn extract_image(body: &[u8], content_type: &str) -> Option<UploadedAttachment> {
    let token = boundary_token(content_type)?;
    let delimiter = format!("--{token}").into_bytes();
    let finder = memmem::Finder::new(&delimiter);

    // Walk the segments between delimiter occurrences, preamble and
    // epilogue included, and take the first one that parses as the image
    // part.
    let mut cursor = 0usize;
    loop {
        let segment_end = match finder.find(&body[cursor..]) {
            Some(offset) => cursor + offset,
            None => body.len(),
        };
        if let Some(attachment) = image_part(&body[cursor..segment_end]) {
            return Some(attachment);
        }
        if segment_end == body.len() {
            return None;
        }
        cursor = segment_end + delimiter.len();
    }
}

/// Boundary token from a `Content-Type` header value.
///
/// Case-sensitive, first `boundary=` wins, token runs to the next `;` or
/// the end of the value. An empty token is treated as absent.
fn boundary_token(content_type: &str) -> Option<&str> {
    let start = content_type.find("boundary=")? + "boundary=".len();
    let rest = &content_type[start..];
    let token = match rest.find(';') {
        Some(end) => &rest[..end],
        None => rest,
    };
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Interpret one delimiter-bounded segment as the image part.
///
/// A segment qualifies only if it has a header separator and its header
/// block names the `image` field. The payload is everything after the
/// separator, minus the single CRLF the multipart framing appends before
/// the next delimiter.
fn image_part(segment: &[u8]) -> Option<UploadedAttachment> {
    let sep = memmem::find(segment, HEADER_SEPARATOR)?;
    let headers = &segment[..sep];
    memmem::find(headers, IMAGE_FIELD_MARKER)?;

    let payload = &segment[sep + HEADER_SEPARATOR.len()..];
    let payload = payload.strip_suffix(b"\r\n").unwrap_or(payload);

    Some(UploadedAttachment::new(
        Bytes::copy_from_slice(payload),
        filename_in(headers),
    ))
}

/// Declared filename from a part's header block.
///
/// Mirrors a `filename="([^"]+)"` capture: the quote must close and the
/// capture must be non-empty, otherwise the part counts as unnamed.
fn filename_in(headers: &[u8]) -> Option<String> {
    let start = memmem::find(headers, FILENAME_PREFIX)? + FILENAME_PREFIX.len();
    let rest = &headers[start..];
    let end = memchr(b'"', rest)?;
    if end == 0 {
        return None;
    }
    Some(String::from_utf8_lossy(&rest[..end]).into_owned())
}
