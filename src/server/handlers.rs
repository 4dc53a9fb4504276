//! Request handlers for the analysis API.

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use bytes::Bytes;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::analysis::engine;
use crate::core::attachment::UploadedAttachment;
use crate::core::report::AnalysisReport;
use crate::error::{AnalyzeError, Result};
use crate::multipart;
use crate::server::{AppState, MAX_UPLOAD_BYTES};
use crate::sniff;

/// `POST /api/analyze`: extract the uploaded screenshot and score it.
///
/// The body is consumed raw; multipart interpretation happens in
/// [`multipart::extract_image`], not in an extractor. Rejections map to the
/// fixed JSON error bodies, in gate order: no file, not an image, too
/// large.
pub async fn analyze(headers: HeaderMap, body: Bytes) -> Result<Json<AnalysisReport>> {
    let analysis_id = Uuid::new_v4();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let attachment =
        multipart::extract_image(&body, content_type).ok_or(AnalyzeError::NoFileUploaded)?;
    check_upload(&attachment)?;

    let hints = sniff::sniff(&attachment);
    let file_name = attachment.effective_name().to_string();
    info!(
        %analysis_id,
        file_name = %file_name,
        size = attachment.size(),
        declared_mime = attachment.declared_mime(),
        content_hint = hints.content_mime.as_deref().unwrap_or("unknown"),
        "analyzing upload"
    );

    let report = engine::analyze(&file_name, attachment.size());
    info!(
        %analysis_id,
        verdict = %report.verdict,
        confidence = report.confidence,
        findings = report.findings.len(),
        "analysis finished"
    );

    Ok(Json(report))
}

/// `GET /api/ping`: liveness probe with the configured message.
pub async fn ping(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "message": state.config.ping_message }))
}

/// Admission gate for extracted attachments.
///
/// The MIME arm cannot fire for attachments built by the extractor, which
/// stamps every part `image/jpeg`; it stays because the rejection is part
/// of the wire contract.
fn check_upload(attachment: &UploadedAttachment) -> Result<()> {
    if !attachment.declared_mime().starts_with("image/") {
        return Err(AnalyzeError::NotAnImage);
    }
    if attachment.size() > MAX_UPLOAD_BYTES {
        return Err(AnalyzeError::FileTooLarge);
    }
    Ok(())
}
