// POST /upload — rank the terms of an uploaded document.
//
// Accepts a multipart form with a single `file` field. The field's declared
// content type must start with `text/`; anything else is rejected before the
// pipeline runs. The three failure cases each get their own message:
// unreadable form / missing field, non-text content type, and a body over
// the configured size cap (413, enforced by the router's body limit).
//
// An empty or all-separator document is not a failure — it returns 200 with
// an empty term list.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

use crate::analysis::analyze_document;
use crate::web::{api_error, AppState};

const MSG_NO_FILE: &str = "No file was found in the upload";
const MSG_READ_FAILED: &str = "Could not read the uploaded file";
const MSG_NOT_TEXT: &str = "Unsupported file type. Upload a plain-text document (e.g. .txt)";
const MSG_TOO_LARGE: &str = "The uploaded file is too large";

/// POST /upload — run the ranking pipeline on an uploaded text document.
pub async fn upload_document(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // A body that is not multipart at all (missing or bad boundary) never
    // reaches the field loop; it gets the same JSON shape as every other
    // failure instead of the extractor's plain-text rejection.
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Upload body was not a multipart form");
            return api_error(rejection.status(), MSG_READ_FAILED);
        }
    };

    // Walk the form until the `file` field turns up; unrelated fields are
    // skipped without being read.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => break field,
            Ok(Some(_)) => continue,
            Ok(None) => return api_error(StatusCode::BAD_REQUEST, MSG_NO_FILE),
            Err(e) => {
                warn!(error = %e, "Failed to read multipart form");
                return read_error(&e);
            }
        }
    };

    // Content-type gate: only declared-text uploads reach the pipeline.
    let content_type = field.content_type().unwrap_or_default().to_string();
    if !content_type.starts_with("text/") {
        return api_error(StatusCode::UNSUPPORTED_MEDIA_TYPE, MSG_NOT_TEXT);
    }

    let file_name = field.file_name().unwrap_or("document").to_string();

    let bytes = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, file = %file_name, "Failed to read upload body");
            return read_error(&e);
        }
    };

    let analysis = analyze_document(&bytes, &state.tokenizer);

    info!(
        file = %file_name,
        bytes = bytes.len(),
        tokens = analysis.token_count,
        distinct = analysis.distinct_terms,
        "Ranked document"
    );

    Json(serde_json::json!({
        "file_name": file_name,
        "token_count": analysis.token_count,
        "distinct_terms": analysis.distinct_terms,
        "terms": analysis.ranking,
    }))
    .into_response()
}

/// Map a multipart read failure to its JSON error response. The body cap
/// can trip on any read, not just the file field's bytes, so the too-large
/// message is selected by status rather than by call site.
fn read_error(e: &MultipartError) -> Response {
    let message = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        MSG_TOO_LARGE
    } else {
        MSG_READ_FAILED
    };
    api_error(e.status(), message)
}
