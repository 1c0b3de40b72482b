//! Plain-text download of generated documents.

use axum::Form;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::debug;

use crate::download::DownloadKind;

#[derive(Deserialize)]
pub struct DownloadForm {
    kind: DownloadKind,
    #[serde(default)]
    label: String,
    #[serde(default)]
    content: String,
}

/// POST /download
pub async fn download(Form(form): Form<DownloadForm>) -> Response {
    let file_name = form.kind.file_name(form.label.trim());
    debug!(file_name = %file_name, "Serving download");

    (
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, content_disposition(&file_name)),
        ],
        normalize_newlines(&form.content),
    )
        .into_response()
}

/// Browsers submit form values with CRLF line breaks; the generated text uses LF.
fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n")
}

/// `attachment; filename="..."`, dropping characters a quoted header value
/// cannot carry.
fn content_disposition(file_name: &str) -> HeaderValue {
    let safe: String = file_name
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .filter(|c| *c != '"' && *c != '\\')
        .collect();
    HeaderValue::from_str(&format!("attachment; filename=\"{safe}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
