//! Request handlers.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::convert::convert_bytes;
use crate::server::error::ApiError;
use crate::server::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "pdf2images",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: POST /pdf-to-images/
///
/// Accepts a multipart form with one file field, validates its declared
/// content type, and returns every page of the document as a base64 PNG.
/// The content-type check happens before the body is read, so a mislabelled
/// upload is rejected without buffering or rasterising anything.
pub async fn pdf_to_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<String>>, ApiError> {
    // First field carrying a file (or explicitly named "file") is the upload;
    // anything else in the form is ignored.
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::UploadRead(e.to_string()))?
    {
        let is_file = field.file_name().is_some() || field.name() == Some("file");
        if !is_file {
            continue;
        }

        if field.content_type() != Some("application/pdf") {
            return Err(ApiError::NotAPdf);
        }

        let pdf_bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::UploadRead(e.to_string()))?;
        info!("Received PDF upload: {} bytes", pdf_bytes.len());

        let pages = convert_bytes(&pdf_bytes, &state.convert).await?;
        return Ok(Json(pages));
    }

    Err(ApiError::MissingFile)
}
