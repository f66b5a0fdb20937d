//! HTTP boundary error type.
//!
//! Exactly two user-visible failure kinds exist:
//!
//! * **Validation** (400) — the request itself is wrong: the upload is not
//!   declared as a PDF, or no file field was sent. Detected before any
//!   rasterisation work and never logged as a failure.
//! * **Processing** (500) — anything that goes wrong after validation:
//!   reading the upload body, rasterising, or encoding. The underlying
//!   error text is included in the response and logged before the response
//!   is produced.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::ConvertError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Upload's declared media type is not `application/pdf`.
    #[error("File must be a PDF")]
    NotAPdf,

    /// The multipart form contained no file field.
    #[error("No file provided in upload")]
    MissingFile,

    /// Reading the upload body failed mid-request.
    #[error("upload read failed: {0}")]
    UploadRead(String),

    /// The conversion pipeline failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::NotAPdf => (StatusCode::BAD_REQUEST, "File must be a PDF".to_string()),
            ApiError::MissingFile => (
                StatusCode::BAD_REQUEST,
                "No file provided in upload".to_string(),
            ),
            ApiError::UploadRead(e) => {
                tracing::error!("Upload read failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to process PDF: {}", e),
                )
            }
            ApiError::Convert(e) => {
                tracing::error!("Conversion failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to process PDF: {}", e),
                )
            }
        };

        let body = Json(json!({ "detail": detail }));

        (status, body).into_response()
    }
}
