//! End-to-end conversion entry point.
//!
//! Takes the raw upload buffer through both pipeline stages and returns the
//! ordered list of base64 PNG strings. All-or-nothing: the first failing
//! page aborts the whole conversion, so a response never contains a subset
//! of a document's pages.

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::pipeline::{encode, render};
use std::time::Instant;
use tracing::{debug, info};

/// Convert a PDF byte buffer into one base64-encoded PNG per page.
///
/// The returned vector's length and order exactly match the document's
/// page count and page order.
///
/// # Errors
/// Returns `Err(ConvertError)` when the buffer is not a parseable PDF,
/// the document is encrypted, any page fails to render or encode, or no
/// pdfium library can be bound.
pub async fn convert_bytes(
    pdf_bytes: &[u8],
    config: &ConvertConfig,
) -> Result<Vec<String>, ConvertError> {
    let total_start = Instant::now();

    // ── Step 1: Rasterise pages ──────────────────────────────────────────
    let render_start = Instant::now();
    let rendered = render::render_pages(pdf_bytes, config).await?;
    info!(
        "Rendered {} pages in {}ms",
        rendered.len(),
        render_start.elapsed().as_millis()
    );

    // ── Step 2: Encode images to base64 PNG ──────────────────────────────
    let mut encoded = Vec::with_capacity(rendered.len());
    for (idx, img) in rendered.iter().enumerate() {
        let b64 = encode::encode_page(img).map_err(|source| ConvertError::EncodingFailed {
            page: idx + 1,
            source,
        })?;
        encoded.push(b64);
    }

    debug!(
        "Encoded {} pages, sizes: {:?} bytes",
        encoded.len(),
        encoded.iter().map(|s| s.len()).collect::<Vec<_>>()
    );
    info!(
        "Conversion complete: {} pages, {}ms total",
        encoded.len(),
        total_start.elapsed().as_millis()
    );

    Ok(encoded)
}
