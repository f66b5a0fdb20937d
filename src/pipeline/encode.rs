//! Image encoding: `DynamicImage` → base64-wrapped PNG.
//!
//! PNG is the contract: lossless, so the client can decode the base64
//! string back into the exact bitmap pdfium produced. The base64 standard
//! alphabet keeps the payload embeddable in a JSON array element.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::DynamicImage;
use std::io::Cursor;
use tracing::debug;

/// Encode a rasterised page as a base64 PNG string.
pub fn encode_page(img: &DynamicImage) -> Result<String, image::ImageError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;

    let b64 = STANDARD.encode(&buf);
    debug!("Encoded image → {} bytes base64", b64.len());

    Ok(b64)
}
