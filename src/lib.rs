//! # pdf2images
//!
//! HTTP service that rasterises an uploaded PDF into base64-encoded PNG
//! page images.
//!
//! ## Why this crate?
//!
//! Plenty of downstream systems (vision pipelines, thumbnailers, browser
//! front-ends without a PDF engine) want "the pages of this PDF as plain
//! images" and nothing else. This crate is exactly that integration layer:
//! one endpoint, pdfium behind it, PNG + base64 in front of it.
//!
//! ## Pipeline Overview
//!
//! ```text
//! upload
//!  │
//!  ├─ 1. Validate  declared content type must be application/pdf
//!  ├─ 2. Render    rasterise pages via pdfium (CPU-bound, spawn_blocking)
//!  ├─ 3. Encode    PNG → base64, one string per page, page order kept
//!  └─ 4. Respond   200 + JSON array, or 400/500 with {"detail": …}
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2images::{convert_bytes, ConvertConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = std::fs::read("document.pdf")?;
//!     let pages = convert_bytes(&bytes, &ConvertConfig::default()).await?;
//!     println!("{} pages rendered", pages.len());
//!     Ok(())
//! }
//! ```
//!
//! Or run the server (`pdf2images-server`) and:
//!
//! ```bash
//! curl -F "file=@document.pdf;type=application/pdf" \
//!      http://localhost:8000/pdf-to-images/
//! ```
//!
//! ## Feature Flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `server` | on      | Enables the `pdf2images-server` binary (clap + anyhow + tracing-subscriber + dotenvy) |
//!
//! ## Runtime requirement
//!
//! pdfium is loaded as a shared library at runtime: either place
//! `libpdfium` next to the binary or install it system-wide. Binding
//! failures surface as a 500 response with a remediation hint.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;
pub mod server;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConvertConfig, ConvertConfigBuilder, ServerConfig};
pub use convert::convert_bytes;
pub use error::ConvertError;
pub use server::{router, ApiError};
