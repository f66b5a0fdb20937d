//! Pipeline stages for PDF-to-images conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch rendering backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! bytes ──▶ render ──▶ encode
//! (upload)  (pdfium)   (PNG + base64)
//! ```
//!
//! 1. [`render`] — rasterise every page; runs in `spawn_blocking` because
//!    pdfium is not async-safe
//! 2. [`encode`] — PNG-encode and base64-wrap each `DynamicImage` for the
//!    JSON response body

pub mod encode;
pub mod render;
