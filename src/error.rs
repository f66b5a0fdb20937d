//! Error types for the pdf2images library.
//!
//! The pipeline has a single fatal error type, [`ConvertError`]: a request
//! either yields every page or fails as a whole. There is deliberately no
//! per-page partial-success channel — the HTTP contract returns the full
//! ordered array or an error, never a subset.
//!
//! The HTTP boundary wraps this type in `server::ApiError`, which is where
//! the validation-vs-processing split (400 vs 500) lives.

use thiserror::Error;

/// All fatal errors returned by the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── PDF errors ────────────────────────────────────────────────────────
    /// The byte buffer could not be parsed as a PDF (bad header, truncated
    /// xref, zero bytes, …).
    #[error("document could not be opened as a PDF: {detail}")]
    CorruptPdf { detail: String },

    /// The document is encrypted. No password channel exists in the API, so
    /// this is always fatal.
    #[error("document is password-protected")]
    PasswordProtected,

    /// pdfium returned an error while rendering a specific page.
    #[error("rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    /// PNG encoding of a rendered page failed.
    #[error("PNG encoding failed for page {page}: {source}")]
    EncodingFailed {
        page: usize,
        #[source]
        source: image::ImageError,
    },

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium shared library.
    #[error(
        "failed to bind to pdfium library: {0}\n\
Place libpdfium next to the binary, or install it system-wide.\n\
An existing copy can be pointed at with the loader search path\n\
(LD_LIBRARY_PATH / DYLD_LIBRARY_PATH)."
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error (e.g. the blocking render task panicked).
    #[error("internal error: {0}")]
    Internal(String),
}
