//! Configuration types.
//!
//! Rendering behaviour is controlled through [`ConvertConfig`]; the HTTP
//! callers cannot influence it — the endpoint deliberately exposes no page
//! range or resolution options, so every knob here is a server-side default.
//! [`ServerConfig`] carries the deployment-level settings (bind address,
//! upload size bound).

use serde::{Deserialize, Serialize};

/// Default TCP port, matching the service's historical bind.
pub const DEFAULT_PORT: u16 = 8000;

/// Default upper bound on an accepted upload body, in bytes (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Configuration for a PDF-to-images conversion.
///
/// Built via [`ConvertConfig::builder()`] or [`ConvertConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2images::ConvertConfig;
///
/// let config = ConvertConfig::builder()
///     .max_rendered_pixels(1600)
///     .build();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Maximum rendered image dimension (width or height) in pixels. Default: 2000.
    ///
    /// A page is rendered at its natural aspect ratio with either dimension
    /// capped here. Without the cap, an A0 poster page would allocate a
    /// five-figure-pixel bitmap and exhaust memory on a busy server.
    pub max_rendered_pixels: u32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            max_rendered_pixels: 2000,
        }
    }
}

impl ConvertConfig {
    /// Create a new builder for `ConvertConfig`.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConvertConfig`].
#[derive(Debug)]
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    pub fn max_rendered_pixels(mut self, px: u32) -> Self {
        self.config.max_rendered_pixels = px.max(100);
        self
    }

    pub fn build(self) -> ConvertConfig {
        self.config
    }
}

/// Deployment settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind. Default: 0.0.0.0 (all interfaces).
    pub host: String,
    /// TCP port. Default: [`DEFAULT_PORT`], overridable via `PORT`.
    pub port: u16,
    /// Largest accepted request body in bytes.
    pub max_upload_bytes: usize,
    /// Rendering defaults applied to every request.
    pub convert: ConvertConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            convert: ConvertConfig::default(),
        }
    }
}
