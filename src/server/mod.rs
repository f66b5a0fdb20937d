//! HTTP surface: router construction and shared state.
//!
//! The router is built separately from the listener so integration tests
//! can drive it in-process with `tower::ServiceExt::oneshot` instead of
//! binding a socket.

mod error;
mod handlers;

pub use error::ApiError;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{ConvertConfig, ServerConfig};

/// Per-request shared state: the rendering defaults applied to every upload.
#[derive(Clone)]
pub struct AppState {
    pub convert: ConvertConfig,
}

/// Build the application router.
pub fn router(config: &ServerConfig) -> Router {
    let state = AppState {
        convert: config.convert.clone(),
    };

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Conversion endpoint
        .route("/pdf-to-images/", post(handlers::pdf_to_images))
        // Add middleware
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
