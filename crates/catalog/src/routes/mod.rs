//! HTTP route handlers for the catalog service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /products               - Full product list as JSON
//! ```
//!
//! Every other path answers 404, and any method other than GET on a known
//! path answers 405.

pub mod products;

use axum::{
    Router,
    http::{Method, Uri},
    routing::get,
};

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes for the catalog service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/products", get(products::index))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{method} {}", uri.path()))
}
