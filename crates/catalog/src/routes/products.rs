//! Product route handlers.

use axum::{Json, extract::State};
use tinyshop_core::Product;

use crate::state::AppState;

/// List every product in the catalog.
///
/// No pagination, filtering, or query parameters: the response is always the
/// full collection in declaration order.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.catalog().products().to_vec();
    tracing::debug!(count = products.len(), "Listing products");
    Json(products)
}
