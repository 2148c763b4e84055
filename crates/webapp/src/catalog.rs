//! HTTP client for the catalog service.
//!
//! Reads the body as text before decoding so that a non-JSON response is
//! reported as a parse error with a body excerpt in the log, rather than an
//! opaque transport failure.

use reqwest::StatusCode;
use thiserror::Error;
use tinyshop_core::Product;
use tracing::instrument;
use url::Url;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The products URL could not be derived from the base URL.
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request failed (connection refused, reset, DNS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("catalog returned HTTP {0}")]
    Status(StatusCode),

    /// The body was not a JSON array of products.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for `GET /products`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    products_url: Url,
}

impl CatalogClient {
    /// Create a client for the catalog service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if `products` cannot be joined onto
    /// the base URL.
    pub fn new(base_url: &Url) -> Result<Self, CatalogError> {
        Ok(Self {
            client: reqwest::Client::new(),
            products_url: base_url.join("products")?,
        })
    }

    /// The URL the client fetches.
    #[must_use]
    pub const fn products_url(&self) -> &Url {
        &self.products_url
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the
    /// body is not a JSON array of products.
    #[instrument(skip(self), fields(url = %self.products_url))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.client.get(self.products_url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }
}
