//! Integration tests for tinyshop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tinyshop-integration-tests
//! ```
//!
//! No external services are needed: each test starts its own catalog server
//! on an ephemeral localhost port.
//!
//! # Test Categories
//!
//! - `catalog_api` - the HTTP contract of `GET /products`
//! - `webapp_session` - the web app against a live catalog service

use std::net::SocketAddr;

use tinyshop_catalog::{AppState, Catalog};
use tinyshop_core::Product;
use url::Url;

/// A catalog service running in the background for the duration of a test.
pub struct TestCatalog {
    pub addr: SocketAddr,
}

impl TestCatalog {
    /// Start a catalog service with the built-in product list.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn seeded() -> Self {
        Self::start(Catalog::seeded()).await
    }

    /// Start a catalog service serving `products`.
    ///
    /// # Panics
    ///
    /// Panics if the products repeat an id or no local port can be bound.
    pub async fn with_products(products: Vec<Product>) -> Self {
        Self::start(Catalog::new(products).expect("valid test catalog")).await
    }

    async fn start(catalog: Catalog) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener has an address");

        let app = tinyshop_catalog::app(AppState::new(catalog));

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("catalog server error");
        });

        Self { addr }
    }

    /// Base URL the web app should be configured with.
    ///
    /// # Panics
    ///
    /// Never in practice; the address always forms a valid URL.
    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).expect("valid base URL")
    }

    /// Full URL of `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// A base URL where nothing is listening.
///
/// # Panics
///
/// Panics if no local port can be bound.
pub async fn unreachable_base_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("listener has an address");
    drop(listener);

    Url::parse(&format!("http://{addr}")).expect("valid base URL")
}
