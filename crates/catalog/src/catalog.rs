//! In-memory product catalog.
//!
//! The product list is fixed when the service starts and shared read-only by
//! every request handler, so reads never take a lock.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tinyshop_core::{Product, ProductId};

/// Errors that can occur while building the catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// The products file could not be read.
    #[error("failed to read products file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The products file is not a JSON array of products.
    #[error("failed to parse products file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable, cheaply cloneable product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog from products in declaration order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if any id appears more than once.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self {
            products: products.into(),
        })
    }

    /// The built-in product list.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: Arc::from([Product::new(1, "Laptop")]),
        }
    }

    /// Load the product list from a JSON file shaped like the `/products` response.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array of
    /// products, or repeats an id.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: display.clone(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: display,
                source,
            })?;

        Self::new(products)
    }

    /// Every product, in declaration order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
