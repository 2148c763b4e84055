//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::ProductId;

/// A product as listed by the catalog service.
///
/// Serialized as `{ "id": <integer>, "name": <string> }`. This is the body
/// element of `GET /products` and the type the web app deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
}

impl Product {
    /// Create a product.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(Product::new(1, "Laptop")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Laptop" }));
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": 3, "name": "Mouse", "price": "9.99"}"#).unwrap();
        assert_eq!(product, Product::new(3, "Mouse"));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        assert!(serde_json::from_str::<Product>(r#"{"id": 3}"#).is_err());
    }
}
