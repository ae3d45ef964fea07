//! Product model (catalog item)

use serde::{Deserialize, Serialize};

/// Stable product identifier, assigned by the external catalog.
pub type ProductId = i64;

/// A selectable menu ingredient
///
/// Owned and mutated only by the external catalog; immutable from the
/// core's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Category name, one of a small open set ("Carnes", "Salsas", ...)
    pub category: String,
    /// Price in the smallest currency unit (whole pesos), non-negative
    pub price: i64,
    /// Availability flag toggled by the owner panel
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_available() -> bool {
    true
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, category: impl Into<String>, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            available: true,
            image: None,
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_defaults_to_true() {
        let p: Product =
            serde_json::from_str(r#"{"id":1,"name":"Bife","category":"Carnes","price":3000}"#)
                .unwrap();
        assert!(p.available);
        assert_eq!(p.price, 3000);
    }
}
