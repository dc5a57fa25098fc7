//! Sample catalog entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A product with a display name and a unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Creates a new product.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Hashable identity matching `PartialEq`: name plus the exact price bits.
    pub fn identity_key(&self) -> (String, u64) {
        (self.name.clone(), self.price.to_bits())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product [name = {}, price = {:.2}]", self.name, self.price)
    }
}

/// The reference catalog used by the demonstration.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Tv", 1200.00),
        Product::new("Radio", 20.60),
        Product::new("Mouse", 40.50),
        Product::new("Keyboard", 80.90),
        Product::new("Microphone", 200.00),
        Product::new("Notebook", 800.00),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        let product = Product::new("Radio", 20.6);
        assert_eq!(product.to_string(), "Product [name = Radio, price = 20.60]");
    }

    #[test]
    fn equality_compares_name_and_price() {
        assert_eq!(Product::new("Tv", 1.0), Product::new("Tv", 1.0));
        assert_ne!(Product::new("Tv", 1.0), Product::new("Tv", 2.0));
        assert_ne!(Product::new("Tv", 1.0), Product::new("Pc", 1.0));
    }

    #[test]
    fn identity_key_follows_equality() {
        let tv = Product::new("Tv", 1200.0);
        assert_eq!(tv.identity_key(), tv.clone().identity_key());
        assert_ne!(tv.identity_key(), Product::new("Tv", 1200.5).identity_key());
    }

    #[test]
    fn serialization_roundtrip() {
        let product = Product::new("Mouse", 40.5);
        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, deserialized);
    }

    #[test]
    fn sample_catalog_has_six_products() {
        let products = sample_products();
        assert_eq!(products.len(), 6);
        assert_eq!(products[0].name, "Tv");
    }
}
