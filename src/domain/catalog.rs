use super::money::Money;
use super::product::Product;
use crate::error::{CheckoutError, Result};
use std::sync::Arc;

/// Fixed, read-only list of products, kept in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Builds a catalog, rejecting identifiers that collide case-insensitively.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut stored: Vec<Arc<Product>> = Vec::with_capacity(products.len());
        for product in products {
            if stored.iter().any(|p| p.id() == product.id()) {
                return Err(CheckoutError::InvalidCatalog(format!(
                    "Duplicate product ID '{}'",
                    product.id()
                )));
            }
            stored.push(Arc::new(product));
        }
        Ok(Self { products: stored })
    }

    /// The five drinks the store ships with.
    pub fn seeded() -> Self {
        let products = [
            Product::seed("A1B2C3", "C2 Green Tea", Money::from_cents(3200)),
            Product::seed("X9Y8Z7", "Zesto Juice Drink", Money::from_cents(1400)),
            Product::seed("P4Q5R6", "Cobra Energy Drink", Money::from_cents(2900)),
            Product::seed("M7N8O9", "1.5L Royal", Money::from_cents(7500)),
            Product::seed("J1K2L3", "Milo", Money::from_cents(1250)),
        ]
        .into_iter()
        .map(Arc::new)
        .collect();
        Self { products }
    }

    pub fn find_by_id(&self, id: &str) -> Result<Arc<Product>> {
        let wanted = id.to_uppercase();
        self.products
            .iter()
            .find(|p| p.id() == wanted)
            .cloned()
            .ok_or_else(|| CheckoutError::NotFound { id: id.to_string() })
    }

    pub fn list_all(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
