use super::money::Money;
use crate::error::CheckoutError;
use rust_decimal::Decimal;
use serde::Deserialize;

/// An item for sale. Identifiers are stored upper-cased so lookups can
/// compare them exactly after upper-casing the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: String,
    name: String,
    price: Money,
}

impl Product {
    pub fn new(id: &str, name: &str, price: Money) -> Result<Self, CheckoutError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CheckoutError::InvalidCatalog(
                "Product ID cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            id: id.to_uppercase(),
            name: name.trim().to_string(),
            price,
        })
    }

    /// Builds a product from constant data whose id is already upper-case.
    pub(crate) fn seed(id: &'static str, name: &'static str, price: Money) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

/// A catalog row as it appears in a `id,name,price` CSV file.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CheckoutError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let price = Money::new(record.price).map_err(|_| {
            CheckoutError::InvalidCatalog(format!(
                "Product '{}' has a negative price",
                record.id
            ))
        })?;
        Self::new(&record.id, &record.name, price)
    }
}
