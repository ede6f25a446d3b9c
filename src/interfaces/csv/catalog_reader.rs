use crate::domain::catalog::Catalog;
use crate::domain::product::{Product, ProductRecord};
use crate::error::{CheckoutError, Result};
use std::io::Read;
use tracing::info;

/// Reads products from a CSV source with an `id,name,price` header.
///
/// Whitespace around fields is trimmed. Unlike a streaming import, a single
/// bad row rejects the whole file: a half-loaded catalog is worse than none.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    /// Wraps an open catalog file, or an in-memory buffer in tests.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates products.
    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader
            .into_deserialize::<ProductRecord>()
            .map(|result| Product::try_from(result.map_err(CheckoutError::from)?))
    }

    /// Loads every row into a [`Catalog`].
    pub fn into_catalog(self) -> Result<Catalog> {
        let products = self.products().collect::<Result<Vec<_>>>()?;
        if products.is_empty() {
            return Err(CheckoutError::InvalidCatalog(
                "Catalog file has no products".to_string(),
            ));
        }
        let catalog = Catalog::new(products)?;
        info!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}
