use crate::application::ledger::{DEFAULT_LEDGER_CAPACITY, OrderLedger};
use crate::domain::cart::{Cart, DEFAULT_CART_CAPACITY};
use crate::domain::catalog::Catalog;
use crate::domain::ports::OrderSinkBox;
use crate::error::Result;
use crate::infrastructure::file_log::FileOrderLog;
use crate::infrastructure::in_memory::InMemoryOrderSink;
use crate::interfaces::csv::catalog_reader::CatalogReader;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

/// Terminal checkout counter: browse products, fill a cart and pay.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// File that completed orders are appended to
    #[arg(long, default_value = "orders.log")]
    pub order_log: PathBuf,

    /// Keep orders in memory only and skip the order log file
    #[arg(long, conflicts_with = "order_log")]
    pub no_log: bool,

    /// Product catalog CSV with an `id,name,price` header (defaults to the built-in drinks)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Maximum number of lines in the shopping cart
    #[arg(long, default_value_t = DEFAULT_CART_CAPACITY)]
    pub cart_capacity: usize,

    /// Maximum number of orders kept in the order history
    #[arg(long, default_value_t = DEFAULT_LEDGER_CAPACITY)]
    pub ledger_capacity: usize,
}

impl Config {
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => CatalogReader::new(File::open(path)?).into_catalog(),
            None => Ok(Catalog::seeded()),
        }
    }

    pub fn order_sink(&self) -> OrderSinkBox {
        if self.no_log {
            Box::new(InMemoryOrderSink::new())
        } else {
            Box::new(FileOrderLog::new(&self.order_log))
        }
    }

    pub fn cart(&self) -> Cart {
        Cart::with_capacity(self.cart_capacity)
    }

    pub fn ledger(&self) -> OrderLedger {
        OrderLedger::with_capacity(self.order_sink(), self.ledger_capacity)
    }
}
