//! Domain layer: products, the cart, payment methods and orders.
//!
//! Nothing here performs console I/O. The only outward dependency is the
//! [`ports::OrderSink`] trait that the ledger writes completed orders to.

pub mod cart;
pub mod catalog;
pub mod money;
pub mod order;
pub mod payment;
pub mod ports;
pub mod product;
