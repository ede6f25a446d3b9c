//! Application layer: checkout orchestration on top of the domain.
//!
//! `OrderLedger` turns a cart into an order and records it through the
//! injected `OrderSink`. `Session` drives catalog browsing, the cart and the
//! ledger from a console.

pub mod ledger;
pub mod session;
