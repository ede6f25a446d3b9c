use super::order::Order;
use std::io;

/// Durable destination for completed orders.
pub trait OrderSink {
    fn record(&mut self, order: &Order) -> io::Result<()>;
}

pub type OrderSinkBox = Box<dyn OrderSink>;
