use crate::domain::cart::Cart;
use crate::domain::order::{Order, OrderId};
use crate::domain::payment::PaymentMethod;
use crate::domain::ports::OrderSinkBox;
use crate::error::{CheckoutError, Result};
use tracing::{info, warn};

pub const DEFAULT_LEDGER_CAPACITY: usize = 10;

/// History of completed orders and the entry point for checkout.
///
/// `OrderLedger` is constructed once at startup and handed to the session.
/// It owns the order sink and allocates order ids from a counter that only
/// moves forward.
pub struct OrderLedger {
    orders: Vec<Order>,
    next_id: u32,
    capacity: usize,
    sink: OrderSinkBox,
}

impl OrderLedger {
    pub fn new(sink: OrderSinkBox) -> Self {
        Self::with_capacity(sink, DEFAULT_LEDGER_CAPACITY)
    }

    pub fn with_capacity(sink: OrderSinkBox, capacity: usize) -> Self {
        Self {
            orders: Vec::with_capacity(capacity),
            next_id: 1,
            capacity,
            sink,
        }
    }

    /// Pays for the cart's contents and records the resulting order.
    ///
    /// The cart is left untouched; clearing it is the caller's job once
    /// this returns `Ok`. Any failure comes back as
    /// [`CheckoutError::CheckoutFailed`] carrying the real cause as its source.
    /// A failure to write the order log is only reported as a warning.
    pub fn checkout(&mut self, cart: &Cart, method: PaymentMethod) -> Result<&Order> {
        let order = self
            .place(cart, method)
            .map_err(|source| CheckoutError::CheckoutFailed {
                method: method.name(),
                source: Box::new(source),
            })?;

        if let Err(e) = self.sink.record(&order) {
            warn!(order_id = %order.id(), error = %e, "could not record order in the order log");
        }
        info!(order_id = %order.id(), method = method.name(), total = %order.total(), "order checked out");

        self.orders.push(order);
        let idx = self.orders.len() - 1;
        Ok(&self.orders[idx])
    }

    fn place(&mut self, cart: &Cart, method: PaymentMethod) -> Result<Order> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let amount = cart.total();
        if !method.process(amount) {
            return Err(CheckoutError::PaymentDeclined {
                method: method.name(),
            });
        }

        if self.orders.len() >= self.capacity {
            return Err(CheckoutError::CapacityExceeded {
                what: "Orders database",
                capacity: self.capacity,
            });
        }

        let id = OrderId(self.next_id);
        self.next_id += 1;
        Ok(Order::new(id, cart.lines().to_vec(), method))
    }

    pub fn history(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
