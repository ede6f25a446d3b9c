use super::cart::CartLine;
use super::money::Money;
use super::payment::PaymentMethod;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub u32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A completed checkout. Lines are a snapshot of the cart at payment time.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    lines: Vec<CartLine>,
    payment_method: PaymentMethod,
    total: Money,
}

impl Order {
    pub fn new(id: OrderId, lines: Vec<CartLine>, payment_method: PaymentMethod) -> Self {
        let total = lines.iter().map(CartLine::line_total).sum();
        Self {
            id,
            lines,
            payment_method,
            total,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// The single line written to the order log.
    pub fn log_line(&self) -> String {
        format!(
            "[LOG] -> Order ID: {} has been successfully checked out and paid using {}",
            self.id,
            self.payment_method.name()
        )
    }
}
