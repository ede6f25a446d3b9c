use crate::domain::order::Order;
use crate::domain::ports::OrderSink;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Keeps order log lines in memory instead of on disk.
///
/// Clones share the same buffer, so a test can hand one clone to the ledger
/// and inspect the other.
#[derive(Default, Clone)]
pub struct InMemoryOrderSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl InMemoryOrderSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl OrderSink for InMemoryOrderSink {
    fn record(&mut self, order: &Order) -> io::Result<()> {
        self.lines.borrow_mut().push(order.log_line());
        Ok(())
    }
}
