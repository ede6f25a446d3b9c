use checkout::application::ledger::OrderLedger;
use checkout::domain::cart::{Cart, Quantity};
use checkout::domain::catalog::Catalog;
use checkout::infrastructure::in_memory::InMemoryOrderSink;

pub fn ledger_with_sink(capacity: usize) -> (OrderLedger, InMemoryOrderSink) {
    let sink = InMemoryOrderSink::new();
    let ledger = OrderLedger::with_capacity(Box::new(sink.clone()), capacity);
    (ledger, sink)
}

pub fn add(cart: &mut Cart, catalog: &Catalog, id: &str, quantity: u32) {
    let product = catalog.find_by_id(id).unwrap();
    cart.add_item(product, Quantity::new(quantity).unwrap())
        .unwrap();
}
