use crate::domain::cart::{Cart, CartLine};
use crate::domain::catalog::Catalog;
use crate::domain::order::Order;
use std::io::{self, Write};

fn line_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{:<15}{:<20}{:<10}{:<10}",
        "Product ID", "Name", "Price", "Quantity"
    )
}

fn line_row(out: &mut impl Write, line: &CartLine) -> io::Result<()> {
    let price = line.product.price().to_string();
    writeln!(
        out,
        "{:<15}{:<20}{:<10}{:<10}",
        line.product.id(),
        line.product.name(),
        price,
        line.quantity.get()
    )
}

pub fn catalog(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "\n----- Available Products -----")?;
    writeln!(out, "{:<15}{:<20}{:<10}", "Product ID", "Name", "Price")?;
    for product in catalog.list_all() {
        let price = product.price().to_string();
        writeln!(out, "{:<15}{:<20}{:<10}", product.id(), product.name(), price)?;
    }
    Ok(())
}

pub fn cart(out: &mut impl Write, cart: &Cart) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "Your shopping cart is empty.");
    }
    writeln!(out, "\n----- Shopping Cart -----")?;
    line_header(out)?;
    for line in cart.lines() {
        line_row(out, line)?;
    }
    writeln!(out, "\nTotal Amount: ₱{}", cart.total())
}

pub fn order(out: &mut impl Write, order: &Order) -> io::Result<()> {
    writeln!(out, "\nOrder ID: {}", order.id())?;
    writeln!(out, "Total Amount: ₱{}", order.total())?;
    writeln!(out, "Payment Method: {}", order.payment_method().name())?;
    writeln!(out, "Order Details:")?;
    line_header(out)?;
    for line in order.lines() {
        line_row(out, line)?;
    }
    writeln!(out)
}

pub fn history(out: &mut impl Write, orders: &[Order]) -> io::Result<()> {
    if orders.is_empty() {
        return writeln!(out, "No orders to display.");
    }
    writeln!(out, "\n----- Order History -----")?;
    for o in orders {
        order(out, o)?;
    }
    Ok(())
}
