use super::money::Money;
use super::product::Product;
use crate::error::{CheckoutError, Result};
use std::sync::Arc;

pub const DEFAULT_CART_CAPACITY: usize = 10;

/// A strictly positive number of units.
///
/// The console layer already refuses zero, but the cart only accepts this
/// type so a zero-quantity line cannot be built from library code either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(CheckoutError::InvalidInput(
                "Quantity must be a positive whole number".to_string(),
            ))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = CheckoutError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Arc<Product>,
    pub quantity: Quantity,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.product.price().times(self.quantity.get())
    }
}

/// Lines selected during the session, in the order they were added.
///
/// Adding the same product twice produces two lines; nothing is merged.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    capacity: usize,
}

impl Cart {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CART_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a line. Fails when the cart is full or when the line, or the
    /// cart total with it, would exceed the largest representable amount.
    pub fn add_item(&mut self, product: Arc<Product>, quantity: Quantity) -> Result<()> {
        if self.lines.len() >= self.capacity {
            return Err(CheckoutError::CapacityExceeded {
                what: "Shopping Cart",
                capacity: self.capacity,
            });
        }
        let line_total = product.price().checked_times(quantity.get())?;
        self.total().checked_add(line_total)?;
        self.lines.push(CartLine { product, quantity });
        Ok(())
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use rust_decimal_macros::dec;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn test_quantity_rejects_zero() {
        assert!(matches!(
            Quantity::new(0),
            Err(CheckoutError::InvalidInput(_))
        ));
        assert_eq!(Quantity::try_from(7).unwrap().get(), 7);
    }

    #[test]
    fn test_total_sums_line_totals() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.add_item(catalog.find_by_id("A1B2C3").unwrap(), qty(1))
            .unwrap();
        cart.add_item(catalog.find_by_id("X9Y8Z7").unwrap(), qty(3))
            .unwrap();

        assert_eq!(cart.lines()[1].line_total(), Money::new(dec!(42)).unwrap());
        assert_eq!(cart.total(), Money::new(dec!(74.00)).unwrap());
    }

    #[test]
    fn test_duplicate_products_are_separate_lines() {
        let catalog = Catalog::seeded();
        let milo = catalog.find_by_id("J1K2L3").unwrap();
        let mut cart = Cart::new();
        cart.add_item(milo.clone(), qty(1)).unwrap();
        cart.add_item(milo, qty(2)).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Money::new(dec!(37.5)).unwrap());
    }

    #[test]
    fn test_capacity_exceeded_leaves_cart_unchanged() {
        let catalog = Catalog::seeded();
        let tea = catalog.find_by_id("A1B2C3").unwrap();
        let mut cart = Cart::with_capacity(2);
        cart.add_item(tea.clone(), qty(1)).unwrap();
        cart.add_item(tea.clone(), qty(1)).unwrap();

        let result = cart.add_item(tea, qty(5));
        assert!(matches!(
            result,
            Err(CheckoutError::CapacityExceeded { capacity: 2, .. })
        ));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Money::new(dec!(64)).unwrap());
    }

    #[test]
    fn test_overflowing_line_is_rejected() {
        let price = Money::new(dec!(50000000000000000000000000000)).unwrap();
        let big = Arc::new(Product::new("BIG", "Huge", price).unwrap());
        let mut cart = Cart::new();

        assert!(matches!(
            cart.add_item(big.clone(), qty(2)),
            Err(CheckoutError::InvalidInput(_))
        ));
        assert!(cart.is_empty());

        cart.add_item(big.clone(), qty(1)).unwrap();
        assert!(matches!(
            cart.add_item(big, qty(1)),
            Err(CheckoutError::InvalidInput(_))
        ));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), price);
    }

    #[test]
    fn test_clear_empties_cart() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.add_item(catalog.find_by_id("M7N8O9").unwrap(), qty(4))
            .unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }
}
