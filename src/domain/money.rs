use crate::error::CheckoutError;
use rust_decimal::Decimal;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative monetary value in pesos.
///
/// Wraps `rust_decimal::Decimal` so prices and totals never go through
/// floating point. Construction through [`Money::new`] rejects negatives.
///
/// `+` and [`Money::times`] saturate instead of panicking; code that must not
/// lose precision goes through the `checked_*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, CheckoutError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CheckoutError::InvalidInput(
                "Amount cannot be negative".to_string(),
            ))
        }
    }

    /// Builds an amount from a whole number of centavos.
    pub const fn from_cents(cents: u32) -> Self {
        Self(Decimal::from_parts(cents, 0, 0, false, 2))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price, saturating at the
    /// largest representable amount.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    pub fn checked_times(self, quantity: u32) -> Result<Self, CheckoutError> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Self)
            .ok_or_else(too_large)
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, CheckoutError> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(too_large)
    }
}

fn too_large() -> CheckoutError {
    CheckoutError::InvalidInput("Amount is too large".to_string())
}

impl TryFrom<Decimal> for Money {
    type Error = CheckoutError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
