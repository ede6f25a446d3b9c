use super::money::Money;
use tracing::debug;

/// The ways a customer can pay at the counter.
///
/// None of these talk to a real gateway: processing only produces a
/// confirmation and always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Card,
    GCash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Cash, Self::Card, Self::GCash];

    /// Maps a 1-based menu choice to a method.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Cash),
            2 => Some(Self::Card),
            3 => Some(Self::GCash),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Credit / Debit Card",
            Self::GCash => "GCash",
        }
    }

    pub fn confirmation(&self, amount: Money) -> String {
        let label = match self {
            Self::Cash => "cash",
            Self::Card => "credit/debit card",
            Self::GCash => "GCash",
        };
        format!("Processing {label} payment of ₱{amount}")
    }

    /// Settles `amount`, returning whether the payment went through.
    pub fn process(&self, amount: Money) -> bool {
        debug!(method = self.name(), %amount, "payment processed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_every_method_succeeds() {
        let amount = Money::new(dec!(74)).unwrap();
        for method in PaymentMethod::ALL {
            assert!(method.process(amount));
        }
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(PaymentMethod::from_choice(1), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::from_choice(2), Some(PaymentMethod::Card));
        assert_eq!(PaymentMethod::from_choice(3), Some(PaymentMethod::GCash));
        assert_eq!(PaymentMethod::from_choice(4), None);
    }

    #[test]
    fn test_names_and_confirmation() {
        assert_eq!(PaymentMethod::Card.name(), "Credit / Debit Card");
        assert_eq!(
            PaymentMethod::GCash.confirmation(Money::new(dec!(12.5)).unwrap()),
            "Processing GCash payment of ₱12.50"
        );
    }
}
