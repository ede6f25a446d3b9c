use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckoutError>;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Product with ID '{id}' not found!")]
    NotFound { id: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{what} is full. Cannot add more items.")]
    CapacityExceeded { what: &'static str, capacity: usize },
    #[error("Shopping Cart is empty. Add products before checking out.")]
    EmptyCart,
    #[error("Payment declined by {method}")]
    PaymentDeclined { method: &'static str },
    #[error("Payment failed with method: {method}")]
    CheckoutFailed {
        method: &'static str,
        #[source]
        source: Box<CheckoutError>,
    },
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("Input stream closed")]
    InputClosed,
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl CheckoutError {
    /// Renders the error followed by every underlying cause, one per clause.
    pub fn with_causes(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        message
    }
}
