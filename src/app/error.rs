use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Why a ledger command was turned down. `Display` is the status line shown to the user.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("Error: Investment with symbol {symbol} not found.")]
    NotFound { symbol: String },

    #[error("Error: Not enough quantity to sell. Requested {requested} of {symbol}, holding {available}.")]
    InsufficientQuantity {
        symbol: String,
        requested: i64,
        available: i64,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidInput {
    #[error("Error: Quantity and price must be positive values.")]
    QuantityOrPriceNotPositive,

    #[error("Error: Price must be a positive value.")]
    PriceNotPositive,

    #[error("Error: Quantity or price is too large.")]
    AmountTooLarge,

    #[error("Error: Invalid investment type '{0}'. Expected 'stock' or 'mutualfund'.")]
    UnknownInvestmentType(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    InsufficientQuantity,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::InvalidInput(_) => ErrorKind::InvalidInput,
            LedgerError::NotFound { .. } => ErrorKind::NotFound,
            LedgerError::InsufficientQuantity { .. } => ErrorKind::InsufficientQuantity,
        }
    }
}
