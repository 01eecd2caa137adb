use std::fmt;

use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

/// Journal entry for a command the ledger accepted.
#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct Transaction {
    transaction_no: i64,
    date: DateTime<Local>,
    transaction_type: TransactionType,
    symbol: String,
    quantity: i64,
    price: Decimal,
    book_value_change: Decimal,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.transaction_no,
            self.date.format("%Y-%m-%d %H:%M:%S"),
            self.transaction_type.to_str(),
            self.symbol
        )?;
        match self.transaction_type {
            TransactionType::PriceUpdate => write!(f, " @ {:.2}", self.price),
            _ => write!(
                f,
                " {} @ {:.2} (book value {:+.2})",
                self.quantity, self.price, self.book_value_change
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum TransactionType {
    Buy,
    Sell,
    PriceUpdate,
}

impl TransactionType {
    pub fn to_str(&self) -> &str {
        match self {
            TransactionType::Buy => "Buy",
            TransactionType::Sell => "Sell",
            TransactionType::PriceUpdate => "PriceUpdate",
        }
    }
}
