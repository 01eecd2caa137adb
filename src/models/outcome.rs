use std::fmt;

use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::Transaction;

#[derive(Clone, Debug, PartialEq)]
pub enum BuyOutcome {
    Created(Transaction),
    Merged(Transaction),
}

impl BuyOutcome {
    pub fn transaction(&self) -> &Transaction {
        match self {
            BuyOutcome::Created(transaction) | BuyOutcome::Merged(transaction) => transaction,
        }
    }
}

impl fmt::Display for BuyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuyOutcome::Created(_) => f.write_str("New investment added successfully!"),
            BuyOutcome::Merged(_) => f.write_str("Updated existing investment successfully!"),
        }
    }
}

/// Result of a sale. `closed` is set when the sale emptied the holding.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct SellOutcome {
    requested_symbol: String,
    transaction: Transaction,
    closed: bool,
}

impl fmt::Display for SellOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sold {} of {} successfully.",
            self.transaction.quantity(),
            self.requested_symbol
        )
    }
}

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct PriceUpdate {
    requested_symbol: String,
    previous_price: Decimal,
    transaction: Transaction,
}

impl PriceUpdate {
    pub fn price(&self) -> Decimal {
        *self.transaction.price()
    }
}

impl fmt::Display for PriceUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Updated price of {} successfully.", self.requested_symbol)
    }
}
