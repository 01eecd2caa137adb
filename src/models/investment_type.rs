use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Commission charged on every stock purchase.
pub const STOCK_COMMISSION: Decimal = dec!(9.99);
/// Load fee charged on every mutual fund purchase.
pub const MUTUAL_FUND_LOAD_FEE: Decimal = dec!(25.00);

/// Kind of investment a holding was opened as. Decides which fee applies.
#[derive(Clone, Copy, Debug, Deserialize, EnumIter, Eq, Hash, PartialEq, Serialize)]
pub enum InvestmentType {
    Stock,
    MutualFund,
}

impl InvestmentType {
    pub fn parse_str(s: &str) -> Option<InvestmentType> {
        if s.eq_ignore_ascii_case("stock") {
            Some(InvestmentType::Stock)
        } else if s.eq_ignore_ascii_case("mutualfund") {
            Some(InvestmentType::MutualFund)
        } else {
            None
        }
    }

    /// Keyword accepted by `parse_str`.
    pub fn to_str(&self) -> &str {
        match self {
            InvestmentType::Stock => "stock",
            InvestmentType::MutualFund => "mutualfund",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            InvestmentType::Stock => "Stock",
            InvestmentType::MutualFund => "Mutual Fund",
        }
    }

    pub fn fee(&self) -> Decimal {
        match self {
            InvestmentType::Stock => STOCK_COMMISSION,
            InvestmentType::MutualFund => MUTUAL_FUND_LOAD_FEE,
        }
    }

    /// Cost of buying `quantity` units at `price`, fee included.
    /// `None` when the amount does not fit in a `Decimal`.
    pub fn calculate_book_value(&self, quantity: i64, price: Decimal) -> Option<Decimal> {
        Decimal::from(quantity)
            .checked_mul(price)?
            .checked_add(self.fee())
    }

    /// Gain of a position against its book value. The fee is taken off once more here,
    /// on top of the one already carried in `book_value`. Saturates at the `Decimal` bounds.
    pub fn calculate_gain(&self, quantity: i64, price: Decimal, book_value: Decimal) -> Decimal {
        Decimal::from(quantity)
            .saturating_mul(price)
            .saturating_sub(book_value)
            .saturating_sub(self.fee())
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
