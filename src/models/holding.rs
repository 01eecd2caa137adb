use std::fmt;

use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::Serialize;

use super::InvestmentType;

/// One symbol's position. Only the ledger mutates it.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct Holding {
    symbol: String,
    name: String,
    investment_type: InvestmentType,
    quantity: i64,
    price: Decimal,
    book_value: Decimal,
}

impl Holding {
    /// `None` when the opening book value is out of range.
    pub(crate) fn open(
        investment_type: InvestmentType,
        symbol: &str,
        name: &str,
        quantity: i64,
        price: Decimal,
    ) -> Option<Self> {
        Some(Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            investment_type,
            quantity,
            price,
            book_value: investment_type.calculate_book_value(quantity, price)?,
        })
    }

    /// Symbol the ledger indexes this holding by. Symbols compare ASCII case-insensitively.
    pub fn key(&self) -> String {
        symbol_key(&self.symbol)
    }

    pub fn market_value(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.price)
    }

    pub fn gain(&self) -> Decimal {
        self.investment_type
            .calculate_gain(self.quantity, self.price, self.book_value)
    }

    /// Adds a purchase at this holding's own fee. Returns the book value added, or `None`
    /// without touching the holding when the new totals would overflow.
    pub(crate) fn add(&mut self, quantity: i64, price: Decimal) -> Option<Decimal> {
        let additional = self.investment_type.calculate_book_value(quantity, price)?;
        let new_quantity = self.quantity.checked_add(quantity)?;
        let new_book_value = self.book_value.checked_add(additional)?;
        self.quantity = new_quantity;
        self.book_value = new_book_value;
        Some(additional)
    }

    /// Removes `quantity` of the held units and their share of book value.
    /// Returns the book value removed. Callers ensure `0 < quantity <= self.quantity`.
    pub(crate) fn reduce(&mut self, quantity: i64) -> Decimal {
        let proportion = Decimal::from(quantity) / Decimal::from(self.quantity);
        let removed = self.book_value * proportion;
        self.book_value -= removed;
        self.quantity -= quantity;
        removed
    }

    pub(crate) fn update_price(&mut self, price: Decimal) {
        self.price = price;
    }
}

pub fn symbol_key(symbol: &str) -> String {
    symbol.to_ascii_uppercase()
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.symbol, self.name, self.investment_type)
    }
}
