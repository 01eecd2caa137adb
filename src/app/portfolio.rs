use std::collections::HashMap;

use chrono::Local;
use log::{debug, info};
use rust_decimal::Decimal;

use crate::{
    app::error::{InvalidInput, LedgerError, Result},
    models::{
        BuyOutcome, Holding, HoldingGain, InvestmentType, PriceUpdate, SearchQuery, SearchResult,
        SellOutcome, Transaction, TransactionType, holding::symbol_key,
    },
};

/// Holdings in insertion order, indexed by ASCII-uppercased symbol.
#[derive(Clone, Debug, Default)]
pub struct Portfolio {
    holdings: Vec<Holding>,
    index: HashMap<String, usize>,
    transactions: Vec<Transaction>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self {
            holdings: Vec::new(),
            index: HashMap::new(),
            transactions: Vec::new(),
        }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.position(symbol).map(|i| &self.holdings[i])
    }

    /// Buys into `symbol`. An existing holding keeps its own type and price;
    /// `investment_type` is only read when the symbol is new.
    pub fn buy(
        &mut self,
        investment_type: &str,
        symbol: &str,
        name: &str,
        quantity: i64,
        price: Decimal,
    ) -> Result<BuyOutcome> {
        if quantity <= 0 || price <= Decimal::ZERO {
            return Err(reject(InvalidInput::QuantityOrPriceNotPositive.into()));
        }

        if let Some(i) = self.position(symbol) {
            let holding = &mut self.holdings[i];
            let added = holding
                .add(quantity, price)
                .ok_or_else(|| reject(InvalidInput::AmountTooLarge.into()))?;
            let canonical = holding.symbol().clone();
            info!(
                "Merged {} units of {} at {}, book value now {}",
                quantity,
                holding.symbol(),
                price,
                holding.book_value()
            );
            let transaction =
                self.record(TransactionType::Buy, &canonical, quantity, price, added);
            return Ok(BuyOutcome::Merged(transaction));
        }

        let investment_type = InvestmentType::parse_str(investment_type).ok_or_else(|| {
            reject(InvalidInput::UnknownInvestmentType(investment_type.to_string()).into())
        })?;
        let holding = Holding::open(investment_type, symbol, name, quantity, price)
            .ok_or_else(|| reject(InvalidInput::AmountTooLarge.into()))?;
        let book_value = *holding.book_value();
        info!(
            "Opened {} holding {} with {} units at {}",
            investment_type, symbol, quantity, price
        );
        self.index.insert(holding.key(), self.holdings.len());
        self.holdings.push(holding);

        let transaction = self.record(TransactionType::Buy, symbol, quantity, price, book_value);
        Ok(BuyOutcome::Created(transaction))
    }

    /// Sells part or all of a holding. The sale price is recorded in the journal only;
    /// the holding's unit price is left as is.
    pub fn sell(&mut self, symbol: &str, quantity: i64, price: Decimal) -> Result<SellOutcome> {
        if quantity <= 0 || price <= Decimal::ZERO {
            return Err(reject(InvalidInput::QuantityOrPriceNotPositive.into()));
        }

        let i = self.position(symbol).ok_or_else(|| {
            reject(LedgerError::NotFound {
                symbol: symbol.to_string(),
            })
        })?;

        let holding = &mut self.holdings[i];
        if *holding.quantity() < quantity {
            return Err(reject(LedgerError::InsufficientQuantity {
                symbol: symbol.to_string(),
                requested: quantity,
                available: *holding.quantity(),
            }));
        }

        let removed = holding.reduce(quantity);
        let closed = *holding.quantity() == 0;
        let canonical = holding.symbol().clone();
        info!(
            "Sold {} units of {}, {} remaining",
            quantity,
            holding.symbol(),
            holding.quantity()
        );
        if closed {
            self.remove(i);
            info!("Closed holding {}", canonical);
        }

        let transaction =
            self.record(TransactionType::Sell, &canonical, quantity, price, -removed);
        Ok(SellOutcome::new(symbol.to_string(), transaction, closed))
    }

    pub fn update_price(&mut self, symbol: &str, new_price: Decimal) -> Result<PriceUpdate> {
        if new_price <= Decimal::ZERO {
            return Err(reject(InvalidInput::PriceNotPositive.into()));
        }

        let i = self.position(symbol).ok_or_else(|| {
            reject(LedgerError::NotFound {
                symbol: symbol.to_string(),
            })
        })?;

        let holding = &mut self.holdings[i];
        let previous_price = *holding.price();
        holding.update_price(new_price);
        let canonical = holding.symbol().clone();
        info!(
            "Repriced {} from {} to {}",
            holding.symbol(),
            previous_price,
            new_price
        );

        let transaction = self.record(
            TransactionType::PriceUpdate,
            &canonical,
            0,
            new_price,
            Decimal::ZERO,
        );
        Ok(PriceUpdate::new(symbol.to_string(), previous_price, transaction))
    }

    pub fn search(&self, symbol: &str, keywords: &str) -> SearchResult<'_> {
        self.search_with(&SearchQuery::new(symbol, keywords))
    }

    pub fn search_with(&self, query: &SearchQuery) -> SearchResult<'_> {
        let matches: Vec<&Holding> = self
            .holdings
            .iter()
            .filter(|holding| query.matches(holding))
            .collect();

        if matches.is_empty() {
            SearchResult::NoMatches
        } else {
            SearchResult::Matches(matches)
        }
    }

    pub fn gains(&self) -> Vec<HoldingGain> {
        self.holdings
            .iter()
            .map(|holding| {
                HoldingGain::new(
                    holding.symbol().to_string(),
                    *holding.investment_type(),
                    holding.gain(),
                )
            })
            .collect()
    }

    pub fn total_gain(&self) -> Decimal {
        self.holdings
            .iter()
            .fold(Decimal::ZERO, |sum, holding| sum.saturating_add(holding.gain()))
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        self.index.get(&symbol_key(symbol)).copied()
    }

    fn remove(&mut self, i: usize) {
        let holding = self.holdings.remove(i);
        self.index.remove(&holding.key());
        for (position, holding) in self.holdings.iter().enumerate().skip(i) {
            self.index.insert(holding.key(), position);
        }
    }

    fn record(
        &mut self,
        transaction_type: TransactionType,
        symbol: &str,
        quantity: i64,
        price: Decimal,
        book_value_change: Decimal,
    ) -> Transaction {
        let transaction = Transaction::new(
            self.transactions.len() as i64 + 1,
            Local::now(),
            transaction_type,
            symbol.to_string(),
            quantity,
            price,
            book_value_change,
        );
        self.transactions.push(transaction.clone());
        transaction
    }
}

fn reject(err: LedgerError) -> LedgerError {
    debug!("Rejected ledger command: {}", err);
    err
}
