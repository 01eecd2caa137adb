use std::fmt;

use derive_getters::Getters;
use rust_decimal::Decimal;

use super::{Holding, holding::symbol_key};

pub const NO_MATCHES: &str = "No investments found matching the criteria.";

/// Filters for a ledger search. Empty text filters and absent bounds match everything.
#[derive(Clone, Debug, Default, Getters, PartialEq)]
pub struct SearchQuery {
    symbol: String,
    keywords: String,
    low_price: Option<Decimal>,
    high_price: Option<Decimal>,
}

impl SearchQuery {
    pub fn new(symbol: &str, keywords: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            keywords: keywords.to_string(),
            low_price: None,
            high_price: None,
        }
    }

    pub fn with_price_range(mut self, low: Option<Decimal>, high: Option<Decimal>) -> Self {
        self.low_price = low;
        self.high_price = high;
        self
    }

    pub fn matches(&self, holding: &Holding) -> bool {
        let matches_symbol =
            self.symbol.is_empty() || holding.key() == symbol_key(&self.symbol);
        let matches_keywords = self.keywords.is_empty()
            || holding
                .name()
                .to_lowercase()
                .contains(&self.keywords.to_lowercase());
        let price = *holding.price();
        let matches_price = self.low_price.is_none_or(|low| price >= low)
            && self.high_price.is_none_or(|high| price <= high);

        matches_symbol && matches_keywords && matches_price
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult<'a> {
    Matches(Vec<&'a Holding>),
    NoMatches,
}

impl<'a> SearchResult<'a> {
    pub fn holdings(&self) -> &[&'a Holding] {
        match self {
            SearchResult::Matches(holdings) => holdings,
            SearchResult::NoMatches => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchResult::NoMatches)
    }
}

impl fmt::Display for SearchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Matches(holdings) => {
                for holding in holdings {
                    writeln!(f, "{}", holding)?;
                }
                Ok(())
            }
            SearchResult::NoMatches => f.write_str(NO_MATCHES),
        }
    }
}
