pub mod holding;
pub mod holding_gain;
pub mod investment_type;
pub mod outcome;
pub mod search;
pub mod transaction;

pub use holding::Holding;
pub use holding_gain::HoldingGain;
pub use investment_type::InvestmentType;
pub use outcome::{BuyOutcome, PriceUpdate, SellOutcome};
pub use search::{SearchQuery, SearchResult};
pub use transaction::{Transaction, TransactionType};
