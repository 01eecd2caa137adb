use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

use super::InvestmentType;

#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct HoldingGain {
    symbol: String,
    investment_type: InvestmentType,
    gain: Decimal,
}
