use anyhow::{Context, Result};
use rust_decimal::Decimal;

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

pub fn parse_optional_decimal(field: &str, field_name: &str) -> Result<Option<Decimal>> {
    if field.trim().is_empty() {
        return Ok(None);
    }
    parse_decimal(field, field_name).map(Some)
}

pub fn parse_quantity(field: &str) -> Result<i64> {
    field
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Failed to parse quantity '{}'", field))
}
