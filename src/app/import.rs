use std::path::Path;

use anyhow::{Context, Error, Result};
use csv::{ReaderBuilder, Trim};
use derive_getters::Getters;
use log::{info, warn};

use crate::app::{
    Portfolio,
    utils::{parse_decimal, parse_quantity},
};

const COLUMNS: usize = 6;

#[derive(Clone, Copy, Debug, Default, Eq, Getters, PartialEq)]
pub struct ImportSummary {
    applied: usize,
    rejected: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Action {
    Buy,
    Sell,
    Update,
}

impl Action {
    fn parse_str(s: &str) -> Result<Action> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(Action::Buy),
            "sell" => Ok(Action::Sell),
            "update" => Ok(Action::Update),
            _ => Err(anyhow::anyhow!("Unknown action '{}'", s)),
        }
    }
}

/// Replays a CSV of ledger commands with the columns
/// `action,type,symbol,name,quantity,price`.
///
/// Malformed rows abort the replay. Rows the ledger turns down are logged and counted.
pub fn replay_csv(portfolio: &mut Portfolio, path: &Path) -> Result<ImportSummary> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file at path: {}", path.display()))?;

    let mut summary = ImportSummary::default();

    for (row_idx, record) in reader.records().enumerate() {
        let row = row_idx + 1;
        let rec = record.with_context(|| format!("Failed to read CSV record at row {}", row))?;

        if rec.len() < COLUMNS {
            return Err(Error::msg(format!(
                "Invalid CSV format at row {}: expected {} columns, found {}",
                row,
                COLUMNS,
                rec.len()
            )));
        }

        let action = Action::parse_str(&rec[0]).with_context(|| format!("Row {}", row))?;
        let symbol = &rec[2];

        let result = match action {
            Action::Buy => {
                let quantity = parse_quantity(&rec[4]).with_context(|| format!("Row {}", row))?;
                let price =
                    parse_decimal(&rec[5], "price").with_context(|| format!("Row {}", row))?;
                portfolio
                    .buy(&rec[1], symbol, &rec[3], quantity, price)
                    .map(|outcome| outcome.to_string())
            }
            Action::Sell => {
                let quantity = parse_quantity(&rec[4]).with_context(|| format!("Row {}", row))?;
                let price =
                    parse_decimal(&rec[5], "price").with_context(|| format!("Row {}", row))?;
                portfolio
                    .sell(symbol, quantity, price)
                    .map(|outcome| outcome.to_string())
            }
            Action::Update => {
                let price =
                    parse_decimal(&rec[5], "price").with_context(|| format!("Row {}", row))?;
                portfolio
                    .update_price(symbol, price)
                    .map(|outcome| outcome.to_string())
            }
        };

        match result {
            Ok(status) => {
                summary.applied += 1;
                info!("Row {}: {}", row, status);
            }
            Err(err) => {
                summary.rejected += 1;
                warn!("Skipping row {}: {}", row, err);
            }
        }
    }

    Ok(summary)
}
