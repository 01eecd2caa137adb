use std::io::{BufRead, Write};

use anyhow::Result;
use regex::Regex;
use rust_decimal::Decimal;
use strum::IntoEnumIterator;

use crate::{
    app::{
        Portfolio,
        utils::{parse_decimal, parse_optional_decimal, parse_quantity},
    },
    models::{InvestmentType, SearchQuery},
};

const PROMPT: &str = "> ";
const INVALID_QUANTITY_OR_PRICE: &str =
    "Error: Invalid input. Please enter valid numeric values for quantity and price.";
const INVALID_PRICE: &str = "Error: Invalid price. Please enter a valid number.";
const INVALID_PRICE_RANGE: &str =
    "Error: Invalid price input. Please enter valid numeric values for low and high prices.";

#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// Line-oriented front end over a `Portfolio`. Parses raw text, calls the ledger and
/// renders whatever it returns.
pub struct Shell {
    portfolio: Portfolio,
    tokenizer: Regex,
}

impl Shell {
    pub fn new(portfolio: Portfolio) -> Result<Self> {
        let tokenizer = Regex::new(r#"(\S*?)"([^"]*)"|(\S+)"#)?;
        Ok(Self {
            portfolio,
            tokenizer,
        })
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "Welcome to ePortfolio. Type 'help' for commands.")?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            match self.execute(&line?) {
                Reply::Quit => return Ok(()),
                Reply::Output(text) => {
                    if !text.is_empty() {
                        writeln!(output, "{}", text.trim_end())?;
                    }
                }
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        Ok(())
    }

    pub fn execute(&mut self, line: &str) -> Reply {
        let tokens = self.tokenize(line);
        let Some((command, args)) = tokens.split_first() else {
            return Reply::Output(String::new());
        };

        let output = match command.to_lowercase().as_str() {
            "buy" => self.buy(args),
            "sell" => self.sell(args),
            "update" => self.update(args),
            "search" => self.search(args),
            "gain" => self.gain(),
            "list" => self.list(),
            "history" => self.history(),
            "export" => self.export(),
            "help" => help(),
            "quit" | "exit" => return Reply::Quit,
            other => format!("Error: Unknown command '{}'. Type 'help' for commands.", other),
        };

        Reply::Output(output)
    }

    /// Splits on whitespace. A quoted run joins the text right before it,
    /// so `keywords="tech fund"` stays one token.
    fn tokenize(&self, line: &str) -> Vec<String> {
        self.tokenizer
            .captures_iter(line.trim())
            .map(|caps| match caps.get(3) {
                Some(bare) => bare.as_str().to_string(),
                None => {
                    let prefix = caps.get(1).map_or("", |m| m.as_str());
                    let quoted = caps.get(2).map_or("", |m| m.as_str().trim());
                    format!("{}{}", prefix, quoted)
                }
            })
            .collect()
    }

    fn buy(&mut self, args: &[String]) -> String {
        let [investment_type, symbol, name, quantity, price] = args else {
            return usage("buy <stock|mutualfund> <symbol> <name> <quantity> <price>");
        };
        let Ok((quantity, price)) = quantity_and_price(quantity, price) else {
            return INVALID_QUANTITY_OR_PRICE.to_string();
        };

        render(self.portfolio.buy(
            investment_type,
            symbol,
            name,
            quantity,
            price,
        ))
    }

    fn sell(&mut self, args: &[String]) -> String {
        let [symbol, quantity, price] = args else {
            return usage("sell <symbol> <quantity> <price>");
        };
        let Ok((quantity, price)) = quantity_and_price(quantity, price) else {
            return INVALID_QUANTITY_OR_PRICE.to_string();
        };

        render(self.portfolio.sell(symbol, quantity, price))
    }

    fn update(&mut self, args: &[String]) -> String {
        let [symbol, price] = args else {
            return usage("update <symbol> <price>");
        };
        let Ok(price) = parse_decimal(price, "price") else {
            return INVALID_PRICE.to_string();
        };

        render(self.portfolio.update_price(symbol, price))
    }

    fn search(&self, args: &[String]) -> String {
        let mut symbol = "";
        let mut keywords = "";
        let mut low = "";
        let mut high = "";

        for token in args {
            let Some((key, value)) = token.split_once('=') else {
                return usage("search [symbol=..] [keywords=..] [low=..] [high=..]");
            };
            match key.to_lowercase().as_str() {
                "symbol" => symbol = value,
                "keywords" => keywords = value,
                "low" => low = value,
                "high" => high = value,
                _ => return usage("search [symbol=..] [keywords=..] [low=..] [high=..]"),
            }
        }

        let (Ok(low), Ok(high)) = (
            parse_optional_decimal(low, "low price"),
            parse_optional_decimal(high, "high price"),
        ) else {
            return INVALID_PRICE_RANGE.to_string();
        };

        let query = SearchQuery::new(symbol, keywords).with_price_range(low, high);
        self.portfolio.search_with(&query).to_string()
    }

    fn gain(&self) -> String {
        if self.portfolio.is_empty() {
            return format!(
                "No investments to calculate gains.\nTotal gain: {:.2}",
                Decimal::ZERO
            );
        }

        let mut text = String::from("Gains by Investment:\n");
        for holding_gain in self.portfolio.gains() {
            text.push_str(&format!(
                "{} ({}): {:.2}\n",
                holding_gain.symbol(),
                holding_gain.investment_type(),
                holding_gain.gain()
            ));
        }
        text.push_str(&format!("Total gain: {:.2}", self.portfolio.total_gain()));
        text
    }

    fn list(&self) -> String {
        let holdings = self.portfolio.holdings();
        if holdings.is_empty() {
            return "No investments to display.".to_string();
        }

        holdings
            .iter()
            .enumerate()
            .map(|(i, holding)| {
                format!(
                    "{} of {}: {} quantity {} @ {:.2}, book value {:.2}",
                    i + 1,
                    holdings.len(),
                    holding,
                    holding.quantity(),
                    holding.price(),
                    holding.book_value()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn history(&self) -> String {
        let transactions = self.portfolio.transactions();
        if transactions.is_empty() {
            return "No transactions recorded.".to_string();
        }

        transactions
            .iter()
            .map(|transaction| transaction.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn export(&self) -> String {
        match serde_json::to_string_pretty(self.portfolio.holdings()) {
            Ok(json) => json,
            Err(err) => format!("Error: Failed to export holdings: {}", err),
        }
    }
}

fn quantity_and_price(quantity: &str, price: &str) -> Result<(i64, Decimal)> {
    Ok((parse_quantity(quantity)?, parse_decimal(price, "price")?))
}

fn render<T: std::fmt::Display, E: std::fmt::Display>(result: std::result::Result<T, E>) -> String {
    match result {
        Ok(outcome) => outcome.to_string(),
        Err(err) => err.to_string(),
    }
}

fn usage(text: &str) -> String {
    format!("Usage: {}", text)
}

fn help() -> String {
    let types = InvestmentType::iter()
        .map(|investment_type| investment_type.to_str().to_string())
        .collect::<Vec<_>>()
        .join("|");

    [
        "Commands:".to_string(),
        format!("  buy <{}> <symbol> <name> <quantity> <price>", types),
        "  sell <symbol> <quantity> <price>".to_string(),
        "  update <symbol> <price>".to_string(),
        "  search [symbol=..] [keywords=..] [low=..] [high=..]".to_string(),
        "  gain".to_string(),
        "  list".to_string(),
        "  history".to_string(),
        "  export".to_string(),
        "  quit".to_string(),
        "Quote names that contain spaces, e.g. \"Apple Inc\".".to_string(),
    ]
    .join("\n")
}
