use std::{env, path::PathBuf};

use clap::Parser;
use derive_getters::Getters;

pub const SCRIPT_VAR: &str = "LEDGER_SCRIPT";
pub const LOG_VAR: &str = "LEDGER_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, Default, Parser)]
#[command(name = "investment-ledger", version, about)]
pub struct Cli {
    /// CSV of ledger commands to replay before the prompt opens
    #[arg(long)]
    pub script: Option<String>,

    /// Replay the script, print the holdings and exit
    #[arg(long)]
    pub batch: bool,

    /// Log filter, e.g. "info" or "investment_ledger=debug"
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct Config {
    script: Option<PathBuf>,
    log_filter: String,
    batch: bool,
}

impl Config {
    /// Reads `.env` and the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_values(env::var(SCRIPT_VAR).ok(), env::var(LOG_VAR).ok())
    }

    pub fn from_values(script: Option<String>, log_filter: Option<String>) -> Self {
        Self {
            script: script.filter(|s| !s.trim().is_empty()).map(expand_path),
            log_filter: log_filter
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            batch: false,
        }
    }

    /// Command line flags win over the environment.
    pub fn merge(mut self, cli: Cli) -> Self {
        if let Some(script) = cli.script {
            self.script = Some(expand_path(script));
        }
        if let Some(log) = cli.log {
            self.log_filter = log;
        }
        self.batch = cli.batch;
        self
    }
}

fn expand_path(path: String) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path).into_owned())
}
