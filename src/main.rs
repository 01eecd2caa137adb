use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use investment_ledger::app::{Cli, Config, Portfolio, Reply, Shell, replay_csv};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().merge(Cli::parse());

    let filter = EnvFilter::try_new(config.log_filter())
        .with_context(|| format!("Invalid log filter '{}'", config.log_filter()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut portfolio = Portfolio::new();

    if let Some(script) = config.script() {
        let summary = replay_csv(&mut portfolio, script)?;
        println!(
            "Replayed {}: {} applied, {} rejected",
            script.display(),
            summary.applied(),
            summary.rejected()
        );
    }

    let mut shell = Shell::new(portfolio)?;

    if *config.batch() {
        for line in ["list", "gain"] {
            if let Reply::Output(text) = shell.execute(line) {
                println!("{}", text);
            }
        }
        return Ok(());
    }

    shell.run(io::stdin().lock(), io::stdout())
}
