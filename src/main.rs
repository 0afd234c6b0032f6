use anyhow::Result;
use clap::Parser;

use spendlog::cli;
use spendlog::ledger::Ledger;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based personal expense ledger with per-category budgets",
    long_about = "spendlog is an interactive expense tracker for the terminal. \
                  It records spending events, enforces per-category budget \
                  limits, and persists the ledger to a flat text file between \
                  sessions."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let mut ledger = Ledger::new();
    cli::run(&mut ledger)?;

    Ok(())
}
