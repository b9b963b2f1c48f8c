//! Command-line front end: load a membership table, mine it, print both
//! result tables.

use std::path::PathBuf;

use anyhow::{Context, Result};
use apriori::{
    config::{DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_SUPPORT},
    load_transactions,
    loader::DEFAULT_MARKER,
    mine, report, MiningConfig,
};
use clap::Parser;
use tracing::Level;

/// Mine frequent itemsets and association rules with Apriori
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file whose header lists the items and whose cells mark membership
    #[arg(short, long, default_value = "data/supermarket.csv")]
    input: PathBuf,

    /// Minimum support, in (0, 1]
    #[arg(short = 's', long, default_value_t = DEFAULT_MIN_SUPPORT)]
    min_support: f64,

    /// Minimum confidence, in (0, 1]
    #[arg(short = 'c', long, default_value_t = DEFAULT_MIN_CONFIDENCE)]
    min_confidence: f64,

    /// Cell value meaning "item is in this transaction"
    #[arg(short, long, default_value = DEFAULT_MARKER)]
    marker: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config = MiningConfig::new(args.min_support, args.min_confidence)
        .context("invalid thresholds")?;

    let transactions = load_transactions(&args.input, &args.marker)
        .with_context(|| format!("cannot load {}", args.input.display()))?;

    let result = mine(&transactions, &config).context("mining failed")?;

    print!(
        "{}",
        report::render(&result.frequent_itemsets, &result.rules, &transactions)
    );

    Ok(())
}
