//! Reads a receipt file, mines its largest frequent itemsets and prints them.

use anyhow::{Context, Result};
use apriori::levelwise::{read_receipts_from_path, AprioriMiner};
use apriori::Args;
use clap::Parser;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = read_receipts_from_path(&args.path, args.strict)
        .with_context(|| format!("Failed to load receipts from {}", args.path.display()))?;
    println!("Loaded {} transactions", store.len());

    let start_time = Instant::now();
    let miner = AprioriMiner::new(args.miner_config());
    let level = miner.mine(&store, args.min_support)?;

    if args.verbose {
        println!("Mining completed in {:.2?} ({} rounds)", start_time.elapsed(), level.rounds);
    }

    if level.is_empty() {
        println!("No itemsets reach support {}", args.min_support);
        return Ok(());
    }

    println!(
        "{} frequent itemsets of size {}:",
        level.len(),
        level.itemset_size
    );
    for (itemset, count) in level.iter() {
        let support = count as f64 / level.num_transactions as f64;
        println!("{{{}}}  support={:.3}", store.labels_of(itemset).join(", "), support);
    }

    Ok(())
}
