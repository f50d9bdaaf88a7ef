//! Command-line interface definitions

use crate::levelwise::{validate_support, JoinStrategy, MinerConfig, DEFAULT_MIN_SUPPORT};
use clap::{Parser, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Find the largest frequent itemsets in a receipt file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Receipt file, one `[item, item, ...]` transaction per line
    pub path: PathBuf,

    /// Minimum support as a fraction of all transactions
    #[arg(default_value_t = DEFAULT_MIN_SUPPORT, value_parser = parse_support)]
    pub min_support: f64,

    /// Candidate join used between rounds
    #[arg(long, value_enum, default_value_t = JoinArg::Pairwise)]
    pub join: JoinArg,

    /// Run support counting on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Stop once itemsets reach this size
    #[arg(long)]
    pub max_size: Option<NonZeroUsize>,

    /// Fail on lines that are not receipts instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JoinArg {
    Pairwise,
    Prefix,
}

impl From<JoinArg> for JoinStrategy {
    fn from(arg: JoinArg) -> Self {
        match arg {
            JoinArg::Pairwise => JoinStrategy::Pairwise,
            JoinArg::Prefix => JoinStrategy::Prefix,
        }
    }
}

impl Args {
    pub fn miner_config(&self) -> MinerConfig {
        let config = MinerConfig::new()
            .with_join(self.join.into())
            .with_parallel(!self.sequential);
        match self.max_size {
            Some(size) => config.with_max_itemset_size(size),
            None => config,
        }
    }
}

fn parse_support(value: &str) -> Result<f64, String> {
    let support: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    validate_support(support).map_err(|e| e.to_string())?;
    Ok(support)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levelwise::MiningError;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["apriori", "receipts.txt"]).unwrap();
        assert_eq!(args.min_support, DEFAULT_MIN_SUPPORT);
        assert_eq!(args.miner_config(), MinerConfig::default());
    }

    #[test]
    fn test_flags_map_onto_config() {
        let args = Args::try_parse_from([
            "apriori",
            "receipts.txt",
            "0.25",
            "--join",
            "prefix",
            "--sequential",
            "--max-size",
            "3",
        ])
        .unwrap();

        let config = args.miner_config();
        assert_eq!(args.min_support, 0.25);
        assert_eq!(config.join, JoinStrategy::Prefix);
        assert!(!config.parallel);
        assert_eq!(config.max_itemset_size, NonZeroUsize::new(3));
    }

    #[test]
    fn test_support_out_of_range_rejected() {
        assert!(Args::try_parse_from(["apriori", "receipts.txt", "1.5"]).is_err());
        assert!(Args::try_parse_from(["apriori", "receipts.txt", "abc"]).is_err());
    }

    #[test]
    fn test_support_error_matches_miner() {
        let err = parse_support("-0.1").unwrap_err();
        assert_eq!(err, MiningError::InvalidSupport { value: -0.1 }.to_string());
        assert_eq!(parse_support("0"), Ok(0.0));
    }
}
