//! Level-wise (Apriori) frequent itemset mining.
//!
//! [`levelwise::AprioriMiner`] runs rounds over growing itemset sizes and
//! reports the survivors of the last round that had any: the largest
//! frequent itemsets only. Smaller frequent itemsets are discarded.

pub mod cli;
pub mod levelwise;

#[cfg(feature = "python")]
mod python;

pub use cli::Args;
pub use levelwise::{mine, AprioriMiner, FrequentLevel, Itemset, MinerConfig, MiningError, TransactionStore};
