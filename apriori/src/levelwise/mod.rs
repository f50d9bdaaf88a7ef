pub mod candidates;
pub mod config;
pub mod error;
pub mod itemset;
pub mod miner;
pub mod parse;
pub mod storage;
pub mod support;
pub mod transactions;


pub use candidates::{join_pairwise, join_prefix, next_generation, seed_generation, Generation};
pub use config::{JoinStrategy, MinerConfig, DEFAULT_MIN_SUPPORT};
pub use error::{validate_support, MiningError, ParseError};
pub use itemset::{ItemId, Itemset};
pub use miner::{mine, AprioriMiner};
pub use parse::{parse_receipt, read_receipts, read_receipts_from_path, read_receipts_strict};
pub use storage::FrequentLevel;
pub use support::{count_support, frequent_itemsets, meets_threshold};
pub use transactions::{Transaction, TransactionStore};
