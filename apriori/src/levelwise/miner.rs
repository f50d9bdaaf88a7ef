use super::candidates::{next_generation, seed_generation};
use super::config::MinerConfig;
use super::error::{validate_support, MiningError};
use super::itemset::Itemset;
use super::storage::FrequentLevel;
use super::support::frequent_itemsets;
use super::transactions::TransactionStore;
use tracing::{debug, info, instrument};

/// Level-wise frequent itemset miner.
///
/// Each round counts the support of one generation of candidates, keeps the
/// frequent ones and joins them into the next, larger generation. The run ends
/// at the first round without survivors and reports the survivors of the
/// round before it.
#[derive(Debug, Clone, Default)]
pub struct AprioriMiner {
    config: MinerConfig,
}

impl AprioriMiner {
    pub fn new(config: MinerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Mines the largest frequent itemsets of `store`.
    ///
    /// An itemset is frequent when it is contained in at least
    /// `min_support * store.len()` transactions. An empty store yields an
    /// empty result.
    #[instrument(skip(self, store), fields(transactions = store.len()))]
    pub fn mine(&self, store: &TransactionStore, min_support: f64) -> Result<FrequentLevel, MiningError> {
        validate_support(min_support)?;

        let num_transactions = store.len();
        if num_transactions == 0 {
            debug!("no transactions, nothing to mine");
            return Ok(FrequentLevel::empty(0));
        }

        let parallel = self.config.parallel;
        let mut best = FrequentLevel::empty(num_transactions);
        let mut generation = seed_generation(store);
        let mut itemset_size = 1;
        let mut rounds = 0;

        while !generation.is_empty() {
            let candidates: Vec<Itemset> = generation.into_iter().collect();
            let num_candidates = candidates.len();
            let survivors = frequent_itemsets(store, candidates, min_support, parallel);
            rounds += 1;

            debug!(
                itemset_size,
                candidates = num_candidates,
                survivors = survivors.len(),
                "support pass finished"
            );

            if survivors.is_empty() {
                break;
            }

            best = FrequentLevel::from_survivors(itemset_size, num_transactions, survivors);
            if self.config.reached_max_size(itemset_size) {
                debug!(itemset_size, "itemset size limit reached");
                break;
            }

            generation = next_generation(best.itemsets(), self.config.join, parallel);
            itemset_size += 1;
        }

        best.rounds = rounds;
        info!(
            itemset_size = best.itemset_size,
            itemsets = best.len(),
            rounds,
            "mining finished"
        );
        Ok(best)
    }
}

/// Mines raw token transactions with the default configuration and returns
/// the largest frequent itemsets as sorted token lists.
pub fn mine<T, I, S>(transactions: T, min_support: f64) -> Result<Vec<Vec<String>>, MiningError>
where
    T: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let store: TransactionStore = transactions.into_iter().collect();
    let level = AprioriMiner::default().mine(&store, min_support)?;
    Ok(level.to_token_sets(&store))
}
