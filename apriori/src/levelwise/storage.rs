use super::itemset::Itemset;
use super::transactions::TransactionStore;

/// Survivors of the last round that produced any frequent itemsets.
///
/// Only itemsets of the largest frequent size are kept. Smaller itemsets are
/// frequent as well but are not reported.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentLevel {
    pub itemset_size: usize,
    pub num_transactions: usize,
    /// Support passes run.
    pub rounds: usize,
    itemsets: Vec<Itemset>,
    supports: Vec<usize>,
}

impl FrequentLevel {
    pub fn empty(num_transactions: usize) -> Self {
        Self {
            itemset_size: 0,
            num_transactions,
            rounds: 0,
            itemsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    /// Builds a level from `(itemset, support count)` pairs; stored in
    /// ascending itemset order.
    pub fn from_survivors(
        itemset_size: usize,
        num_transactions: usize,
        mut survivors: Vec<(Itemset, usize)>,
    ) -> Self {
        survivors.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        debug_assert!(survivors.iter().all(|(set, _)| set.len() == itemset_size));
        let (itemsets, supports) = survivors.into_iter().unzip();
        Self {
            itemset_size,
            num_transactions,
            rounds: 0,
            itemsets,
            supports,
        }
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn itemsets(&self) -> &[Itemset] {
        &self.itemsets
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, usize)> {
        self.itemsets.iter().zip(self.supports.iter().copied())
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.itemsets.binary_search(itemset).is_ok()
    }

    pub fn support_count(&self, itemset: &Itemset) -> Option<usize> {
        self.itemsets
            .binary_search(itemset)
            .ok()
            .map(|idx| self.supports[idx])
    }

    /// Support fraction of a reported itemset.
    pub fn support(&self, itemset: &Itemset) -> Option<f64> {
        self.support_count(itemset)
            .map(|count| count as f64 / self.num_transactions as f64)
    }

    /// Itemsets as sorted token lists, themselves sorted.
    pub fn to_token_sets(&self, store: &TransactionStore) -> Vec<Vec<String>> {
        let mut sets: Vec<Vec<String>> = self
            .itemsets
            .iter()
            .map(|itemset| store.labels_of(itemset))
            .collect();
        sets.sort();
        sets
    }
}
