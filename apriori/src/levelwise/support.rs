use super::itemset::Itemset;
use super::transactions::TransactionStore;
use rayon::prelude::*;

/// Number of transactions containing each candidate, index-aligned with
/// `candidates`. Each count is computed independently.
pub fn count_support(store: &TransactionStore, candidates: &[Itemset], parallel: bool) -> Vec<usize> {
    let count = |candidate: &Itemset| {
        store
            .iter()
            .filter(|transaction| transaction.contains_all(candidate))
            .count()
    };

    if parallel {
        candidates.par_iter().map(count).collect()
    } else {
        candidates.iter().map(count).collect()
    }
}

/// Inclusive threshold test. An empty store satisfies nothing.
pub fn meets_threshold(count: usize, num_transactions: usize, min_support: f64) -> bool {
    num_transactions > 0 && count as f64 / num_transactions as f64 >= min_support
}

/// Candidates whose support reaches `min_support`, paired with their counts.
pub fn frequent_itemsets(
    store: &TransactionStore,
    candidates: Vec<Itemset>,
    min_support: f64,
    parallel: bool,
) -> Vec<(Itemset, usize)> {
    let counts = count_support(store, &candidates, parallel);
    let num_transactions = store.len();

    candidates
        .into_iter()
        .zip(counts)
        .filter(|&(_, count)| meets_threshold(count, num_transactions, min_support))
        .collect()
}
