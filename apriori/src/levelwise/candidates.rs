use super::config::JoinStrategy;
use super::itemset::Itemset;
use super::transactions::TransactionStore;
use rayon::prelude::*;
use std::collections::HashSet;

/// All itemsets of one cardinality considered in a single round.
pub type Generation = HashSet<Itemset>;

/// Singleton itemsets for every item occurring in the store.
pub fn seed_generation(store: &TransactionStore) -> Generation {
    store
        .distinct_items()
        .into_iter()
        .map(Itemset::singleton)
        .collect()
}

pub fn next_generation(frequent: &[Itemset], join: JoinStrategy, parallel: bool) -> Generation {
    match join {
        JoinStrategy::Pairwise => join_pairwise(frequent, parallel),
        JoinStrategy::Prefix => join_prefix(frequent),
    }
}

/// For every ordered pair `(a, b)` with exactly one item in `b \ a`, emits
/// `a` extended by that item. Pairs with `a == b` have an empty difference and
/// emit nothing.
pub fn join_pairwise(frequent: &[Itemset], parallel: bool) -> Generation {
    let extend = |a: &Itemset| -> Vec<Itemset> {
        frequent
            .iter()
            .filter_map(|b| a.single_difference(b).map(|item| a.with_item(item)))
            .collect()
    };

    if parallel {
        frequent.par_iter().flat_map_iter(extend).collect()
    } else {
        frequent.iter().flat_map(extend).collect()
    }
}

/// Classical Apriori join: itemsets agreeing on all but their last item are
/// merged, then candidates with any infrequent immediate subset are dropped.
pub fn join_prefix(frequent: &[Itemset]) -> Generation {
    let mut sorted = frequent.to_vec();
    sorted.sort_unstable();
    let known: HashSet<&Itemset> = sorted.iter().collect();

    let mut generation = Generation::new();
    for (i, a) in sorted.iter().enumerate() {
        for b in &sorted[i + 1..] {
            if !a.shares_prefix(b) {
                break;
            }
            let Some(last) = b.last() else { continue };
            let candidate = a.with_item(last);
            if candidate
                .immediate_subsets()
                .all(|subset| known.contains(&subset))
            {
                generation.insert(candidate);
            }
        }
    }
    generation
}
