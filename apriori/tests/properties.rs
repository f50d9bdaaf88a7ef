use apriori::levelwise::{count_support, JoinStrategy};
use apriori::{AprioriMiner, Itemset, MinerConfig, TransactionStore};
use proptest::prelude::*;

const ITEMS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn transactions() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    prop::collection::vec(prop::sample::subsequence(ITEMS.to_vec(), 0..=ITEMS.len()), 1..12)
}

fn support() -> impl Strategy<Value = f64> {
    (1u32..=10).prop_map(|step| step as f64 / 10.0)
}

proptest! {
    #[test]
    fn reported_itemsets_meet_threshold(txs in transactions(), min_support in support()) {
        let store: TransactionStore = txs.into_iter().collect();
        let level = AprioriMiner::default().mine(&store, min_support).unwrap();

        let counts = count_support(&store, level.itemsets(), false);
        for (itemset, count) in level.iter() {
            prop_assert_eq!(itemset.len(), level.itemset_size);
            prop_assert!(count as f64 / store.len() as f64 >= min_support);
        }
        let reported: Vec<usize> = level.iter().map(|(_, count)| count).collect();
        prop_assert_eq!(counts, reported);
    }

    #[test]
    fn supersets_are_never_more_frequent(
        txs in transactions(),
        // 0: in neither set, 1: superset only, 2: both
        membership in prop::collection::vec(0u8..3, ITEMS.len()),
    ) {
        let store: TransactionStore = txs.into_iter().collect();
        let items = store.distinct_items();

        let pick = |min: u8| -> Itemset {
            Itemset::new(
                items
                    .iter()
                    .zip(&membership)
                    .filter(|&(_, &m)| m >= min)
                    .map(|(&item, _)| item)
                    .collect(),
            )
        };
        let subset = pick(2);
        let superset = pick(1);
        prop_assert!(subset.items().iter().all(|&item| superset.contains(item)));

        let counts = count_support(&store, &[subset, superset], false);
        prop_assert!(counts[1] <= counts[0]);
    }

    #[test]
    fn no_larger_itemset_is_frequent(txs in transactions(), min_support in support()) {
        let store: TransactionStore = txs.into_iter().collect();
        let level = AprioriMiner::default().mine(&store, min_support).unwrap();
        prop_assume!(!level.is_empty());

        let extended: Vec<Itemset> = level
            .itemsets()
            .iter()
            .flat_map(|set| {
                store
                    .distinct_items()
                    .into_iter()
                    .filter(|&item| !set.contains(item))
                    .map(|item| set.with_item(item))
                    .collect::<Vec<_>>()
            })
            .collect();
        let counts = count_support(&store, &extended, false);
        for count in counts {
            prop_assert!((count as f64 / store.len() as f64) < min_support);
        }
    }

    #[test]
    fn join_strategies_and_threading_agree(txs in transactions(), min_support in support()) {
        let store: TransactionStore = txs.into_iter().collect();

        let baseline = AprioriMiner::default().mine(&store, min_support).unwrap();
        let sequential = AprioriMiner::new(MinerConfig::new().with_parallel(false))
            .mine(&store, min_support)
            .unwrap();
        let prefix = AprioriMiner::new(MinerConfig::new().with_join(JoinStrategy::Prefix))
            .mine(&store, min_support)
            .unwrap();

        prop_assert_eq!(baseline.itemsets(), sequential.itemsets());
        prop_assert_eq!(baseline.itemsets(), prefix.itemsets());
    }
}
