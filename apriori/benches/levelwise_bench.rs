use apriori::levelwise::JoinStrategy;
use apriori::{AprioriMiner, MinerConfig, TransactionStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Binary matrix of `num_transactions` rows over `num_items` columns. Row
/// sizes are uniform in `1..=max_basket` and low column indices are drawn more
/// often (squared uniform), so a few items dominate like best sellers do.
fn basket_matrix(num_transactions: usize, num_items: usize, max_basket: usize) -> TransactionStore {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut matrix = Array2::<i32>::zeros((num_transactions, num_items));

    for mut row in matrix.rows_mut() {
        let basket = rng.gen_range(1..=max_basket.min(num_items));
        for _ in 0..basket {
            let skew: f64 = rng.gen::<f64>().powi(2);
            row[(skew * num_items as f64) as usize % num_items] = 1;
        }
    }

    TransactionStore::from_matrix(matrix.view())
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");
    let miner = AprioriMiner::default();

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 30, 8),
        ("large_1000tx", 1000, 40, 10),
    ];

    for (name, num_tx, num_items, max_basket) in configs {
        let store = basket_matrix(num_tx, num_items, max_basket);

        group.bench_with_input(BenchmarkId::from_parameter(name), &store, |b, store| {
            b.iter(|| miner.mine(black_box(store), black_box(0.1)));
        });
    }

    group.finish();
}

fn bench_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_min_support");
    let miner = AprioriMiner::default();
    let store = basket_matrix(1000, 30, 8);

    for &min_sup in &[0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| miner.mine(black_box(&store), black_box(sup)));
            },
        );
    }

    group.finish();
}

/// Pairwise against prefix join, single- and multi-threaded
fn bench_join_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_join_strategy");
    let store = basket_matrix(1000, 30, 10);

    let variants = vec![
        ("pairwise_parallel", JoinStrategy::Pairwise, true),
        ("pairwise_sequential", JoinStrategy::Pairwise, false),
        ("prefix_parallel", JoinStrategy::Prefix, true),
        ("prefix_sequential", JoinStrategy::Prefix, false),
    ];

    for (name, join, parallel) in variants {
        let miner = AprioriMiner::new(MinerConfig::new().with_join(join).with_parallel(parallel));
        group.bench_with_input(BenchmarkId::from_parameter(name), &store, |b, store| {
            b.iter(|| miner.mine(black_box(store), black_box(0.15)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scaling, bench_min_support, bench_join_strategy);
criterion_main!(benches);
