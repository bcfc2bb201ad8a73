use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::Rng;

use frequents::itemset::get_frequent_itemsets;
use frequents::sequence::{get_frequent_sequences, join_growth};
use frequents::{ItemsetCorpus, SequenceCorpus};

/// Random one-hot basket matrix.
///
/// Each transaction draws about `avg_transaction_size` items, each kept with
/// probability `density`.
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Array2<i32> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx =
            (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.r#gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    Array2::from_shape_vec((num_transactions, num_items), data).unwrap()
}

/// Random token streams over a vocabulary of `vocabulary` words.
fn generate_records(num_records: usize, vocabulary: usize, avg_len: usize) -> SequenceCorpus<u32> {
    let mut rng = rand::thread_rng();
    (0..num_records)
        .map(|_| {
            let len = rng.gen_range(1..=avg_len * 2);
            (0..len).map(|_| rng.gen_range(0..vocabulary as u32)).collect::<Vec<_>>()
        })
        .map(frequents::Sequence::from_items)
        .collect()
}

fn bench_apriori_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 30, 8),
        ("large_1000tx", 1000, 40, 10),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let matrix = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let corpus = ItemsetCorpus::from_dense(matrix.view());

        group.bench_with_input(BenchmarkId::from_parameter(name), &corpus, |b, corpus| {
            b.iter(|| get_frequent_itemsets(black_box(corpus), black_box(0.1)));
        });
    }

    group.finish();
}

fn bench_apriori_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_min_support");

    let corpus = ItemsetCorpus::from_dense(generate_transactions(1000, 30, 8, 0.7).view());

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| get_frequent_itemsets(black_box(&corpus), black_box(sup)));
            },
        );
    }

    group.finish();
}

fn bench_prefix_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_growth");

    let configs = vec![
        ("reviews_200", 200, 50, 8),
        ("reviews_1000", 1000, 100, 12),
        ("reviews_5000", 5000, 200, 12),
    ];

    for (name, num_records, vocabulary, avg_len) in configs {
        let corpus = generate_records(num_records, vocabulary, avg_len);

        group.bench_with_input(BenchmarkId::from_parameter(name), &corpus, |b, corpus| {
            b.iter(|| get_frequent_sequences(black_box(corpus), black_box(0.05)));
        });
    }

    group.finish();
}

fn bench_join_vs_prefix_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_strategies");

    let corpus = generate_records(1000, 60, 10);

    group.bench_function("prefix_growth", |b| {
        b.iter(|| get_frequent_sequences(black_box(&corpus), black_box(0.1)));
    });
    group.bench_function("join_growth", |b| {
        b.iter(|| join_growth(black_box(&corpus), black_box(0.1)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_apriori_scaling,
    bench_apriori_min_support,
    bench_prefix_growth,
    bench_join_vs_prefix_growth
);
criterion_main!(benches);
