use std::collections::{BTreeMap, BTreeSet};

use frequents::itemset::{confidence, get_frequent_itemsets, get_frequent_itemsets_with, support_of};
use frequents::sequence::{self, get_frequent_sequences};
use frequents::{
    FrequentPatterns, Itemset, ItemsetCorpus, MiningConfig, PruningMode, Sequence, SequenceCorpus,
};
use proptest::prelude::*;

fn transactions() -> impl Strategy<Value = ItemsetCorpus<u8>> {
    prop::collection::vec(prop::collection::vec(0u8..6, 0..5), 1..12)
        .prop_map(|rows| rows.into_iter().map(Itemset::new).collect())
}

fn records() -> impl Strategy<Value = SequenceCorpus<u8>> {
    prop::collection::vec(
        prop::collection::vec(prop::collection::vec(0u8..4, 1..3), 0..6),
        1..8,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|row| row.into_iter().map(Itemset::new).collect::<Sequence<u8>>())
            .collect()
    })
}

fn items() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..8, 0..4)
}

fn pattern_set<P: Ord>(patterns: FrequentPatterns<P>) -> BTreeSet<P> {
    patterns.into_parts().0.into_iter().collect()
}

fn support_map<P: Ord + Clone>(patterns: &FrequentPatterns<P>) -> BTreeMap<P, f64> {
    patterns
        .iter()
        .map(|(pattern, support)| (pattern.clone(), support))
        .collect()
}

fn min_support() -> impl Strategy<Value = f64> {
    (1u32..=10).prop_map(|tenths| tenths as f64 / 10.0)
}

fn brute_force_itemsets(
    corpus: &ItemsetCorpus<u8>,
    min_support: f64,
) -> BTreeMap<Itemset<u8>, f64> {
    let items = corpus.items();
    let mut frequent = BTreeMap::new();
    for mask in 1u32..(1 << items.len()) {
        let itemset: Itemset<u8> = items
            .iter()
            .enumerate()
            .filter(|&(idx, _)| mask & (1 << idx) != 0)
            .map(|(_, &item)| item)
            .collect();
        let support = support_of(corpus, &itemset).unwrap();
        if support >= min_support {
            frequent.insert(itemset, support);
        }
    }
    frequent
}

/// Every single-item-per-position pattern occurring in lock-step somewhere
/// in `record`.
fn lockstep_patterns(record: &Sequence<u8>) -> BTreeSet<Sequence<u8>> {
    let elements = record.as_slice();
    let mut patterns = BTreeSet::new();
    for start in 0..elements.len() {
        let mut partial: Vec<Vec<u8>> = vec![Vec::new()];
        for element in &elements[start..] {
            partial = partial
                .iter()
                .flat_map(|pattern| {
                    element.iter().map(move |&item| {
                        let mut grown = pattern.clone();
                        grown.push(item);
                        grown
                    })
                })
                .collect();
            for pattern in &partial {
                patterns.insert(Sequence::from_items(pattern.iter().copied()));
            }
        }
    }
    patterns
}

fn brute_force_sequences(
    corpus: &SequenceCorpus<u8>,
    min_support: f64,
) -> BTreeMap<Sequence<u8>, f64> {
    let mut counts: BTreeMap<Sequence<u8>, usize> = BTreeMap::new();
    for record in corpus.iter() {
        for pattern in lockstep_patterns(record) {
            *counts.entry(pattern).or_insert(0) += 1;
        }
    }
    let num_records = corpus.len() as f64;
    counts
        .into_iter()
        .map(|(pattern, count)| (pattern, count as f64 / num_records))
        .filter(|&(_, support)| support >= min_support)
        .collect()
}

proptest! {
    #[test]
    fn support_is_a_fraction(corpus in transactions(), items in items()) {
        let support = support_of(&corpus, &Itemset::new(items)).unwrap();
        prop_assert!((0.0..=1.0).contains(&support));
        prop_assert_eq!(support_of(&corpus, &Itemset::empty()).unwrap(), 1.0);
    }

    #[test]
    fn confidence_is_zero_without_antecedent(corpus in transactions(), items in items()) {
        // Item 42 never occurs, so the antecedent has support 0.
        let antecedent = Itemset::new(vec![42u8, 1]);
        let conf = confidence(&corpus, &antecedent, &Itemset::new(items)).unwrap();
        prop_assert_eq!(conf, 0.0);
    }

    #[test]
    fn apriori_finds_exactly_the_frequent_itemsets(
        corpus in transactions(),
        min_support in min_support()
    ) {
        let found = get_frequent_itemsets(&corpus, min_support).unwrap();
        prop_assert_eq!(support_map(&found), brute_force_itemsets(&corpus, min_support));
    }

    #[test]
    fn all_subsets_pruning_finds_exactly_the_frequent_itemsets(
        corpus in transactions(),
        min_support in min_support()
    ) {
        let config = MiningConfig::new(min_support).with_pruning(PruningMode::AllSubsets);
        let found = get_frequent_itemsets_with(&corpus, &config).unwrap();
        prop_assert_eq!(support_map(&found), brute_force_itemsets(&corpus, min_support));
    }

    #[test]
    fn every_item_of_a_frequent_itemset_is_frequent(
        corpus in transactions(),
        min_support in min_support()
    ) {
        let found = get_frequent_itemsets(&corpus, min_support).unwrap();
        for (itemset, _) in found.iter() {
            for item in itemset {
                let single = support_of(&corpus, &Itemset::singleton(*item)).unwrap();
                prop_assert!(single >= min_support);
            }
        }
    }

    #[test]
    fn raising_min_support_never_adds_itemsets(
        corpus in transactions(),
        low in min_support(),
        high in min_support()
    ) {
        prop_assume!(low <= high);
        let low_set = pattern_set(get_frequent_itemsets(&corpus, low).unwrap());
        let high_set = pattern_set(get_frequent_itemsets(&corpus, high).unwrap());
        prop_assert!(high_set.is_subset(&low_set));
    }

    #[test]
    fn projected_support_equals_direct_support(corpus in records(), min_support in min_support()) {
        let found = get_frequent_sequences(&corpus, min_support).unwrap();
        for (pattern, projected) in found.iter() {
            prop_assert_eq!(sequence::support_of(&corpus, pattern).unwrap(), projected);
        }
    }

    #[test]
    fn prefix_growth_finds_exactly_the_frequent_sequences(
        corpus in records(),
        min_support in min_support()
    ) {
        let found = get_frequent_sequences(&corpus, min_support).unwrap();
        prop_assert_eq!(support_map(&found), brute_force_sequences(&corpus, min_support));
    }

    #[test]
    fn raising_min_support_never_adds_sequences(
        corpus in records(),
        low in min_support(),
        high in min_support()
    ) {
        prop_assume!(low <= high);
        let low_set = pattern_set(get_frequent_sequences(&corpus, low).unwrap());
        let high_set = pattern_set(get_frequent_sequences(&corpus, high).unwrap());
        prop_assert!(high_set.is_subset(&low_set));
    }
}
