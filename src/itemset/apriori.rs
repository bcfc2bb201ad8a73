use ahash::AHashSet;
use log::{debug, trace};

use super::combinations::{combination_count, for_each_combination};
use super::storage::{flatten_levels, FrequentLevel};
use super::support::{count_candidates, non_empty_len};
use crate::config::{MiningConfig, PruningMode};
use crate::corpus::{distinct_items, ItemsetCorpus};
use crate::error::{check_min_support, MiningError, Result};
use crate::patterns::FrequentPatterns;
use crate::types::{Item, Itemset};

/// One Apriori level: every size-`k` itemset with support >= `min_support`.
///
/// Candidates are drawn from the items of `frequent_sub_itemsets` when given,
/// otherwise from every item in the corpus. With a previous level supplied, a
/// candidate survives pruning if it contains at least one of those itemsets.
pub fn mine<T: Item>(
    corpus: &ItemsetCorpus<T>,
    min_support: f64,
    k: usize,
    frequent_sub_itemsets: Option<&[Itemset<T>]>,
) -> Result<FrequentLevel<T>> {
    mine_level(corpus, min_support, k, frequent_sub_itemsets, PruningMode::AnySubset)
}

pub fn mine_level<T: Item>(
    corpus: &ItemsetCorpus<T>,
    min_support: f64,
    k: usize,
    frequent_sub_itemsets: Option<&[Itemset<T>]>,
    pruning: PruningMode,
) -> Result<FrequentLevel<T>> {
    check_min_support(min_support)?;
    if k < 1 {
        return Err(MiningError::InvalidArgument(format!(
            "itemset size k must be at least 1, got {}",
            k
        )));
    }
    let num_transactions = non_empty_len(corpus)?;

    let universe = match frequent_sub_itemsets {
        Some(previous) => distinct_items(previous.iter()),
        None => corpus.items(),
    };
    let candidates = generate_candidates(&universe, k, frequent_sub_itemsets, pruning);
    debug!(
        "apriori level {}: {} items, {} of {} combinations survive pruning",
        k,
        universe.len(),
        candidates.len(),
        combination_count(universe.len(), k)
    );

    let counts = count_candidates(corpus, &candidates);
    let mut level = FrequentLevel::new(k);
    for (candidate, count) in candidates.into_iter().zip(counts) {
        let support = count as f64 / num_transactions as f64;
        if support >= min_support {
            trace!("frequent itemset {:?} support {}", candidate, support);
            level.add_itemset(candidate, support);
        }
    }
    debug!("apriori level {}: {} frequent itemsets", k, level.len());
    Ok(level)
}

fn generate_candidates<T: Item>(
    universe: &[T],
    k: usize,
    previous: Option<&[Itemset<T>]>,
    pruning: PruningMode,
) -> Vec<Itemset<T>> {
    let previous_lookup: Option<AHashSet<&Itemset<T>>> = match (previous, pruning) {
        (Some(previous), PruningMode::AllSubsets) => Some(previous.iter().collect()),
        _ => None,
    };

    let mut candidates = Vec::new();
    for_each_combination(universe, k, |combination| {
        // The universe is sorted and distinct, so the combination already is.
        let candidate = Itemset::new(combination.iter().cloned());
        let survives = match (previous, &previous_lookup) {
            (None, _) => true,
            (Some(_), Some(lookup)) => candidate
                .drop_one_subsets()
                .all(|subset| lookup.contains(&subset)),
            (Some(previous), None) => previous
                .iter()
                .any(|frequent| frequent.is_subset(&candidate)),
        };
        if survives {
            candidates.push(candidate);
        }
    });
    candidates
}

/// Frequent itemsets of every size, level by level, until a level comes up
/// empty. Patterns and supports are returned index-matched in level order.
pub fn get_frequent_itemsets<T: Item>(
    corpus: &ItemsetCorpus<T>,
    min_support: f64,
) -> Result<FrequentPatterns<Itemset<T>>> {
    get_frequent_itemsets_with(corpus, &MiningConfig::new(min_support))
}

pub fn get_frequent_itemsets_with<T: Item>(
    corpus: &ItemsetCorpus<T>,
    config: &MiningConfig,
) -> Result<FrequentPatterns<Itemset<T>>> {
    Ok(flatten_levels(mine_levels(corpus, config)?))
}

pub fn mine_levels<T: Item>(
    corpus: &ItemsetCorpus<T>,
    config: &MiningConfig,
) -> Result<Vec<FrequentLevel<T>>> {
    config.validate()?;
    non_empty_len(corpus)?;

    let mut levels: Vec<FrequentLevel<T>> = Vec::new();
    let mut k = 1;
    while config.allows_len(k) {
        let previous = levels.last().map(FrequentLevel::itemsets);
        let level = mine_level(corpus, config.min_support, k, previous, config.pruning)?;
        if level.is_empty() {
            break;
        }
        levels.push(level);
        k += 1;
    }

    debug!(
        "apriori finished: {} levels, {} frequent itemsets",
        levels.len(),
        levels.iter().map(FrequentLevel::len).sum::<usize>()
    );
    Ok(levels)
}
