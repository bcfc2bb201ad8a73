use ahash::AHashMap;

use crate::corpus::ItemsetCorpus;
use crate::error::{MiningError, Result};
use crate::types::{Item, Itemset};

/// Support of every distinct input itemset: the fraction of transactions
/// containing it as a subset.
pub fn support<T: Item>(
    corpus: &ItemsetCorpus<T>,
    itemsets: &[Itemset<T>],
) -> Result<AHashMap<Itemset<T>, f64>> {
    let num_transactions = non_empty_len(corpus)?;

    let mut distinct: Vec<Itemset<T>> = itemsets.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let counts = count_candidates(corpus, &distinct);
    Ok(distinct
        .into_iter()
        .zip(counts)
        .map(|(itemset, count)| (itemset, count as f64 / num_transactions as f64))
        .collect())
}

pub fn support_of<T: Item>(corpus: &ItemsetCorpus<T>, itemset: &Itemset<T>) -> Result<f64> {
    let num_transactions = non_empty_len(corpus)?;
    let count = corpus
        .iter()
        .filter(|transaction| itemset.is_subset(transaction))
        .count();
    Ok(count as f64 / num_transactions as f64)
}

/// Support(A ∪ B) / Support(A), or exactly 0 when A never occurs.
pub fn confidence<T: Item>(
    corpus: &ItemsetCorpus<T>,
    itemset_a: &Itemset<T>,
    itemset_b: &Itemset<T>,
) -> Result<f64> {
    let support_a = support_of(corpus, itemset_a)?;
    if support_a == 0.0 {
        return Ok(0.0);
    }
    Ok(support_of(corpus, &itemset_a.union(itemset_b))? / support_a)
}

/// Per-candidate count of containing transactions, index-matched with
/// `candidates`. One full pass over the corpus.
pub(crate) fn count_candidates<T: Item>(
    corpus: &ItemsetCorpus<T>,
    candidates: &[Itemset<T>],
) -> Vec<usize> {
    let mut counts = vec![0usize; candidates.len()];
    for transaction in corpus.iter() {
        for (candidate, count) in candidates.iter().zip(counts.iter_mut()) {
            if candidate.is_subset(transaction) {
                *count += 1;
            }
        }
    }
    counts
}

pub(crate) fn non_empty_len<T>(corpus: &ItemsetCorpus<T>) -> Result<usize> {
    if corpus.is_empty() {
        return Err(MiningError::EmptyCorpus);
    }
    Ok(corpus.len())
}
