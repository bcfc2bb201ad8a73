use ahash::AHashMap;

use super::matcher::{contains, SequenceView};
use crate::corpus::SequenceCorpus;
use crate::error::{MiningError, Result};
use crate::patterns::FrequentPatterns;
use crate::types::{Item, Itemset, Sequence};

/// Support of every distinct candidate: the fraction of records that contain
/// it. A record counts once however often the pattern recurs inside it.
pub fn support<T: Item>(
    corpus: &SequenceCorpus<T>,
    candidates: &[Sequence<T>],
) -> Result<AHashMap<Sequence<T>, f64>> {
    let num_records = non_empty_len(corpus)?;

    let mut distinct: Vec<Sequence<T>> = candidates.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let counts = count_candidates(corpus, &distinct);
    Ok(distinct
        .into_iter()
        .zip(counts)
        .map(|(candidate, count)| (candidate, count as f64 / num_records as f64))
        .collect())
}

pub fn support_of<T: Item>(corpus: &SequenceCorpus<T>, candidate: &Sequence<T>) -> Result<f64> {
    let num_records = non_empty_len(corpus)?;
    let count = count_containing(corpus.iter().map(Sequence::as_slice), candidate.as_slice());
    Ok(count as f64 / num_records as f64)
}

/// Counts the records that contain `candidate`.
pub(crate) fn count_containing<T, R, V>(records: R, candidate: &[Itemset<T>]) -> usize
where
    T: Item,
    R: IntoIterator<Item = V>,
    V: SequenceView<T>,
{
    records
        .into_iter()
        .filter(|record| contains(record, candidate))
        .count()
}

/// Per-candidate count of containing records, index-matched with
/// `candidates`.
pub(crate) fn count_candidates<T: Item>(
    corpus: &SequenceCorpus<T>,
    candidates: &[Sequence<T>],
) -> Vec<usize> {
    candidates
        .iter()
        .map(|candidate| {
            count_containing(corpus.iter().map(Sequence::as_slice), candidate.as_slice())
        })
        .collect()
}

/// Candidates with support >= `min_support`, in input order.
pub(crate) fn frequent_candidates<T: Item>(
    corpus: &SequenceCorpus<T>,
    candidates: Vec<Sequence<T>>,
    min_support: f64,
) -> Result<FrequentPatterns<Sequence<T>>> {
    let num_records = non_empty_len(corpus)?;
    let counts = count_candidates(corpus, &candidates);
    Ok(candidates
        .into_iter()
        .zip(counts)
        .map(|(candidate, count)| (candidate, count as f64 / num_records as f64))
        .filter(|&(_, support)| support >= min_support)
        .collect())
}

pub(crate) fn non_empty_len<T>(corpus: &SequenceCorpus<T>) -> Result<usize> {
    if corpus.is_empty() {
        return Err(MiningError::EmptyCorpus);
    }
    Ok(corpus.len())
}
