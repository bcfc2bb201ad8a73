use ahash::AHashSet;
use log::debug;

use super::support::{frequent_candidates, non_empty_len};
use crate::corpus::SequenceCorpus;
use crate::error::{check_min_support, MiningError, Result};
use crate::patterns::FrequentPatterns;
use crate::types::{Item, Itemset, Sequence};

/// Join candidates from one level of sequences sharing the same total item
/// count.
///
/// Every ordered pair of distinct sequences is concatenated end to end. When
/// the level holds single items, each unordered pair is also merged into one
/// two-item itemset at a single position. Duplicates are emitted once, in
/// first-seen order.
pub fn generate_candidates<T: Item>(level: &[Sequence<T>]) -> Result<Vec<Sequence<T>>> {
    let Some(first) = level.first() else {
        return Ok(Vec::new());
    };
    let expected = first.item_count();
    if let Some(other) = level.iter().find(|sequence| sequence.item_count() != expected) {
        return Err(MiningError::LengthMismatch {
            expected,
            found: other.item_count(),
        });
    }

    let mut seen = AHashSet::new();
    let mut candidates = Vec::new();
    let mut emit = |candidate: Sequence<T>| {
        if seen.insert(candidate.clone()) {
            candidates.push(candidate);
        }
    };

    for (i, left) in level.iter().enumerate() {
        for (j, right) in level.iter().enumerate() {
            if i != j && left != right {
                emit(left.concat(right));
            }
        }
    }

    if expected == 1 {
        for (i, left) in level.iter().enumerate() {
            for right in &level[i + 1..] {
                let merged = Itemset::new(
                    left.iter()
                        .chain(right.iter())
                        .flat_map(|element| element.iter().cloned()),
                );
                if merged.len() == 2 {
                    emit(Sequence::new([merged]));
                }
            }
        }
    }

    Ok(candidates)
}

/// Frequent single-item sequences plus the frequent candidates of exactly one
/// join on them.
///
/// Growth stops after that single join: longer patterns are not searched for.
/// Use [`get_frequent_sequences`](super::get_frequent_sequences) for a
/// complete search.
pub fn join_growth<T: Item>(
    corpus: &SequenceCorpus<T>,
    min_support: f64,
) -> Result<FrequentPatterns<Sequence<T>>> {
    check_min_support(min_support)?;
    non_empty_len(corpus)?;

    let singles = corpus
        .items()
        .into_iter()
        .map(|item| Sequence::from_items([item]))
        .collect();
    let mut found = frequent_candidates(corpus, singles, min_support)?;

    let candidates = generate_candidates(found.patterns())?;
    let joined = frequent_candidates(corpus, candidates, min_support)?;
    debug!(
        "join growth: {} frequent single items, {} frequent joined candidates",
        found.len(),
        joined.len()
    );

    found.append(joined);
    Ok(found)
}
