use log::{debug, trace};

use super::projection::ProjectedCorpus;
use super::support::non_empty_len;
use crate::config::MiningConfig;
use crate::corpus::SequenceCorpus;
use crate::error::Result;
use crate::patterns::FrequentPatterns;
use crate::types::{Item, Itemset, Sequence};

/// A prefix waiting to be grown, with the corpus projected on it.
struct Frame<'a, T> {
    prefix: Sequence<T>,
    /// `None` for the seed prefix, which is not itself reported.
    support: Option<f64>,
    projection: ProjectedCorpus<'a, T>,
}

/// Frequent sequences grown one single-item element at a time from the empty
/// prefix.
pub fn get_frequent_sequences<T: Item>(
    corpus: &SequenceCorpus<T>,
    min_support: f64,
) -> Result<FrequentPatterns<Sequence<T>>> {
    get_frequent_sequences_with(corpus, &MiningConfig::new(min_support))
}

pub fn get_frequent_sequences_with<T: Item>(
    corpus: &SequenceCorpus<T>,
    config: &MiningConfig,
) -> Result<FrequentPatterns<Sequence<T>>> {
    mine_with_prefix(corpus, config, &Sequence::empty())
}

pub fn mine<T: Item>(
    corpus: &SequenceCorpus<T>,
    min_support: f64,
    prefix: &Sequence<T>,
) -> Result<FrequentPatterns<Sequence<T>>> {
    mine_with_prefix(corpus, &MiningConfig::new(min_support), prefix)
}

/// Prefix-projected growth.
///
/// Each frequent pattern `prefix ++ [{x}]` is found by scoring only the
/// single-item extensions of an already frequent prefix against the corpus
/// projected on that prefix, then projecting again on the extension. Supports
/// are relative to the whole corpus, so they equal the supports obtained by
/// matching each pattern against every record directly.
///
/// Patterns come out in depth-first pre-order: a pattern, then everything
/// grown from it, then its next sibling. Siblings are in ascending item
/// order. The search runs on an explicit stack.
pub fn mine_with_prefix<T: Item>(
    corpus: &SequenceCorpus<T>,
    config: &MiningConfig,
    prefix: &Sequence<T>,
) -> Result<FrequentPatterns<Sequence<T>>> {
    config.validate()?;
    let num_records = non_empty_len(corpus)? as f64;

    let mut found = FrequentPatterns::new();
    let mut stack = vec![Frame {
        prefix: prefix.clone(),
        support: None,
        projection: ProjectedCorpus::new(corpus, prefix.as_slice()),
    }];

    while let Some(frame) = stack.pop() {
        if let Some(support) = frame.support {
            trace!("frequent sequence {:?} support {}", frame.prefix, support);
            found.push(frame.prefix.clone(), support);
        }
        if frame.projection.is_empty() || !config.allows_len(frame.prefix.len() + 1) {
            continue;
        }

        let extensions = frequent_extensions(&frame, num_records, config.min_support);
        debug!(
            "prefix of length {}: {} projected records, {} frequent extensions",
            frame.prefix.len(),
            frame.projection.len(),
            extensions.len()
        );

        // Reversed so the smallest item is popped, and fully grown, first.
        for (extension, support) in extensions.into_iter().rev() {
            let projection = frame
                .projection
                .project(frame.prefix.as_slice(), extension.as_slice());
            stack.push(Frame {
                prefix: extension,
                support: Some(support),
                projection,
            });
        }
    }

    debug!("prefix growth finished: {} frequent sequences", found.len());
    Ok(found)
}

fn frequent_extensions<T: Item>(
    frame: &Frame<'_, T>,
    num_records: f64,
    min_support: f64,
) -> Vec<(Sequence<T>, f64)> {
    frame
        .projection
        .items()
        .into_iter()
        .filter_map(|item| {
            let candidate = frame.prefix.extended(Itemset::singleton(item));
            let count = frame
                .projection
                .count_containing(frame.prefix.as_slice(), candidate.as_slice());
            let support = count as f64 / num_records;
            (support >= min_support).then_some((candidate, support))
        })
        .collect()
}
