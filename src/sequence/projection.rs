use super::matcher::{is_prefix, match_anchors, Augmented};
use crate::corpus::{distinct_items, SequenceCorpus};
use crate::types::{Item, Itemset};

/// One surviving record of a projected corpus: its arena index and the
/// position right after each occurrence of the current prefix. Starts are
/// ascending and always inside the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRecord {
    pub record: usize,
    pub starts: Vec<usize>,
}

/// Suffixes of the records in which the current prefix occurs, addressed into
/// the original corpus rather than copied out of it.
#[derive(Debug, Clone)]
pub struct ProjectedCorpus<'a, T> {
    corpus: &'a SequenceCorpus<T>,
    entries: Vec<ProjectedRecord>,
}

impl<'a, T: Item> ProjectedCorpus<'a, T> {
    /// Projects `corpus` on `prefix`. The empty prefix occurs before every
    /// position, so every non-empty record survives with all its positions.
    pub fn new(corpus: &'a SequenceCorpus<T>, prefix: &[Itemset<T>]) -> Self {
        let entries = corpus
            .iter()
            .enumerate()
            .filter_map(|(record, sequence)| {
                let elements = sequence.as_slice();
                let starts: Vec<usize> = match_anchors(elements, prefix)
                    .map(|anchor| anchor + prefix.len())
                    .filter(|&start| start < elements.len())
                    .collect();
                (!starts.is_empty()).then_some(ProjectedRecord { record, starts })
            })
            .collect();
        Self { corpus, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ProjectedRecord] {
        &self.entries
    }

    fn elements(&self, record: usize) -> &'a [Itemset<T>] {
        self.corpus.records()[record].as_slice()
    }

    /// Distinct items across all suffixes, ascending.
    pub fn items(&self) -> Vec<T> {
        // The earliest start's suffix covers every later one.
        distinct_items(
            self.entries
                .iter()
                .flat_map(|entry| self.elements(entry.record)[entry.starts[0]..].iter()),
        )
    }

    /// Number of records in which `candidate`, a one-element extension of
    /// `prefix`, occurs. The starts already mark every occurrence of the
    /// prefix, so each `prefix ++ suffix` view is only checked at anchor 0.
    pub fn count_containing(&self, prefix: &[Itemset<T>], candidate: &[Itemset<T>]) -> usize {
        self.entries
            .iter()
            .filter(|entry| {
                let elements = self.elements(entry.record);
                entry.starts.iter().any(|&start| {
                    is_prefix(&Augmented::new(prefix, &elements[start..]), candidate)
                })
            })
            .count()
    }

    /// Projects further on `extension`, which is `prefix` followed by one more
    /// element. Keeps, per record, the whole itemsets after each view that
    /// `extension` is a prefix of; items left over in a partially consumed
    /// itemset are dropped with it. Empty suffixes and records left without
    /// any suffix are removed.
    pub fn project(
        &self,
        prefix: &[Itemset<T>],
        extension: &[Itemset<T>],
    ) -> ProjectedCorpus<'a, T> {
        debug_assert_eq!(extension.len(), prefix.len() + 1);
        let consumed = extension.len() - prefix.len();

        let entries = self
            .entries
            .iter()
            .filter_map(|entry| {
                let elements = self.elements(entry.record);
                let starts: Vec<usize> = entry
                    .starts
                    .iter()
                    .filter(|&&start| {
                        is_prefix(&Augmented::new(prefix, &elements[start..]), extension)
                    })
                    .map(|&start| start + consumed)
                    .filter(|&start| start < elements.len())
                    .collect();
                (!starts.is_empty()).then_some(ProjectedRecord {
                    record: entry.record,
                    starts,
                })
            })
            .collect();

        ProjectedCorpus {
            corpus: self.corpus,
            entries,
        }
    }
}
