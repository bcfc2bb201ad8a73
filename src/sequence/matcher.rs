use crate::types::{Item, Itemset, Sequence};

/// Random access to the positions of an ordered record.
///
/// Lets the matcher run over owned sequences, arena slices and
/// prefix-augmented suffixes alike without materializing them.
pub trait SequenceView<T> {
    fn positions(&self) -> usize;
    fn element(&self, position: usize) -> &Itemset<T>;
}

impl<T> SequenceView<T> for [Itemset<T>] {
    fn positions(&self) -> usize {
        self.len()
    }

    fn element(&self, position: usize) -> &Itemset<T> {
        &self[position]
    }
}

impl<T> SequenceView<T> for Sequence<T> {
    fn positions(&self) -> usize {
        self.len()
    }

    fn element(&self, position: usize) -> &Itemset<T> {
        &self.as_slice()[position]
    }
}

impl<T, S: SequenceView<T> + ?Sized> SequenceView<T> for &S {
    fn positions(&self) -> usize {
        (**self).positions()
    }

    fn element(&self, position: usize) -> &Itemset<T> {
        (**self).element(position)
    }
}

/// `prefix ++ suffix`, borrowed.
#[derive(Debug, Clone)]
pub struct Augmented<'a, T> {
    prefix: &'a [Itemset<T>],
    suffix: &'a [Itemset<T>],
}

impl<'a, T> Augmented<'a, T> {
    pub fn new(prefix: &'a [Itemset<T>], suffix: &'a [Itemset<T>]) -> Self {
        Self { prefix, suffix }
    }
}

impl<T> SequenceView<T> for Augmented<'_, T> {
    fn positions(&self) -> usize {
        self.prefix.len() + self.suffix.len()
    }

    fn element(&self, position: usize) -> &Itemset<T> {
        match position.checked_sub(self.prefix.len()) {
            Some(offset) => &self.suffix[offset],
            None => &self.prefix[position],
        }
    }
}

/// Whether `candidate` matches `sequence` with its first element anchored at
/// `anchor` and every later element on the directly following positions.
pub fn matches_at<T, S>(sequence: &S, candidate: &[Itemset<T>], anchor: usize) -> bool
where
    T: Item,
    S: SequenceView<T> + ?Sized,
{
    if anchor + candidate.len() > sequence.positions() {
        return false;
    }
    candidate
        .iter()
        .enumerate()
        .all(|(offset, element)| element.is_subset(sequence.element(anchor + offset)))
}

/// Every anchor at which `candidate` matches, left to right.
pub fn match_anchors<'s, T, S>(
    sequence: &'s S,
    candidate: &'s [Itemset<T>],
) -> impl Iterator<Item = usize> + 's
where
    T: Item,
    S: SequenceView<T> + ?Sized,
{
    let last_anchor = sequence.positions().checked_sub(candidate.len());
    last_anchor
        .into_iter()
        .flat_map(|last| 0..=last)
        .filter(move |&anchor| matches_at(sequence, candidate, anchor))
}

/// Whether the ordered `candidate` occurs inside `sequence`.
///
/// The first candidate element may anchor at any position whose itemset
/// contains it; the remaining elements must then be contained, in lock-step,
/// by the positions immediately after the anchor. When the tail fails the
/// scan moves on to the next anchor. An empty itemset in the candidate
/// matches any position and is how a pattern skips one. A candidate longer
/// than the sequence never matches; an empty candidate always does.
pub fn contains<T, S>(sequence: &S, candidate: &[Itemset<T>]) -> bool
where
    T: Item,
    S: SequenceView<T> + ?Sized,
{
    match_anchors(sequence, candidate).next().is_some()
}

/// Whether `candidate` lines up with the start of `sequence`: all but its
/// last element at the same positions, and its last element a subset of the
/// corresponding (possibly larger) itemset.
pub fn is_prefix<T, S>(sequence: &S, candidate: &[Itemset<T>]) -> bool
where
    T: Item,
    S: SequenceView<T> + ?Sized,
{
    matches_at(sequence, candidate, 0)
}
