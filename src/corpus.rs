use ndarray::ArrayView2;
use std::collections::BTreeSet;

use crate::types::{Item, Itemset, Sequence};

/// Ordered list of transactions. Order only matters for indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsetCorpus<T> {
    transactions: Vec<Itemset<T>>,
}

impl<T> ItemsetCorpus<T> {
    pub fn new(transactions: Vec<Itemset<T>>) -> Self {
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Itemset<T>] {
        &self.transactions
    }

    pub fn get(&self, idx: usize) -> Option<&Itemset<T>> {
        self.transactions.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Itemset<T>> {
        self.transactions.iter()
    }
}

impl<T: Item> ItemsetCorpus<T> {
    /// Distinct items across every transaction, ascending.
    pub fn items(&self) -> Vec<T> {
        distinct_items(self.transactions.iter())
    }
}

impl ItemsetCorpus<usize> {
    /// Build from a one-hot basket matrix: row = transaction, column = item,
    /// any non-zero cell marks the column's item as present.
    pub fn from_dense(transactions: ArrayView2<i32>) -> Self {
        let transactions = transactions
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &cell)| cell != 0)
                    .map(|(item, _)| item)
                    .collect::<Itemset<usize>>()
            })
            .collect();
        Self { transactions }
    }
}

impl<T: Item> FromIterator<Itemset<T>> for ItemsetCorpus<T> {
    fn from_iter<I: IntoIterator<Item = Itemset<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Ordered list of sequence records (one per review, session, ...).
///
/// Records live in a single arena and are addressed by index, so projected
/// views can point at suffixes without copying item data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCorpus<T> {
    records: Vec<Sequence<T>>,
}

impl<T> SequenceCorpus<T> {
    pub fn new(records: Vec<Sequence<T>>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Sequence<T>] {
        &self.records
    }

    pub fn get(&self, idx: usize) -> Option<&Sequence<T>> {
        self.records.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence<T>> {
        self.records.iter()
    }
}

impl<T: Item> SequenceCorpus<T> {
    /// One record per token stream, one singleton itemset per token.
    pub fn from_tokens<R, I>(records: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        Self::new(records.into_iter().map(Sequence::from_items).collect())
    }

    /// Distinct items across every record, ascending.
    pub fn items(&self) -> Vec<T> {
        distinct_items(self.records.iter().flat_map(|record| record.iter()))
    }
}

impl<T: Item> FromIterator<Sequence<T>> for SequenceCorpus<T> {
    fn from_iter<I: IntoIterator<Item = Sequence<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

pub(crate) fn distinct_items<'a, T, I>(itemsets: I) -> Vec<T>
where
    T: Item + 'a,
    I: IntoIterator<Item = &'a Itemset<T>>,
{
    itemsets
        .into_iter()
        .flat_map(|itemset| itemset.iter())
        .collect::<BTreeSet<&T>>()
        .into_iter()
        .cloned()
        .collect()
}
