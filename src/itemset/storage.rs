use crate::patterns::FrequentPatterns;
use crate::types::{Item, Itemset};

/// Frequent itemsets of a single Apriori level, all of size `itemset_size`,
/// with their supports stored alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentLevel<T> {
    pub itemset_size: usize,
    itemsets: Vec<Itemset<T>>,
    supports: Vec<f64>,
}

impl<T: Item> FrequentLevel<T> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            itemset_size,
            itemsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    pub fn add_itemset(&mut self, itemset: Itemset<T>, support: f64) -> usize {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.itemsets.push(itemset);
        self.supports.push(support);
        self.itemsets.len() - 1
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &Itemset<T> {
        &self.itemsets[idx]
    }

    pub fn itemsets(&self) -> &[Itemset<T>] {
        &self.itemsets
    }

    pub fn supports(&self) -> &[f64] {
        &self.supports
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = (&Itemset<T>, f64)> {
        self.itemsets.iter().zip(self.supports.iter().copied())
    }
}

/// Concatenate levels in order into the parallel pattern/support lists.
pub fn flatten_levels<T: Item>(levels: Vec<FrequentLevel<T>>) -> FrequentPatterns<Itemset<T>> {
    let total = levels.iter().map(FrequentLevel::len).sum();
    let mut patterns = FrequentPatterns::with_capacity(total);
    for level in levels {
        patterns.extend(level.itemsets.into_iter().zip(level.supports));
    }
    patterns
}
