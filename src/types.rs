use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// An atomic, comparable token. Blanket-implemented for every type that can
/// be ordered, hashed and cloned.
pub trait Item: Clone + Ord + Hash + fmt::Debug {}

impl<T: Clone + Ord + Hash + fmt::Debug> Item for T {}

/// Unordered set of unique items.
///
/// Items are kept sorted and deduplicated, so two itemsets built from the same
/// items in any order compare, hash and order identically. The empty itemset
/// is a subset of every itemset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Itemset<T> {
    items: Vec<T>,
}

impl<T> Itemset<T> {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Item> Itemset<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn singleton(item: T) -> Self {
        Self { items: vec![item] }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Linear merge over both sorted item lists.
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.items.len() > other.items.len() {
            return false;
        }
        let mut theirs = other.items.iter();
        'ours: for item in &self.items {
            for candidate in theirs.by_ref() {
                match candidate.cmp(item) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => continue 'ours,
                    std::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.items.iter().chain(other.items.iter()).cloned())
    }

    /// Items of `self` not present in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        }
    }

    /// Every subset obtained by dropping exactly one item.
    pub fn drop_one_subsets(&self) -> impl Iterator<Item = Itemset<T>> + '_ {
        (0..self.items.len()).map(move |skip| Itemset {
            items: self
                .items
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != skip)
                .map(|(_, item)| item.clone())
                .collect(),
        })
    }
}

impl<T> Default for Itemset<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Item> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Item> From<Vec<T>> for Itemset<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Item, const N: usize> From<[T; N]> for Itemset<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for &'a Itemset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Itemset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}

/// Ordered list of itemsets, one per event position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    elements: Vec<Itemset<T>>,
}

impl<T> Sequence<T> {
    pub fn empty() -> Self {
        Self { elements: Vec::new() }
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[Itemset<T>] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Itemset<T>> {
        self.elements.iter()
    }

    /// Total number of items over all positions.
    pub fn item_count(&self) -> usize {
        self.elements.iter().map(Itemset::len).sum()
    }
}

impl<T: Item> Sequence<T> {
    pub fn new(elements: impl IntoIterator<Item = Itemset<T>>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// One singleton itemset per item, in order.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self::new(items.into_iter().map(Itemset::singleton))
    }

    /// `self ++ other`.
    pub fn concat(&self, other: &Self) -> Self {
        Self::new(self.elements.iter().chain(other.elements.iter()).cloned())
    }

    /// `self ++ [element]`.
    pub fn extended(&self, element: Itemset<T>) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(element);
        Self { elements }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Item> FromIterator<Itemset<T>> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = Itemset<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Item> From<Vec<Itemset<T>>> for Sequence<T> {
    fn from(elements: Vec<Itemset<T>>) -> Self {
        Self { elements }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a Itemset<T>;
    type IntoIter = std::slice::Iter<'a, Itemset<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (idx, element) in self.elements.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itemset_sorted_and_deduplicated() {
        let itemset = Itemset::new(vec![7, 2, 5, 2]);
        assert_eq!(itemset.as_slice(), &[2, 5, 7]);
        assert_eq!(itemset, Itemset::from([5, 7, 2]));
    }

    #[test]
    fn test_subset() {
        let small = Itemset::from(["bread", "jam"]);
        let large = Itemset::from(["butter", "bread", "jam"]);
        assert!(small.is_subset(&large));
        assert!(large.is_superset(&small));
        assert!(!large.is_subset(&small));
        assert!(!Itemset::from(["tea"]).is_subset(&large));
        assert!(Itemset::<&str>::empty().is_subset(&large));
        assert!(Itemset::<&str>::empty().is_subset(&Itemset::empty()));
    }

    #[test]
    fn test_union_and_difference() {
        let a = Itemset::from([1, 3]);
        let b = Itemset::from([2, 3]);
        assert_eq!(a.union(&b).as_slice(), &[1, 2, 3]);
        assert_eq!(a.union(&b).difference(&a).as_slice(), &[2]);
    }

    #[test]
    fn test_drop_one_subsets() {
        let subsets: Vec<_> = Itemset::from([1, 2, 3]).drop_one_subsets().collect();
        assert_eq!(
            subsets,
            vec![Itemset::from([2, 3]), Itemset::from([1, 3]), Itemset::from([1, 2])]
        );
    }

    #[test]
    fn test_sequence_counts_and_display() {
        let seq = Sequence::new(vec![
            Itemset::from(["the"]),
            Itemset::from(["terrible", "service"]),
        ]);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.item_count(), 3);
        assert_eq!(seq.to_string(), "<{the}, {service, terrible}>");
        assert_eq!(Sequence::from_items(["a", "b"]).concat(&seq).len(), 4);
    }
}
