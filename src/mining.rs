use crate::config::MiningConfig;
use crate::corpus::{ItemsetCorpus, SequenceCorpus};
use crate::error::Result;
use crate::itemset;
use crate::patterns::FrequentPatterns;
use crate::sequence;
use crate::types::{Item, Itemset, Sequence};

/// A corpus shape that knows which miner applies to it: level-wise Apriori
/// for transactions, prefix-projected growth for sequences.
pub trait Mine {
    type Pattern;

    fn mine_with(&self, config: &MiningConfig) -> Result<FrequentPatterns<Self::Pattern>>;

    fn mine(&self, min_support: f64) -> Result<FrequentPatterns<Self::Pattern>> {
        self.mine_with(&MiningConfig::new(min_support))
    }
}

impl<T: Item> Mine for ItemsetCorpus<T> {
    type Pattern = Itemset<T>;

    fn mine_with(&self, config: &MiningConfig) -> Result<FrequentPatterns<Itemset<T>>> {
        itemset::get_frequent_itemsets_with(self, config)
    }
}

impl<T: Item> Mine for SequenceCorpus<T> {
    type Pattern = Sequence<T>;

    fn mine_with(&self, config: &MiningConfig) -> Result<FrequentPatterns<Sequence<T>>> {
        sequence::get_frequent_sequences_with(self, config)
    }
}

pub fn mine<C: Mine + ?Sized>(
    corpus: &C,
    min_support: f64,
) -> Result<FrequentPatterns<C::Pattern>> {
    corpus.mine(min_support)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_on_corpus_shape() {
        let baskets =
            ItemsetCorpus::new(vec![Itemset::from(["a", "b"]), Itemset::from(["b", "a"])]);
        let itemsets = mine(&baskets, 1.0).unwrap();
        assert_eq!(
            itemsets.patterns(),
            &[Itemset::from(["a"]), Itemset::from(["b"]), Itemset::from(["a", "b"])]
        );

        let sessions = SequenceCorpus::from_tokens(vec![vec!["a", "b"], vec!["b", "a"]]);
        let sequences = mine(&sessions, 1.0).unwrap();
        assert_eq!(
            sequences.patterns(),
            &[Sequence::from_items(["a"]), Sequence::from_items(["b"])]
        );
    }
}
