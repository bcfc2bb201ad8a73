//! Frequent itemset mining over unordered transactions.

pub mod apriori;
pub mod combinations;
pub mod rules;
pub mod storage;
pub mod support;

pub use apriori::{get_frequent_itemsets, get_frequent_itemsets_with, mine, mine_level, mine_levels};
pub use rules::{association_rules, AssociationRule};
pub use storage::FrequentLevel;
pub use support::{confidence, support, support_of};
