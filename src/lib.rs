//! Frequent pattern mining over in-memory corpora.
//!
//! Two independent engines share the value types in [`types`]:
//!
//! - [`itemset`]: support and confidence over unordered transactions, and
//!   level-wise Apriori search for frequent itemsets.
//! - [`sequence`]: lock-step subsequence containment over ordered records,
//!   prefix-projected growth for frequent sequences, and a single-step join
//!   strategy.
//!
//! Multi-level miners return a [`FrequentPatterns`], whose patterns and
//! supports are index-matched. [`mine`] picks the engine from the corpus
//! type.
//!
//! ```
//! use frequents::{mine, Itemset, ItemsetCorpus};
//!
//! let corpus = ItemsetCorpus::new(vec![
//!     Itemset::from(["milk", "bread"]),
//!     Itemset::from(["bread", "butter"]),
//!     Itemset::from(["bread"]),
//! ]);
//! let frequent = mine(&corpus, 0.5).unwrap();
//! assert_eq!(frequent.patterns(), &[Itemset::from(["bread"])]);
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod itemset;
pub mod mining;
pub mod patterns;
pub mod sequence;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use config::{MiningConfig, PruningMode};
pub use corpus::{ItemsetCorpus, SequenceCorpus};
pub use error::{MiningError, Result};
pub use itemset::{AssociationRule, FrequentLevel};
pub use mining::{mine, Mine};
pub use patterns::FrequentPatterns;
pub use types::{Item, Itemset, Sequence};
