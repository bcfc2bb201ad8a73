//! Frequent sequential pattern mining over ordered records.

pub mod join_growth;
pub mod matcher;
pub mod prefix_growth;
pub mod projection;
pub mod support;

pub use join_growth::{generate_candidates, join_growth};
pub use matcher::{contains, is_prefix, Augmented, SequenceView};
pub use prefix_growth::{get_frequent_sequences, get_frequent_sequences_with, mine_with_prefix};
pub use projection::{ProjectedCorpus, ProjectedRecord};
pub use support::{support, support_of};
