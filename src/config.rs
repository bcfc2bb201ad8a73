use serde::{Deserialize, Serialize};

use crate::error::{check_min_support, MiningError, Result};

/// How Apriori discards size-k candidates before scoring them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruningMode {
    /// Keep a candidate that contains at least one frequent (k-1)-itemset.
    #[default]
    AnySubset,
    /// Keep a candidate only if every one of its (k-1)-subsets is frequent.
    AllSubsets,
}

/// Parameters shared by the itemset and sequence miners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    pub min_support: f64,
    pub pruning: PruningMode,
    /// Longest pattern to report: itemset size for Apriori, sequence length
    /// (positions) for prefix growth.
    pub max_pattern_len: Option<usize>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.2,
            pruning: PruningMode::AnySubset,
            max_pattern_len: None,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_pruning(mut self, pruning: PruningMode) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_max_pattern_len(mut self, max_len: usize) -> Self {
        self.max_pattern_len = Some(max_len);
        self
    }

    /// Parse a JSON document; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_min_support(self.min_support)?;
        if self.max_pattern_len == Some(0) {
            return Err(MiningError::InvalidArgument(
                "max_pattern_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn allows_len(&self, len: usize) -> bool {
        self.max_pattern_len.map_or(true, |max| len <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MiningConfig::default();
        assert_eq!(config.min_support, 0.2);
        assert_eq!(config.pruning, PruningMode::AnySubset);
        assert!(config.validate().is_ok());
        assert!(config.allows_len(1_000));
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            MiningConfig::from_json(r#"{"min_support": 0.5, "pruning": "all_subsets"}"#).unwrap();
        assert_eq!(config.min_support, 0.5);
        assert_eq!(config.pruning, PruningMode::AllSubsets);
        assert_eq!(config.max_pattern_len, None);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            MiningConfig::from_json(r#"{"min_support": 1.5}"#),
            Err(MiningError::InvalidArgument(_))
        ));
        assert!(matches!(
            MiningConfig::from_json("not json"),
            Err(MiningError::Config(_))
        ));
        assert!(MiningConfig::new(0.3).with_max_pattern_len(0).validate().is_err());
    }
}
