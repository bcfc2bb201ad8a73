use ahash::AHashMap;
use serde::Serialize;
use std::hash::Hash;

/// Frequent patterns and their supports as two index-matched lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequentPatterns<P> {
    patterns: Vec<P>,
    supports: Vec<f64>,
}

impl<P> FrequentPatterns<P> {
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            supports: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            patterns: Vec::with_capacity(capacity),
            supports: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, pattern: P, support: f64) -> usize {
        self.patterns.push(pattern);
        self.supports.push(support);
        self.patterns.len() - 1
    }

    pub fn append(&mut self, other: FrequentPatterns<P>) {
        self.patterns.extend(other.patterns);
        self.supports.extend(other.supports);
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[P] {
        &self.patterns
    }

    pub fn supports(&self) -> &[f64] {
        &self.supports
    }

    pub fn get(&self, idx: usize) -> Option<(&P, f64)> {
        Some((self.patterns.get(idx)?, *self.supports.get(idx)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&P, f64)> {
        self.patterns.iter().zip(self.supports.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<P>, Vec<f64>) {
        (self.patterns, self.supports)
    }
}

impl<P: PartialEq> FrequentPatterns<P> {
    /// Linear scan; build [`to_map`](Self::to_map) once for repeated lookups.
    pub fn support_of(&self, pattern: &P) -> Option<f64> {
        self.patterns
            .iter()
            .position(|candidate| candidate == pattern)
            .map(|idx| self.supports[idx])
    }
}

impl<P: Hash + Eq> FrequentPatterns<P> {
    pub fn to_map(&self) -> AHashMap<P, f64>
    where
        P: Clone,
    {
        self.iter()
            .map(|(pattern, support)| (pattern.clone(), support))
            .collect()
    }
}

impl<P> Default for FrequentPatterns<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FromIterator<(P, f64)> for FrequentPatterns<P> {
    fn from_iter<I: IntoIterator<Item = (P, f64)>>(iter: I) -> Self {
        let (patterns, supports) = iter.into_iter().unzip();
        Self { patterns, supports }
    }
}

impl<P> Extend<(P, f64)> for FrequentPatterns<P> {
    fn extend<I: IntoIterator<Item = (P, f64)>>(&mut self, iter: I) {
        for (pattern, support) in iter {
            self.push(pattern, support);
        }
    }
}
