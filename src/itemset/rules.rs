use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

use super::combinations::for_each_combination;
use crate::error::{MiningError, Result};
use crate::patterns::FrequentPatterns;
use crate::types::{Item, Itemset};

/// Association rule: antecedent => consequent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRule<T> {
    pub antecedent: Itemset<T>,
    pub consequent: Itemset<T>,
    /// Support of antecedent ∪ consequent
    pub support: f64,
    /// support / Support(antecedent)
    pub confidence: f64,
    /// confidence / Support(consequent)
    pub lift: f64,
}

/// Rules from every frequent itemset of two or more items, split into each
/// non-empty proper antecedent and its complement.
///
/// Antecedent and consequent supports are read from `frequent` itself, which
/// is complete for subsets of any member when it came out of
/// [`get_frequent_itemsets`](super::get_frequent_itemsets). Splits whose parts
/// are missing (a truncated or hand-built input) are skipped.
pub fn association_rules<T: Item>(
    frequent: &FrequentPatterns<Itemset<T>>,
    min_confidence: f64,
) -> Result<Vec<AssociationRule<T>>> {
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(MiningError::InvalidArgument(format!(
            "min_confidence must lie in [0, 1], got {}",
            min_confidence
        )));
    }

    let support_map = frequent.to_map();
    let mut rules = Vec::new();
    let mut skipped = 0usize;

    for (itemset, support) in frequent.iter() {
        if itemset.len() < 2 {
            continue;
        }
        for antecedent_size in 1..itemset.len() {
            for_each_combination(itemset.as_slice(), antecedent_size, |items| {
                let antecedent = Itemset::new(items.iter().cloned());
                let consequent = itemset.difference(&antecedent);
                let (Some(&antecedent_support), Some(&consequent_support)) =
                    (support_map.get(&antecedent), support_map.get(&consequent))
                else {
                    skipped += 1;
                    return;
                };

                let confidence = support / antecedent_support;
                if confidence >= min_confidence {
                    rules.push(AssociationRule {
                        antecedent,
                        consequent,
                        support,
                        confidence,
                        lift: confidence / consequent_support,
                    });
                }
            });
        }
    }

    if skipped > 0 {
        debug!("association rules: skipped {} splits with unknown support", skipped);
    }

    rules.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then(b.support.partial_cmp(&a.support).unwrap_or(Ordering::Equal))
    });
    Ok(rules)
}
