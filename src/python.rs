use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::MiningConfig;
use crate::corpus::{ItemsetCorpus, SequenceCorpus};
use crate::error::MiningError;
use crate::itemset;
use crate::patterns::FrequentPatterns;
use crate::sequence;
use crate::types::{Itemset, Sequence};

type ItemsetColumns = (Vec<Vec<String>>, Vec<f64>);
type SequenceColumns = (Vec<Vec<Vec<String>>>, Vec<f64>);
type RuleRow = (Vec<String>, Vec<String>, f64, f64, f64);

fn value_error(err: MiningError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn build_config(min_support: f64, max_len: Option<usize>) -> MiningConfig {
    let config = MiningConfig::new(min_support);
    match max_len {
        Some(max_len) => config.with_max_pattern_len(max_len),
        None => config,
    }
}

fn itemset_corpus(transactions: Vec<Vec<String>>) -> ItemsetCorpus<String> {
    transactions.into_iter().map(Itemset::new).collect()
}

fn sequence_corpus(records: Vec<Vec<Vec<String>>>) -> SequenceCorpus<String> {
    records
        .into_iter()
        .map(|record| record.into_iter().map(Itemset::new).collect::<Sequence<String>>())
        .collect()
}

fn itemset_columns<T: Clone>(frequent: FrequentPatterns<Itemset<T>>) -> (Vec<Vec<T>>, Vec<f64>) {
    let (itemsets, supports) = frequent.into_parts();
    let itemsets = itemsets
        .iter()
        .map(|itemset| itemset.as_slice().to_vec())
        .collect();
    (itemsets, supports)
}

#[pyfunction]
fn support(transactions: Vec<Vec<String>>, itemset: Vec<String>) -> PyResult<f64> {
    itemset::support_of(&itemset_corpus(transactions), &Itemset::new(itemset)).map_err(value_error)
}

#[pyfunction]
fn confidence(
    transactions: Vec<Vec<String>>,
    itemset_a: Vec<String>,
    itemset_b: Vec<String>,
) -> PyResult<f64> {
    itemset::confidence(
        &itemset_corpus(transactions),
        &Itemset::new(itemset_a),
        &Itemset::new(itemset_b),
    )
    .map_err(value_error)
}

#[pyfunction]
#[pyo3(signature = (transactions, min_support=0.2, max_len=None))]
fn frequent_itemsets(
    transactions: Vec<Vec<String>>,
    min_support: f64,
    max_len: Option<usize>,
) -> PyResult<ItemsetColumns> {
    let corpus = itemset_corpus(transactions);
    let frequent = itemset::get_frequent_itemsets_with(&corpus, &build_config(min_support, max_len))
        .map_err(value_error)?;
    Ok(itemset_columns(frequent))
}

#[pyfunction]
#[pyo3(signature = (transactions, min_support=0.2, max_len=None))]
fn frequent_itemsets_dense<'py>(
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
    max_len: Option<usize>,
) -> PyResult<(Vec<Vec<usize>>, Vec<f64>)> {
    let corpus = ItemsetCorpus::from_dense(transactions.as_array());
    let frequent = itemset::get_frequent_itemsets_with(&corpus, &build_config(min_support, max_len))
        .map_err(value_error)?;
    Ok(itemset_columns(frequent))
}

#[pyfunction]
#[pyo3(signature = (records, min_support=0.2, max_len=None))]
fn frequent_sequences(
    records: Vec<Vec<Vec<String>>>,
    min_support: f64,
    max_len: Option<usize>,
) -> PyResult<SequenceColumns> {
    let corpus = sequence_corpus(records);
    let (patterns, supports) =
        sequence::get_frequent_sequences_with(&corpus, &build_config(min_support, max_len))
            .map_err(value_error)?
            .into_parts();
    let patterns = patterns
        .iter()
        .map(|pattern| pattern.iter().map(|element| element.as_slice().to_vec()).collect())
        .collect();
    Ok((patterns, supports))
}

#[pyfunction]
#[pyo3(signature = (transactions, min_support=0.2, min_confidence=0.5))]
fn association_rules(
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<Vec<RuleRow>> {
    let corpus = itemset_corpus(transactions);
    let frequent = itemset::get_frequent_itemsets(&corpus, min_support).map_err(value_error)?;
    let rules = itemset::association_rules(&frequent, min_confidence).map_err(value_error)?;
    Ok(rules
        .into_iter()
        .map(|rule| {
            (
                rule.antecedent.as_slice().to_vec(),
                rule.consequent.as_slice().to_vec(),
                rule.support,
                rule.confidence,
                rule.lift,
            )
        })
        .collect())
}

#[pymodule]
fn frequents(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(support, m)?)?;
    m.add_function(wrap_pyfunction!(confidence, m)?)?;
    m.add_function(wrap_pyfunction!(frequent_itemsets, m)?)?;
    m.add_function(wrap_pyfunction!(frequent_itemsets_dense, m)?)?;
    m.add_function(wrap_pyfunction!(frequent_sequences, m)?)?;
    m.add_function(wrap_pyfunction!(association_rules, m)?)?;
    Ok(())
}
