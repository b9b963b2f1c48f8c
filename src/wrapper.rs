use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet};

use crate::{AprioriError, MiningConfig, Rule, SupportMap, TransactionSet};

impl From<AprioriError> for PyErr {
    fn from(err: AprioriError) -> Self {
        match err {
            AprioriError::InternalInvariantViolation(_) => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Association rule as seen from Python.
#[pyclass(name = "Rule")]
#[derive(Clone)]
pub struct PyRule {
    #[pyo3(get)]
    antecedent: Vec<String>,
    #[pyo3(get)]
    consequent: Vec<String>,
    #[pyo3(get)]
    confidence: f64,
}

#[pymethods]
impl PyRule {
    fn __repr__(&self) -> String {
        format!(
            "Rule({:?} => {:?}, confidence={})",
            self.antecedent, self.consequent, self.confidence
        )
    }
}

/// Mine frequent itemsets and rules. Returns `({frozenset: support}, [Rule])`.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, min_confidence))]
pub fn mine(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<(Py<PyDict>, Vec<PyRule>)> {
    let config = MiningConfig::new(min_support, min_confidence)?;
    let transactions = TransactionSet::from_labels(&transactions);
    let result = py.allow_threads(|| crate::mine(&transactions, &config))?;

    let itemsets = convert_itemset_supports(py, &result.frequent_itemsets, &transactions)?;
    let rules = convert_rules(&result.rules, &transactions);

    Ok((itemsets, rules))
}

fn convert_itemset_supports(
    py: Python<'_>,
    frequent: &SupportMap,
    transactions: &TransactionSet,
) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    for (itemset, support) in frequent {
        let labels = transactions.labels(itemset);
        dict.set_item(PyFrozenSet::new(py, &labels)?, support)?;
    }
    Ok(dict.into())
}

fn convert_rules(rules: &[Rule], transactions: &TransactionSet) -> Vec<PyRule> {
    rules
        .iter()
        .map(|rule| PyRule {
            antecedent: owned(transactions.labels(&rule.antecedent)),
            consequent: owned(transactions.labels(&rule.consequent)),
            confidence: rule.confidence,
        })
        .collect()
}

fn owned(labels: Vec<&str>) -> Vec<String> {
    labels.into_iter().map(str::to_owned).collect()
}
