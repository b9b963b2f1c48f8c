//! Frequent itemsets and association rules with the Apriori algorithm.
//!
//! ```
//! use apriori::{mine, MiningConfig, TransactionSet};
//!
//! let transactions = TransactionSet::from_labels(&[
//!     vec!["bread", "milk"],
//!     vec!["bread", "diaper", "beer", "eggs"],
//!     vec!["milk", "diaper", "beer", "cola"],
//!     vec!["bread", "milk", "diaper", "beer"],
//!     vec!["bread", "milk", "diaper", "cola"],
//! ]);
//! let config = MiningConfig::new(0.6, 0.8).unwrap();
//! let result = mine(&transactions, &config).unwrap();
//!
//! let bread_milk = transactions.itemset(&["bread", "milk"]).unwrap();
//! assert_eq!(result.frequent_itemsets[&bread_milk], 0.6);
//!
//! // beer always comes with diapers
//! assert_eq!(result.rules.len(), 1);
//! assert_eq!(result.rules[0].antecedent, transactions.itemset(&["beer"]).unwrap());
//! assert_eq!(result.rules[0].confidence, 1.0);
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod itemset;
pub mod itemsets;
pub mod loader;
pub mod report;
pub mod rules;
pub mod transaction;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub use config::MiningConfig;
pub use error::{AprioriError, Result};
pub use itemset::Itemset;
pub use itemsets::generate_frequent_itemsets;
pub use loader::{load_transactions, read_transactions};
pub use rules::{generate_rules, Rule};
pub use transaction::{Transaction, TransactionSet};
pub use types::{ItemId, SupportMap};

/// Everything one run produces. Supports and confidences are fractions in
/// [0, 1].
#[derive(Debug, Clone)]
pub struct MiningResult {
    pub frequent_itemsets: SupportMap,
    pub rules: Vec<Rule>,
}

/// Apriori algorithm for association rules.
///
/// Either both frequent itemsets and rules are returned, or an error and
/// nothing else.
pub fn mine(transactions: &TransactionSet, config: &MiningConfig) -> Result<MiningResult> {
    let frequent_itemsets = generate_frequent_itemsets(transactions, config.min_support())?;
    let rules = generate_rules(&frequent_itemsets, config.min_confidence())?;

    Ok(MiningResult {
        frequent_itemsets,
        rules,
    })
}

#[cfg(feature = "python")]
#[pymodule]
fn apriori(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(wrapper::mine, m)?)?;
    m.add_class::<wrapper::PyRule>()?;
    Ok(())
}
