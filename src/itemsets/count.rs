#![allow(non_snake_case)]

use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    error::{AprioriError, Result},
    itemset::Itemset,
    transaction::TransactionSet,
    types::{Support, SupportMap},
};

/// Fraction of transactions that contain every item of `candidate`.
pub fn support(candidate: &Itemset, transactions: &TransactionSet) -> Result<Support> {
    if transactions.is_empty() {
        return Err(AprioriError::InvalidInput(
            "cannot compute support over an empty transaction collection".into(),
        ));
    }
    if candidate.is_empty() {
        return Err(AprioriError::InvalidInput(
            "cannot compute support of an empty itemset".into(),
        ));
    }

    let N = transactions.len() as f64;
    let count = transactions
        .transactions()
        .par_iter()
        .filter(|transaction| candidate.is_subset_of(transaction))
        .count();

    Ok(count as f64 / N)
}

/// Support of every candidate. Candidates are counted independently in
/// parallel, so the result does not depend on scheduling.
pub fn count_supports(
    candidates: &HashSet<Itemset>,
    transactions: &TransactionSet,
) -> Result<SupportMap> {
    candidates
        .par_iter()
        .map(|candidate| Ok((candidate.clone(), support(candidate, transactions)?)))
        .collect()
}

/// Supports of the candidates that reach `min_support` (inclusive).
pub fn frequent_supports(
    candidates: &HashSet<Itemset>,
    transactions: &TransactionSet,
    min_support: Support,
) -> Result<SupportMap> {
    let mut supports = count_supports(candidates, transactions)?;
    supports.retain(|_, &mut support| support >= min_support);
    Ok(supports)
}
