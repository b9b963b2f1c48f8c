use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::itemset::Itemset;

/// Candidates of size k + 1 from the frequent itemsets of size k.
///
/// Every unordered pair is unioned; a union is kept only when it has exactly
/// k + 1 items and each of its k-subsets is itself frequent. With fewer than
/// two frequent itemsets nothing can be joined and the result is empty.
pub fn join_step(frequent: &HashSet<Itemset>) -> HashSet<Itemset> {
    if frequent.len() < 2 {
        return HashSet::new();
    }

    let k = match frequent.iter().next() {
        Some(itemset) => itemset.len(),
        None => return HashSet::new(),
    };

    let candidates: HashSet<Itemset> = frequent
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.union(b))
        .filter(|union| union.len() == k + 1)
        .unique()
        .filter(|union| has_frequent_subsets(union, frequent))
        .collect();

    debug!(
        size = k + 1,
        frequent = frequent.len(),
        candidates = candidates.len(),
        "joined candidates"
    );

    candidates
}

/// Closure check: every subset one item smaller must be frequent.
fn has_frequent_subsets(candidate: &Itemset, frequent: &HashSet<Itemset>) -> bool {
    candidate
        .subsets(candidate.len() - 1)
        .all(|subset| frequent.contains(&subset))
}
