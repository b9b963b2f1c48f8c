pub mod count;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::{
    combi::join_step,
    config::check_threshold,
    error::{AprioriError, Result},
    itemset::Itemset,
    itemsets::count::frequent_supports,
    transaction::TransactionSet,
    types::{ItemsetLength, Support, SupportMap},
};

/// Where the level-wise search currently is.
#[derive(Debug)]
enum Level {
    Initializing,
    Leveling {
        size: ItemsetLength,
        candidates: HashSet<Itemset>,
    },
    Terminated,
}

/// Generate frequent itemsets of every size from a collection of transactions.
///
/// Singletons seen in any transaction seed the search. At each level the
/// candidates reaching `min_support` (inclusive) are merged into the
/// result and joined into the next level's candidates, until no candidate
/// survives.
pub fn generate_frequent_itemsets(
    transactions: &TransactionSet,
    min_support: Support,
) -> Result<SupportMap> {
    let mut all_frequent_itemsets = SupportMap::new();
    let mut level = Level::Initializing;

    loop {
        level = match level {
            Level::Initializing => {
                check_threshold("min_support", min_support)?;
                if transactions.is_empty() {
                    return Err(AprioriError::InvalidInput(
                        "transaction collection is empty".into(),
                    ));
                }
                Level::Leveling {
                    size: 1,
                    candidates: initial_candidates(transactions),
                }
            }
            Level::Leveling { size, candidates } => {
                let frequent = level_step(
                    size,
                    &candidates,
                    transactions,
                    min_support,
                    &mut all_frequent_itemsets,
                )?;
                let next = join_step(&frequent);
                if next.is_empty() {
                    Level::Terminated
                } else {
                    Level::Leveling {
                        size: size + 1,
                        candidates: next,
                    }
                }
            }
            Level::Terminated => break,
        };
    }

    info!(
        frequent_itemsets = all_frequent_itemsets.len(),
        "frequent itemset search finished"
    );

    Ok(all_frequent_itemsets)
}

/// Every item that occurs in at least one transaction, as a 1-itemset.
fn initial_candidates(transactions: &TransactionSet) -> HashSet<Itemset> {
    transactions
        .transactions()
        .iter()
        .flat_map(|transaction| transaction.items())
        .map(Itemset::singleton)
        .collect()
}

/// Count one level, fold its frequent itemsets into `accumulator` and
/// return them for the join.
fn level_step(
    size: ItemsetLength,
    candidates: &HashSet<Itemset>,
    transactions: &TransactionSet,
    min_support: Support,
    accumulator: &mut SupportMap,
) -> Result<HashSet<Itemset>> {
    debug!(size, candidates = candidates.len(), "counting itemsets");

    let frequent = frequent_supports(candidates, transactions, min_support)?;
    let survivors: HashSet<Itemset> = frequent.keys().cloned().collect();

    info!(
        size,
        candidates = candidates.len(),
        frequent = survivors.len(),
        "level done"
    );

    accumulator.extend(frequent);
    Ok(survivors)
}
