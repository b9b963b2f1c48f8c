//! Reads a membership table into a [`TransactionSet`].
//!
//! The header row names the item universe. Every following row is one
//! transaction; an item belongs to it when its cell equals the marker
//! (`t` by default).

use std::{collections::HashMap, fs::File, io::Read, path::Path};

use tracing::{debug, info};

use crate::{
    error::{AprioriError, Result},
    transaction::TransactionSet,
    types::{Inventory, ItemId, ReverseLookup},
};

pub const DEFAULT_MARKER: &str = "t";

/// Load transactions from a CSV file on disk.
pub fn load_transactions<P: AsRef<Path>>(path: P, marker: &str) -> Result<TransactionSet> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let file = File::open(path).map_err(|err| AprioriError::DataUnavailable {
        source: source.clone(),
        reason: err.to_string(),
    })?;

    let transactions = read_transactions(file, &source, marker)?;
    info!(
        source = %source,
        transactions = transactions.len(),
        items = transactions.inventory().len(),
        "loaded transactions"
    );

    Ok(transactions)
}

/// Load transactions from any CSV reader. `source` only names the input in
/// error messages.
pub fn read_transactions<R: Read>(reader: R, source: &str, marker: &str) -> Result<TransactionSet> {
    let unavailable = |err: csv::Error| AprioriError::DataUnavailable {
        source: source.to_owned(),
        reason: err.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // repeated column names name the same item
    let mut inventory: Inventory = vec![];
    let mut reverse_lookup: ReverseLookup = HashMap::new();
    let column_ids: Vec<ItemId> = reader
        .headers()
        .map_err(unavailable)?
        .iter()
        .map(|name| {
            *reverse_lookup.entry(name.to_owned()).or_insert_with(|| {
                inventory.push(name.to_owned());
                inventory.len() - 1
            })
        })
        .collect();

    if inventory.iter().all(|name| name.is_empty()) {
        return Err(AprioriError::InvalidInput(format!(
            "{source} has no item columns"
        )));
    }

    let mut rows: Vec<Vec<ItemId>> = vec![];
    for record in reader.records() {
        let record = record.map_err(unavailable)?;
        // short rows are fine, missing cells are non-members
        if record.len() > column_ids.len() {
            let line = record.position().map_or(0, |position| position.line());
            return Err(AprioriError::DataUnavailable {
                source: source.to_owned(),
                reason: format!(
                    "line {line} has {} cells but the header names {} columns",
                    record.len(),
                    column_ids.len()
                ),
            });
        }

        let mut row: Vec<ItemId> = record
            .iter()
            .zip(&column_ids)
            .filter(|(cell, _)| *cell == marker)
            .map(|(_, &item_id)| item_id)
            .collect();
        row.sort_unstable();
        row.dedup();
        rows.push(row);
    }

    debug!(source, rows = rows.len(), "parsed membership table");

    TransactionSet::from_ids(inventory, rows)
}
