use std::collections::{HashMap, HashSet};

use bitvec::prelude::*;
use tracing::debug;

use crate::{
    error::{AprioriError, Result},
    itemset::Itemset,
    types::{Inventory, ItemId, ItemName, ReverseLookup},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// One observed basket, stored as a bit per item of the universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    items: BitVec<usize, Lsb0>,
}

impl Transaction {
    /// Every id must be below `universe_size`.
    pub(crate) fn from_items(items: &[ItemId], universe_size: usize) -> Self {
        let mut bits = BitVec::repeat(false, universe_size);
        for &item in items {
            bits.set(item, true);
        }
        Self { items: bits }
    }

    pub fn contains(&self, item: ItemId) -> bool {
        item < self.items.len() && self.items[item]
    }

    pub fn len(&self) -> usize {
        self.items.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.items.not_any()
    }

    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter_ones()
    }
}

/// The transactions of one mining run together with the item universe they
/// draw from. Built once and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct TransactionSet {
    inventory: Inventory,
    reverse_lookup: ReverseLookup,
    transactions: Vec<Transaction>,
}

impl TransactionSet {
    /// Build from an ordered item universe and, per transaction, the ids of
    /// the items it contains. Item names must be unique and every id must
    /// index into `inventory`.
    pub fn from_ids(inventory: Inventory, rows: Vec<Vec<ItemId>>) -> Result<Self> {
        let mut reverse_lookup: ReverseLookup = HashMap::with_capacity(inventory.len());
        for (id, name) in inventory.iter().enumerate() {
            if reverse_lookup.insert(name.clone(), id).is_some() {
                return Err(AprioriError::InvalidInput(format!(
                    "item {name:?} appears more than once in the universe"
                )));
            }
        }

        let universe_size = inventory.len();
        if let Some(&item) = rows.iter().flatten().find(|&&item| item >= universe_size) {
            return Err(AprioriError::InvalidInput(format!(
                "item id {item} is outside a universe of {universe_size} items"
            )));
        }

        Ok(Self::build(inventory, reverse_lookup, &rows))
    }

    fn build(inventory: Inventory, reverse_lookup: ReverseLookup, rows: &[Vec<ItemId>]) -> Self {
        let universe_size = inventory.len();
        let transactions = rows
            .iter()
            .map(|row| Transaction::from_items(row, universe_size))
            .collect();

        Self {
            inventory,
            reverse_lookup,
            transactions,
        }
    }

    /// Build from raw labels. Ids are handed out in order of first appearance
    /// and repeated labels inside one transaction collapse.
    pub fn from_labels<T, S>(raw_transactions: &[T]) -> Self
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut reverse_lookup: ReverseLookup = HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        let mut inventory: Inventory = Vec::with_capacity(APPROX_NUM_UNIQUE_ITEMS);

        let rows: Vec<Vec<ItemId>> = raw_transactions
            .iter()
            .map(|raw_transaction| {
                let mut seen = HashSet::new();
                raw_transaction
                    .as_ref()
                    .iter()
                    .map(|label| {
                        let label = label.as_ref();
                        match reverse_lookup.get(label) {
                            Some(&item_id) => item_id,
                            None => {
                                let item_id = inventory.len();
                                reverse_lookup.insert(label.to_owned(), item_id);
                                inventory.push(label.to_owned());
                                item_id
                            }
                        }
                    })
                    .filter(|item_id| seen.insert(*item_id))
                    .collect()
            })
            .collect();

        debug!(
            transactions = rows.len(),
            items = inventory.len(),
            "interned transaction labels"
        );

        Self::build(inventory, reverse_lookup, &rows)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn inventory(&self) -> &[ItemName] {
        &self.inventory
    }

    pub fn item_id(&self, label: &str) -> Option<ItemId> {
        self.reverse_lookup.get(label).copied()
    }

    pub fn label(&self, item: ItemId) -> Option<&str> {
        self.inventory.get(item).map(String::as_str)
    }

    /// Labels of an itemset, sorted alphabetically.
    pub fn labels(&self, itemset: &Itemset) -> Vec<&str> {
        let mut labels: Vec<&str> = itemset
            .items()
            .iter()
            .filter_map(|&item| self.label(item))
            .collect();
        labels.sort_unstable();
        labels
    }

    /// Look up an itemset by labels. `None` if any label is unknown.
    pub fn itemset<S: AsRef<str>>(&self, labels: &[S]) -> Option<Itemset> {
        labels
            .iter()
            .map(|label| self.item_id(label.as_ref()))
            .collect::<Option<Vec<ItemId>>>()
            .map(Itemset::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_interned_in_order_of_appearance() {
        let set = TransactionSet::from_labels(&[vec!["bread", "milk"], vec!["milk", "eggs"]]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.inventory(), &["bread", "milk", "eggs"]);
        assert_eq!(set.item_id("eggs"), Some(2));
        assert_eq!(set.item_id("beer"), None);
        assert!(set.transactions()[1].contains(1));
        assert!(!set.transactions()[1].contains(0));
    }

    #[test]
    fn repeated_labels_collapse() {
        let set = TransactionSet::from_labels(&[vec!["beer", "beer", "cola"]]);

        assert_eq!(set.transactions()[0].len(), 2);
        assert_eq!(set.transactions()[0].items().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn itemset_lookup_by_label() {
        let set = TransactionSet::from_labels(&[vec!["a", "b", "c"]]);

        assert_eq!(set.itemset(&["c", "a"]), Some(Itemset::new(vec![0, 2])));
        assert_eq!(set.itemset(&["a", "z"]), None);
        assert_eq!(set.labels(&Itemset::new(vec![2, 0])), vec!["a", "c"]);
    }

    #[test]
    fn from_ids_rejects_out_of_range_items() {
        let err = TransactionSet::from_ids(vec!["a".into(), "b".into()], vec![vec![0, 2]])
            .unwrap_err();
        assert!(matches!(err, AprioriError::InvalidInput(_)));
    }

    #[test]
    fn from_ids_rejects_repeated_names() {
        let err = TransactionSet::from_ids(
            vec!["a".into(), "a".into(), "b".into()],
            vec![vec![0, 1]],
        )
        .unwrap_err();
        assert!(matches!(err, AprioriError::InvalidInput(_)));
    }

    #[test]
    fn from_ids_keeps_valid_rows() {
        let set = TransactionSet::from_ids(vec!["a".into(), "b".into()], vec![vec![1], vec![]])
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.item_id("b"), Some(1));
        assert!(set.transactions()[1].is_empty());
    }

    #[test]
    fn empty_transaction_has_no_items() {
        let transaction = Transaction::from_items(&[], 3);
        assert!(transaction.is_empty());
        assert!(!transaction.contains(0));
    }
}
