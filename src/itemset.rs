use std::fmt::{Display, Formatter, Result};

use itertools::Itertools;

use crate::{transaction::Transaction, types::ItemId};

/// A set of items, kept sorted and free of duplicates so that two itemsets
/// with the same elements compare and hash equal however they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset(Vec<ItemId>);

impl Itemset {
    pub fn new<I: IntoIterator<Item = ItemId>>(items: I) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn singleton(item: ItemId) -> Self {
        Self(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.iter().merge(other.0.iter()).dedup().copied().collect())
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self(
            self.0
                .iter()
                .copied()
                .filter(|&item| !other.contains(item))
                .collect(),
        )
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0.iter().all(|&item| !other.contains(item))
    }

    /// True iff every item of `self` is present in the transaction.
    pub fn is_subset_of(&self, transaction: &Transaction) -> bool {
        self.0.iter().all(|&item| transaction.contains(item))
    }

    /// All subsets with exactly `size` items. Order follows the sorted items.
    pub fn subsets(&self, size: usize) -> impl Iterator<Item = Itemset> + '_ {
        // combinations of already sorted items stay sorted
        self.0
            .iter()
            .copied()
            .combinations(size)
            .map(Itemset)
    }
}

impl From<Vec<ItemId>> for Itemset {
    fn from(items: Vec<ItemId>) -> Self {
        Self::new(items)
    }
}

impl Display for Itemset {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashset;

    #[test]
    fn equality_ignores_construction_order() {
        assert_eq!(Itemset::new(vec![3, 1, 2]), Itemset::new(vec![2, 3, 1]));
        assert_eq!(Itemset::new(vec![1, 1, 2]), Itemset::new(vec![2, 1]));

        let set = hashset! { Itemset::new(vec![1, 2]), Itemset::new(vec![2, 1]) };
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn union_and_difference() {
        let a = Itemset::new(vec![1, 3]);
        let b = Itemset::new(vec![2, 3]);

        assert_eq!(a.union(&b), Itemset::new(vec![1, 2, 3]));
        assert_eq!(a.union(&b).difference(&a), Itemset::singleton(2));
        assert!(!a.is_disjoint(&b));
        assert!(Itemset::singleton(1).is_disjoint(&Itemset::singleton(2)));
    }

    #[test]
    fn subsets_of_size_k() {
        let itemset = Itemset::new(vec![4, 1, 9]);
        let subsets: Vec<Itemset> = itemset.subsets(2).collect();

        assert_eq!(
            subsets,
            vec![
                Itemset::new(vec![1, 4]),
                Itemset::new(vec![1, 9]),
                Itemset::new(vec![4, 9]),
            ]
        );
    }

    #[test]
    fn subset_of_transaction() {
        let transaction = Transaction::from_items(&[0, 2, 5], 6);

        assert!(Itemset::new(vec![0, 5]).is_subset_of(&transaction));
        assert!(!Itemset::new(vec![0, 1]).is_subset_of(&transaction));
        // ids beyond the universe are never present
        assert!(!Itemset::singleton(42).is_subset_of(&transaction));
    }
}
