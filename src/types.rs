use std::collections::HashMap;

use crate::itemset::Itemset;

pub type ItemId = usize;
pub type ItemName = String;

pub type ReverseLookup = HashMap<ItemName, ItemId>;
pub type Inventory = Vec<ItemName>;

pub type Support = f64;
pub type Confidence = f64;

pub type ItemsetLength = usize;
/// Itemset -> support, covering every level.
pub type SupportMap = HashMap<Itemset, Support>;
