use std::fmt::{Display, Formatter, Result};

use crate::{itemset::Itemset, types::Confidence};

/// An association rule `antecedent => consequent`.
///
/// The two sides are disjoint and their union is a frequent itemset.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub confidence: Confidence,
}

impl Rule {
    /// The frequent itemset the rule was split from.
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} => {} ({:.4})",
            self.antecedent, self.consequent, self.confidence
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rule_itemset() {
        let rule = Rule {
            antecedent: Itemset::new(vec![3, 1]),
            consequent: Itemset::new(vec![2]),
            confidence: 0.5,
        };
        assert_eq!(rule.itemset(), Itemset::new(vec![1, 2, 3]));
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule {
            antecedent: Itemset::new(vec![1, 2]),
            consequent: Itemset::new(vec![5]),
            confidence: 0.75,
        };
        assert_eq!(rule.to_string(), "{1, 2} => {5} (0.7500)");
    }
}
