use rayon::prelude::*;
use tracing::info;

use crate::{
    config::check_threshold,
    error::{AprioriError, Result},
    itemset::Itemset,
    rules::rule::Rule,
    types::{Confidence, Support, SupportMap},
};

/// Generate rules based on frequent itemsets
pub fn generate_rules(counter: &SupportMap, min_conf: Confidence) -> Result<Vec<Rule>> {
    check_threshold("min_confidence", min_conf)?;

    let rules: Vec<Rule> = counter
        .par_iter()
        .filter(|(itemset, _)| itemset.len() > 1)
        .map(|(itemset, &support)| splits(itemset, support, min_conf, counter))
        .collect::<Result<Vec<Vec<Rule>>>>()?
        .into_iter()
        .flatten()
        .collect();

    info!(rules = rules.len(), min_conf, "rule generation finished");

    Ok(rules)
}

/// Every split of one frequent itemset into antecedent and consequent whose
/// confidence reaches `min_conf`. Splits are independent, so two rules from
/// the same itemset may share a confidence.
fn splits(
    itemset: &Itemset,
    support: Support,
    min_conf: Confidence,
    counter: &SupportMap,
) -> Result<Vec<Rule>> {
    let mut rules = vec![];

    for size in 1..itemset.len() {
        for antecedent in itemset.subsets(size) {
            let antecedent_support = counter.get(&antecedent).copied().ok_or_else(|| {
                AprioriError::InternalInvariantViolation(format!(
                    "no support recorded for {antecedent}, a subset of frequent itemset {itemset}"
                ))
            })?;

            let confidence = support / antecedent_support;
            if confidence >= min_conf {
                let consequent = itemset.difference(&antecedent);
                rules.push(Rule {
                    antecedent,
                    consequent,
                    confidence,
                });
            }
        }
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    fn counter() -> SupportMap {
        let n = 20.0;
        hashmap! {
            Itemset::new(vec![1]) => 9.0 / n,
            Itemset::new(vec![2]) => 8.0 / n,
            Itemset::new(vec![3]) => 12.0 / n,
            Itemset::new(vec![4]) => 13.0 / n,
            Itemset::new(vec![1, 2]) => 4.0 / n,
            Itemset::new(vec![1, 3]) => 5.0 / n,
            Itemset::new(vec![1, 4]) => 6.0 / n,
            Itemset::new(vec![2, 3]) => 3.0 / n,
            Itemset::new(vec![2, 4]) => 5.0 / n,
            Itemset::new(vec![3, 4]) => 3.0 / n,
            Itemset::new(vec![1, 2, 3]) => 3.0 / n,
            Itemset::new(vec![1, 2, 4]) => 3.0 / n,
            Itemset::new(vec![1, 3, 4]) => 3.0 / n,
            Itemset::new(vec![2, 3, 4]) => 3.0 / n,
            Itemset::new(vec![1, 2, 3, 4]) => 2.0 / n,
        }
    }

    fn sides(rules: &[Rule]) -> Vec<(Vec<usize>, Vec<usize>)> {
        let mut sides: Vec<_> = rules
            .iter()
            .map(|rule| (rule.antecedent.items().to_vec(), rule.consequent.items().to_vec()))
            .collect();
        sides.sort();
        sides
    }

    #[test]
    fn test_1() {
        let assoc_rules = generate_rules(&counter(), 0.8).unwrap();

        // only {2, 3} and {3, 4} are as frequent as their supersets
        assert_eq!(
            sides(&assoc_rules),
            vec![
                (vec![2, 3], vec![1]),
                (vec![2, 3], vec![4]),
                (vec![3, 4], vec![1]),
                (vec![3, 4], vec![2]),
            ]
        );
        assert!(assoc_rules.iter().all(|rule| rule.confidence == 1.0));
    }

    #[test]
    fn every_split_is_enumerated_at_low_confidence() {
        let counter = hashmap! {
            Itemset::new(vec![1]) => 0.5,
            Itemset::new(vec![2]) => 0.5,
            Itemset::new(vec![3]) => 0.5,
            Itemset::new(vec![1, 2]) => 0.5,
            Itemset::new(vec![1, 3]) => 0.5,
            Itemset::new(vec![2, 3]) => 0.5,
            Itemset::new(vec![1, 2, 3]) => 0.5,
        };
        let assoc_rules = generate_rules(&counter, 1.0).unwrap();

        // 3 pairs x 2 splits + 6 splits of the triple
        assert_eq!(assoc_rules.len(), 12);
        for rule in &assoc_rules {
            assert!(rule.antecedent.is_disjoint(&rule.consequent));
            assert!(counter.contains_key(&rule.itemset()));
        }
    }

    #[test]
    fn confidence_threshold_is_inclusive() {
        let counter = hashmap! {
            Itemset::new(vec![1]) => 0.8,
            Itemset::new(vec![2]) => 0.4,
            Itemset::new(vec![1, 2]) => 0.4,
        };
        let assoc_rules = generate_rules(&counter, 0.5).unwrap();

        assert_eq!(
            sides(&assoc_rules),
            vec![(vec![1], vec![2]), (vec![2], vec![1])]
        );
    }

    #[test]
    fn singletons_produce_no_rules() {
        let counter = hashmap! { Itemset::new(vec![1]) => 1.0 };
        assert!(generate_rules(&counter, 0.1).unwrap().is_empty());
    }

    #[test]
    fn missing_subset_support_is_an_invariant_violation() {
        let counter = hashmap! {
            Itemset::new(vec![1]) => 0.5,
            Itemset::new(vec![1, 2]) => 0.5,
        };
        let err = generate_rules(&counter, 0.5).unwrap_err();
        assert!(matches!(err, AprioriError::InternalInvariantViolation(_)));
    }

    #[test]
    fn invalid_confidence_fails() {
        assert!(generate_rules(&counter(), 0.0).is_err());
        assert!(generate_rules(&counter(), 1.5).is_err());
    }
}
