//! Text tables for frequent itemsets and association rules.
//!
//! Rows are sorted by itemset (or antecedent) size, then alphabetically by
//! label. Support and confidence are shown as percentages.

use std::fmt;

use itertools::Itertools;

use crate::{
    rules::Rule,
    transaction::TransactionSet,
    types::{Support, SupportMap},
};

const NO_WIDTH: usize = 3;
const LABEL_WIDTH: usize = 62;
const VALUE_WIDTH: usize = 9;

fn rule_line(value_width: usize) -> String {
    format!(
        "|{}+{}+{}|",
        "-".repeat(NO_WIDTH + 2),
        "-".repeat(LABEL_WIDTH + 2),
        "-".repeat(value_width + 2)
    )
}

fn border(value_width: usize) -> String {
    "-".repeat(NO_WIDTH + LABEL_WIDTH + value_width + 10)
}

fn bracketed(labels: &[&str]) -> String {
    format!("[{}]", labels.iter().join(", "))
}

/// Frequent itemsets as `(labels, support)`, smallest first.
pub fn sorted_itemsets<'t>(
    frequent: &SupportMap,
    transactions: &'t TransactionSet,
) -> Vec<(Vec<&'t str>, Support)> {
    frequent
        .iter()
        .map(|(itemset, &support)| (transactions.labels(itemset), support))
        .sorted_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .collect()
}

/// Rules with their sides resolved to labels, smallest antecedent first.
pub fn sorted_rules<'r, 't>(
    rules: &'r [Rule],
    transactions: &'t TransactionSet,
) -> Vec<(Vec<&'t str>, Vec<&'t str>, &'r Rule)> {
    rules
        .iter()
        .map(|rule| {
            (
                transactions.labels(&rule.antecedent),
                transactions.labels(&rule.consequent),
                rule,
            )
        })
        .sorted_by(|(a, a_conseq, _), (b, b_conseq, _)| {
            a.len()
                .cmp(&b.len())
                .then_with(|| a.cmp(b))
                .then_with(|| a_conseq.cmp(b_conseq))
        })
        .collect()
}

/// Frequent-itemset table; `Display` writes it line by line.
pub struct FrequentItemsetTable<'a> {
    pub frequent: &'a SupportMap,
    pub transactions: &'a TransactionSet,
}

impl fmt::Display for FrequentItemsetTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frequent Itemsets:")?;
        writeln!(f, "{}", border(VALUE_WIDTH))?;
        writeln!(
            f,
            "| {:<NO_WIDTH$} | {:<LABEL_WIDTH$} | {:<VALUE_WIDTH$} |",
            "No", "Itemset", "Support"
        )?;
        writeln!(f, "{}", rule_line(VALUE_WIDTH))?;

        for (no, (labels, support)) in sorted_itemsets(self.frequent, self.transactions)
            .iter()
            .enumerate()
        {
            writeln!(
                f,
                "| {:<NO_WIDTH$} | {:<LABEL_WIDTH$} | {:>8.2}% |",
                no + 1,
                bracketed(labels),
                support * 100.0
            )?;
        }

        writeln!(f, "{}", border(VALUE_WIDTH))
    }
}

/// Association-rule table; `Display` writes it line by line.
pub struct RuleTable<'a> {
    pub rules: &'a [Rule],
    pub transactions: &'a TransactionSet,
}

impl fmt::Display for RuleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const CONF_WIDTH: usize = VALUE_WIDTH + 1;

        writeln!(f, "Association Rules:")?;
        writeln!(f, "{}", border(CONF_WIDTH))?;
        writeln!(
            f,
            "| {:<NO_WIDTH$} | {:<LABEL_WIDTH$} | {:<CONF_WIDTH$} |",
            "No", "Rule", "Confidence"
        )?;
        writeln!(f, "{}", rule_line(CONF_WIDTH))?;

        for (no, (antecedent, consequent, rule)) in sorted_rules(self.rules, self.transactions)
            .iter()
            .enumerate()
        {
            let sides = format!("{} => {}", bracketed(antecedent), bracketed(consequent));
            writeln!(
                f,
                "| {:<NO_WIDTH$} | {:<LABEL_WIDTH$} | {:>9.2}% |",
                no + 1,
                sides,
                rule.confidence * 100.0
            )?;
        }

        writeln!(f, "{}", border(CONF_WIDTH))
    }
}

pub fn render_frequent_itemsets(frequent: &SupportMap, transactions: &TransactionSet) -> String {
    FrequentItemsetTable {
        frequent,
        transactions,
    }
    .to_string()
}

pub fn render_rules(rules: &[Rule], transactions: &TransactionSet) -> String {
    RuleTable {
        rules,
        transactions,
    }
    .to_string()
}

/// Both tables, separated by a blank line.
pub fn render(frequent: &SupportMap, rules: &[Rule], transactions: &TransactionSet) -> String {
    format!(
        "{}\n{}",
        FrequentItemsetTable {
            frequent,
            transactions
        },
        RuleTable {
            rules,
            transactions
        }
    )
}
