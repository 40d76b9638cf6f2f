//! Grouped sums over categorized transactions.
//!
//! Amounts keep their native statement sign, so aggregates are net flow:
//! a refund offsets a charge in the same bucket.

use std::collections::{BTreeMap, HashMap};

use crate::ruleset::Ruleset;
use crate::types::{CategorizedTransaction, Month, Transaction};

/// Derive the month bucket and category for every transaction.
///
/// Total: every input row comes back with exactly one category, falling
/// back to `OTHER_CATEGORY` when no rule matches. Nothing is dropped.
pub fn categorize_all(txns: Vec<Transaction>, ruleset: &Ruleset) -> Vec<CategorizedTransaction> {
    txns.into_iter()
        .map(|txn| {
            let month = Month::from(txn.date);
            let category = ruleset.categorize(&txn.description).to_string();
            CategorizedTransaction { txn, month, category }
        })
        .collect()
}

/// Net amount per category, sorted descending by absolute total, so the
/// largest flows come first regardless of direction.
///
/// Equal totals keep first-appearance order (stable sort), so output is
/// deterministic for a given input order.
pub fn spending_by_category(txns: &[CategorizedTransaction]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for t in txns {
        match index.get(t.category.as_str()) {
            Some(&i) => totals[i].1 += t.txn.amount,
            None => {
                index.insert(t.category.as_str(), totals.len());
                totals.push((t.category.clone(), t.txn.amount));
            }
        }
    }

    totals.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
    totals
}

/// Net amount per month, in chronological order.
pub fn monthly_spending(txns: &[CategorizedTransaction]) -> Vec<(Month, f64)> {
    let mut totals: BTreeMap<Month, f64> = BTreeMap::new();
    for t in txns {
        *totals.entry(t.month).or_insert(0.0) += t.txn.amount;
    }
    totals.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(date: (i32, u32, u32), description: &str, amount: f64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: description.to_string(),
            amount,
        }
    }

    fn sample_ruleset() -> Ruleset {
        Ruleset::from_json_str(
            r#"{
                "Groceries": ["walmart", "market"],
                "Dining": ["cafe"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn every_transaction_gets_a_nonempty_category() {
        let rules = sample_ruleset();
        let txns = vec![
            txn((2024, 1, 5), "WALMART #123", -50.0),
            txn((2024, 1, 20), "Corner Cafe", -12.5),
            txn((2024, 2, 1), "Salary", 2000.0),
        ];
        let categorized = categorize_all(txns, &rules);
        assert_eq!(categorized.len(), 3);
        assert!(categorized.iter().all(|t| !t.category.is_empty()));
        let cats: Vec<&str> = categorized.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(cats, ["Groceries", "Dining", "Other"]);
    }

    #[test]
    fn month_bucket_is_derived_from_date() {
        let rules = sample_ruleset();
        let categorized = categorize_all(vec![txn((2024, 3, 31), "Salary", 1.0)], &rules);
        assert_eq!(categorized[0].month, Month { year: 2024, month: 3 });
    }

    #[test]
    fn category_totals_sorted_descending() {
        let rules = sample_ruleset();
        let categorized = categorize_all(
            vec![
                txn((2024, 1, 5), "WALMART #123", -50.0),
                txn((2024, 1, 20), "Corner Cafe", -12.5),
                txn((2024, 2, 1), "Salary", 2000.0),
            ],
            &rules,
        );
        let by_cat = spending_by_category(&categorized);
        assert_eq!(
            by_cat,
            vec![
                ("Other".to_string(), 2000.0),
                ("Groceries".to_string(), -50.0),
                ("Dining".to_string(), -12.5),
            ]
        );
    }

    #[test]
    fn category_order_ignores_sign_of_the_total() {
        let rules = sample_ruleset();
        let categorized = categorize_all(
            vec![
                txn((2024, 1, 5), "WALMART #123", -50.0),
                txn((2024, 1, 10), "Gift received", 30.0),
                txn((2024, 1, 20), "Corner Cafe", -12.5),
            ],
            &rules,
        );
        let by_cat = spending_by_category(&categorized);
        // -50 outranks +30 outranks -12.5 by magnitude; signs stay native.
        assert_eq!(
            by_cat,
            vec![
                ("Groceries".to_string(), -50.0),
                ("Other".to_string(), 30.0),
                ("Dining".to_string(), -12.5),
            ]
        );
    }

    #[test]
    fn equal_totals_keep_first_appearance_order() {
        let rules = sample_ruleset();
        let categorized = categorize_all(
            vec![
                txn((2024, 1, 5), "Corner Cafe", -10.0),
                txn((2024, 1, 6), "WALMART", -10.0),
            ],
            &rules,
        );
        let by_cat = spending_by_category(&categorized);
        assert_eq!(by_cat[0].0, "Dining");
        assert_eq!(by_cat[1].0, "Groceries");
    }

    #[test]
    fn credits_net_against_debits_in_same_category() {
        let rules = sample_ruleset();
        let categorized = categorize_all(
            vec![
                txn((2024, 1, 5), "WALMART #123", -50.0),
                txn((2024, 1, 9), "WALMART REFUND", 20.0),
            ],
            &rules,
        );
        let by_cat = spending_by_category(&categorized);
        assert_eq!(by_cat, vec![("Groceries".to_string(), -30.0)]);
    }

    #[test]
    fn category_totals_conserve_the_grand_total() {
        let rules = sample_ruleset();
        let txns = vec![
            txn((2024, 1, 5), "WALMART #123", -50.0),
            txn((2024, 1, 20), "Corner Cafe", -12.5),
            txn((2024, 2, 1), "Salary", 2000.0),
            txn((2024, 2, 14), "Central Market", -88.25),
        ];
        let grand: f64 = txns.iter().map(|t| t.amount).sum();
        let categorized = categorize_all(txns, &rules);
        let by_cat_sum: f64 = spending_by_category(&categorized).iter().map(|(_, v)| v).sum();
        assert!((by_cat_sum - grand).abs() < 1e-9);
    }

    #[test]
    fn monthly_totals_are_chronological_across_years() {
        let rules = sample_ruleset();
        let categorized = categorize_all(
            vec![
                txn((2024, 1, 20), "Corner Cafe", -12.5),
                txn((2023, 12, 30), "WALMART", -40.0),
                txn((2024, 1, 5), "WALMART #123", -50.0),
                txn((2024, 2, 1), "Salary", 2000.0),
            ],
            &rules,
        );
        let monthly = monthly_spending(&categorized);
        assert_eq!(
            monthly,
            vec![
                (Month { year: 2023, month: 12 }, -40.0),
                (Month { year: 2024, month: 1 }, -62.5),
                (Month { year: 2024, month: 2 }, 2000.0),
            ]
        );
    }

    #[test]
    fn empty_input_yields_empty_aggregates() {
        let rules = sample_ruleset();
        let categorized = categorize_all(Vec::new(), &rules);
        assert!(spending_by_category(&categorized).is_empty());
        assert!(monthly_spending(&categorized).is_empty());
    }
}
