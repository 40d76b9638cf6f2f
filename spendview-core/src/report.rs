//! The three data products handed to the presentation layer.

use serde::Serialize;

use crate::aggregate::{categorize_all, monthly_spending, spending_by_category};
use crate::ruleset::Ruleset;
use crate::types::{CategorizedTransaction, Month, Transaction};

/// Preview rows shown by default, matching the dashboard's head-of-table view.
pub const DEFAULT_PREVIEW_LIMIT: usize = 20;

/// Everything a renderer needs: preview table, bar/pie source, line source.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// First N categorized rows, in input order.
    pub preview: Vec<CategorizedTransaction>,
    /// Net amount per category, descending by absolute total.
    pub spending_by_category: Vec<(String, f64)>,
    /// Net amount per month, chronological.
    pub monthly_spending: Vec<(Month, f64)>,
}

impl Report {
    /// Run the whole categorize-and-aggregate pass over one dataset.
    pub fn build(txns: Vec<Transaction>, ruleset: &Ruleset, preview_limit: usize) -> Report {
        let categorized = categorize_all(txns, ruleset);
        let spending_by_category = spending_by_category(&categorized);
        let monthly_spending = monthly_spending(&categorized);

        let mut preview = categorized;
        preview.truncate(preview_limit);

        Report {
            preview,
            spending_by_category,
            monthly_spending,
        }
    }
}
