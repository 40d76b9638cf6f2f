//! spendview-core: statement types, keyword categorization, and aggregates.

pub mod aggregate;
pub mod error;
pub mod report;
pub mod ruleset;
pub mod types;

pub use aggregate::{categorize_all, monthly_spending, spending_by_category};
pub use error::{Result, SpendError};
pub use report::{DEFAULT_PREVIEW_LIMIT, Report};
pub use ruleset::{CategoryRule, OTHER_CATEGORY, Ruleset};
pub use types::{CategorizedTransaction, Month, Transaction};
