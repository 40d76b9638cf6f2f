//! Error taxonomy for statement ingestion and ruleset loading.
//!
//! Everything here is a deterministic data-shape problem, so there is no
//! retry story: a bad header or cell rejects the dataset wholesale, and a
//! bad ruleset blocks startup. Categorization itself never fails.

use thiserror::Error;

/// All errors produced by the spendview pipeline.
#[derive(Debug, Error)]
pub enum SpendError {
    /// The statement header is missing required columns.
    #[error("statement is missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// A cell could not be parsed; no partial acceptance.
    #[error("row {row}: unparsable {field} value {value:?}")]
    Format {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// Ruleset file missing or malformed. Fatal at startup.
    #[error("ruleset config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias used throughout the spendview crates.
pub type Result<T> = std::result::Result<T, SpendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_lists_all_missing_columns() {
        let err = SpendError::Schema {
            missing: vec!["Date".to_string(), "Amount".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "statement is missing required column(s): Date, Amount"
        );
    }

    #[test]
    fn format_error_names_row_and_value() {
        let err = SpendError::Format {
            row: 3,
            field: "Amount",
            value: "N/A".to_string(),
        };
        assert_eq!(err.to_string(), "row 3: unparsable Amount value \"N/A\"");
    }
}
