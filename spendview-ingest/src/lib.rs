//! spendview-ingest: CSV bank-statement loading and validation.

pub mod statement;

pub use statement::{parse_statement_csv, parse_statement_reader};
