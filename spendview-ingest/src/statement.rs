//! CSV bank-statement loader.
//!
//! Expected header row: `Date,Description,Amount` (exact names, any column
//! order, extra columns ignored). Validation is strict: a missing column
//! or an unparsable Date/Amount cell rejects the whole dataset rather than
//! silently dropping rows.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use spendview_core::{Result, SpendError, Transaction};

const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Description", "Amount"];

// %y before %Y: chrono's %Y accepts two digits, so trying it first would
// turn "1/6/24" into year 0024. %y rejects trailing digits, so four-digit
// years still fall through to %Y.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

/// Parse a statement CSV file into validated transactions.
pub fn parse_statement_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let file = File::open(path.as_ref())?;
    parse_statement_reader(file)
}

/// Parse a statement from any reader.
///
/// One-shot, in-memory transform: the reader is consumed fully and nothing
/// is retained between calls.
pub fn parse_statement_reader<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    let (Some(date_col), Some(desc_col), Some(amount_col)) = (
        position("Date"),
        position("Description"),
        position("Amount"),
    ) else {
        let missing = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| name.to_string())
            .collect();
        return Err(SpendError::Schema { missing });
    };

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // 1-based line number, accounting for the header row.
        let row = i + 2;

        let date_raw = record.get(date_col).unwrap_or("").trim();
        let date = parse_date(date_raw).ok_or_else(|| SpendError::Format {
            row,
            field: "Date",
            value: date_raw.to_string(),
        })?;

        let amount_raw = record.get(amount_col).unwrap_or("").trim();
        let amount = parse_amount(amount_raw).ok_or_else(|| SpendError::Format {
            row,
            field: "Amount",
            value: amount_raw.to_string(),
        })?;

        // A missing cell coerces to empty text here, at the data-model
        // boundary; the categorizer then falls back to "Other".
        let description = record.get(desc_col).unwrap_or("").trim().to_string();

        out.push(Transaction {
            date,
            description,
            amount,
        });
    }

    Ok(out)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Signed decimal, tolerating a currency sign and thousands separators
/// ("-$1,234.56"). Anything else, including empty cells, is unparsable.
fn parse_amount(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned.trim().parse::<f64>().ok().filter(|a| a.is_finite())
}
