//! Ingest service - CSV row-set loading
//!
//! Reads a CSV file into raw records, preserving file order. The header row
//! is required and must name every required column; extra columns are
//! ignored. All value validation happens later in the normalizer, so a file
//! loads even when individual cells are malformed.

use std::io::Read;
use std::path::Path;

use crate::domain::result::{Error, Result};
use crate::domain::RawRecord;

/// Columns every input file must carry, by exact header name
pub const REQUIRED_COLUMNS: [&str; 4] = ["transaction_id", "date", "amount", "transaction_type"];

/// Optional settlement-status column
pub const STATUS_COLUMN: &str = "status";

/// Read raw records from a CSV file on disk
pub fn read_csv_file(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    read_records(&mut reader)
}

/// Read raw records from any CSV source
pub fn read_csv<R: Read>(input: R) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_reader(input);
    read_records(&mut reader)
}

fn read_records<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<RawRecord>> {
    let headers = reader.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }

    // Present by the check above
    let id_idx = headers.iter().position(|h| h == "transaction_id").unwrap();
    let date_idx = headers.iter().position(|h| h == "date").unwrap();
    let amount_idx = headers.iter().position(|h| h == "amount").unwrap();
    let type_idx = headers.iter().position(|h| h == "transaction_type").unwrap();
    let status_idx = headers.iter().position(|h| h == STATUS_COLUMN);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(RawRecord {
            transaction_id: row.get(id_idx).unwrap_or("").to_string(),
            date: row.get(date_idx).unwrap_or("").to_string(),
            amount: row.get(amount_idx).unwrap_or("").to_string(),
            transaction_type: row.get(type_idx).unwrap_or("").to_string(),
            status: status_idx
                .and_then(|i| row.get(i))
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.to_string()),
        });
    }

    Ok(records)
}
