//! Normalization service - raw record validation
//!
//! Turns untyped input rows into validated records, independent of whether
//! they arrived from a CSV file or a manual-entry form. Strict mode rejects
//! the whole batch on the first invalid row; lenient mode skips invalid rows
//! and counts them. Rows are never dropped silently.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::{RawRecord, TransactionStatus, TransactionType};

/// How to treat rows that fail validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Reject the whole batch on the first invalid row
    #[default]
    Strict,
    /// Skip invalid rows and report how many were dropped
    Lenient,
}

/// A validated record, before scoring
#[derive(Debug, Clone)]
pub struct NormalizedRecord {
    pub transaction_id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub status: Option<TransactionStatus>,
}

/// Outcome of normalizing a batch
#[derive(Debug)]
pub struct NormalizedBatch {
    pub records: Vec<NormalizedRecord>,
    /// Rows dropped in lenient mode; always 0 in strict mode
    pub skipped: usize,
}

/// Validate a batch of raw records in input order
pub fn normalize_batch(records: &[RawRecord], mode: ValidationMode) -> Result<NormalizedBatch> {
    let mut out = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for (idx, raw) in records.iter().enumerate() {
        match normalize_record(raw, idx + 1) {
            Ok(record) => out.push(record),
            Err(err) => match mode {
                ValidationMode::Strict => return Err(err),
                ValidationMode::Lenient => skipped += 1,
            },
        }
    }

    Ok(NormalizedBatch {
        records: out,
        skipped,
    })
}

/// Validate a single record. `row` is the 1-based position within the batch.
fn normalize_record(raw: &RawRecord, row: usize) -> Result<NormalizedRecord> {
    let transaction_id = raw.transaction_id.trim();
    if transaction_id.is_empty() {
        return Err(Error::malformed(row, "transaction_id", "must not be empty"));
    }

    let date = NaiveDate::parse_from_str(raw.date.trim(), "%Y-%m-%d").map_err(|_| {
        Error::malformed(
            row,
            "date",
            format!("'{}' is not a valid YYYY-MM-DD date", raw.date),
        )
    })?;

    let amount: Decimal = raw.amount.trim().parse().map_err(|_| {
        Error::malformed(row, "amount", format!("'{}' is not a number", raw.amount))
    })?;
    if amount < Decimal::ZERO {
        return Err(Error::malformed(
            row,
            "amount",
            format!("'{}' is negative", raw.amount),
        ));
    }

    let transaction_type = TransactionType::parse(raw.transaction_type.trim()).ok_or_else(|| {
        Error::malformed(
            row,
            "transaction_type",
            format!(
                "'{}' must be either \"Incoming\" or \"Outgoing\"",
                raw.transaction_type
            ),
        )
    })?;

    // An empty status cell means absent; anything else must parse exactly
    let status = match raw.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(TransactionStatus::parse(s).ok_or_else(|| {
            Error::malformed(
                row,
                "status",
                format!("'{}' must be \"successful\" or \"unsuccessful\"", s),
            )
        })?),
    };

    Ok(NormalizedRecord {
        transaction_id: transaction_id.to_string(),
        date,
        amount,
        transaction_type,
        status,
    })
}
