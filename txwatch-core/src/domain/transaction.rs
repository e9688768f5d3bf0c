//! Transaction domain model

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction. Input must match the variant name
/// case-sensitively; values like "incoming" or "IN" are rejected, not coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Incoming,
    Outgoing,
}

impl TransactionType {
    /// Parse the exact wire spelling ("Incoming" / "Outgoing")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Incoming" => Some(Self::Incoming),
            "Outgoing" => Some(Self::Outgoing),
            _ => None,
        }
    }

    /// Lowercase label used in reason text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incoming => write!(f, "Incoming"),
            Self::Outgoing => write!(f, "Outgoing"),
        }
    }
}

/// Settlement outcome reported by the source. Informational only: it is
/// carried through to the output but never enters the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Successful,
    Unsuccessful,
}

impl TransactionStatus {
    /// Parse the exact wire spelling ("successful" / "unsuccessful")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "successful" => Some(Self::Successful),
            "unsuccessful" => Some(Self::Unsuccessful),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Successful => write!(f, "successful"),
            Self::Unsuccessful => write!(f, "unsuccessful"),
        }
    }
}

/// An untyped input row, as delivered by a CSV file or a manual-entry form.
/// All fields are raw strings; validation happens in the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub transaction_id: String,
    /// Expected ISO date, YYYY-MM-DD
    pub date: String,
    /// Decimal string, no currency symbols or separators
    pub amount: String,
    /// Expected "Incoming" or "Outgoing"
    pub transaction_type: String,
    /// Optional "successful" / "unsuccessful"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A classified transaction, one analysis run's view of a single record.
///
/// `zscore`, `is_flagged` and `reason` are always set together, against the
/// same threshold for the whole batch. Instances are immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub zscore: f64,
    pub is_flagged: bool,
    /// Empty when the transaction is not flagged
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
}
