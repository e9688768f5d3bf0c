//! Txwatch Core - Z-score anomaly detection for transaction batches
//!
//! The engine is a pure function of (records, threshold): raw rows are
//! validated, scored against their transaction-type partition, classified
//! against the caller's threshold, and summarized. No state survives between
//! runs.
//!
//! - **domain**: data model (RawRecord, Transaction, Summary, AnalysisResult)
//!   and the error taxonomy
//! - **services**: pipeline stages (normalize, stats, classify, aggregate),
//!   the orchestrating analysis service, CSV ingestion, and sample data

pub mod domain;
pub mod services;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{
    AnalysisResult, RawRecord, Summary, Transaction, TransactionStatus, TransactionType,
};
pub use services::{AnalysisService, AnalyzeOptions, ValidationMode};
