//! Core domain entities
//!
//! Pure data structures describing transaction batches and analysis output.
//! No I/O and no external services here.

mod summary;
mod transaction;
pub mod result;

pub use summary::{AnalysisResult, Summary};
pub use transaction::{RawRecord, Transaction, TransactionStatus, TransactionType};
