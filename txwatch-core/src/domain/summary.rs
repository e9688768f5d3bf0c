//! Summary and analysis result models

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Aggregate statistics derived from one classified batch.
///
/// Invariants: `flagged_count <= total_transactions`, `total_incoming +
/// total_outgoing == total_transactions`, and every average or percentage is
/// 0 (never NaN) when its subset is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_transactions: usize,
    pub flagged_count: usize,
    /// 0-100
    pub flagged_percentage: f64,
    pub avg_flagged_amount: f64,
    pub avg_normal_amount: f64,
    pub avg_incoming_amount: f64,
    pub avg_outgoing_amount: f64,
    pub total_incoming: usize,
    pub total_outgoing: usize,
}

/// The engine's sole output: the classified transactions (input order
/// preserved) paired with their summary. Consumers read it, never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    /// Rows dropped by lenient validation; always 0 in strict mode
    #[serde(default)]
    pub skipped_rows: usize,
}
