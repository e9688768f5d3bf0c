//! Analysis service - the full detection pipeline
//!
//! Normalize -> score -> classify -> aggregate. The service is stateless:
//! every run is a pure function of (records, threshold, options), and nothing
//! is shared between invocations.

use crate::domain::result::{Error, Result};
use crate::domain::{AnalysisResult, RawRecord, Transaction};
use crate::services::normalize::{self, ValidationMode};
use crate::services::{aggregate, classify, stats};

/// Options for one analysis run
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    pub mode: ValidationMode,
}

/// Stateless anomaly-detection engine
#[derive(Debug, Default)]
pub struct AnalysisService {}

impl AnalysisService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the pipeline over a batch of raw records.
    ///
    /// The threshold is validated before any other work: it must be finite
    /// and strictly positive. An empty batch is valid input and produces an
    /// empty result with an all-zero summary. Output transaction order
    /// matches input record order.
    pub fn analyze(
        &self,
        records: &[RawRecord],
        threshold: f64,
        options: &AnalyzeOptions,
    ) -> Result<AnalysisResult> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::InvalidThreshold(threshold));
        }

        let batch = normalize::normalize_batch(records, options.mode)?;
        let scores = stats::zscores(&batch.records);

        let transactions: Vec<Transaction> = batch
            .records
            .into_iter()
            .zip(scores)
            .map(|(record, zscore)| {
                let classification = classify::classify(zscore, threshold, record.transaction_type);
                Transaction {
                    transaction_id: record.transaction_id,
                    date: record.date,
                    amount: record.amount,
                    transaction_type: record.transaction_type,
                    zscore,
                    is_flagged: classification.is_flagged,
                    reason: classification.reason,
                    status: record.status,
                }
            })
            .collect();

        let summary = aggregate::summarize(&transactions);

        Ok(AnalysisResult {
            transactions,
            summary,
            skipped_rows: batch.skipped,
        })
    }
}
