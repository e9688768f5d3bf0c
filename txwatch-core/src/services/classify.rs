//! Classifier - threshold comparison and reason text

use crate::domain::TransactionType;

/// Flag decision for one scored transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub is_flagged: bool,
    /// Empty when not flagged
    pub reason: String,
}

/// Compare a Z-score magnitude to the threshold and build the reason text.
///
/// Deterministic given (zscore, threshold, transaction_type). The threshold
/// is validated upstream by the analysis service, before any scoring runs.
pub fn classify(zscore: f64, threshold: f64, transaction_type: TransactionType) -> Classification {
    if zscore.abs() <= threshold {
        return Classification {
            is_flagged: false,
            reason: String::new(),
        };
    }

    let direction = if zscore > 0.0 { "above" } else { "below" };
    Classification {
        is_flagged: true,
        reason: format!(
            "Amount is {:.2} standard deviations {} the average for {} transactions",
            zscore.abs(),
            direction,
            transaction_type.label()
        ),
    }
}
