//! Aggregator - batch summary statistics

use rust_decimal::prelude::ToPrimitive;

use crate::domain::{Summary, Transaction, TransactionType};

/// Compute the summary for a classified batch in a single pass.
///
/// Every average is the arithmetic mean of `amount` over its subset, 0 when
/// the subset is empty. An empty batch yields an all-zero summary.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary {
        total_transactions: transactions.len(),
        ..Summary::default()
    };

    let mut flagged_sum = 0.0;
    let mut normal_sum = 0.0;
    let mut incoming_sum = 0.0;
    let mut outgoing_sum = 0.0;

    for tx in transactions {
        let amount = tx.amount.to_f64().unwrap_or(0.0);

        if tx.is_flagged {
            summary.flagged_count += 1;
            flagged_sum += amount;
        } else {
            normal_sum += amount;
        }

        match tx.transaction_type {
            TransactionType::Incoming => {
                summary.total_incoming += 1;
                incoming_sum += amount;
            }
            TransactionType::Outgoing => {
                summary.total_outgoing += 1;
                outgoing_sum += amount;
            }
        }
    }

    let normal_count = summary.total_transactions - summary.flagged_count;

    if summary.total_transactions > 0 {
        summary.flagged_percentage =
            summary.flagged_count as f64 / summary.total_transactions as f64 * 100.0;
    }
    if summary.flagged_count > 0 {
        summary.avg_flagged_amount = flagged_sum / summary.flagged_count as f64;
    }
    if normal_count > 0 {
        summary.avg_normal_amount = normal_sum / normal_count as f64;
    }
    if summary.total_incoming > 0 {
        summary.avg_incoming_amount = incoming_sum / summary.total_incoming as f64;
    }
    if summary.total_outgoing > 0 {
        summary.avg_outgoing_amount = outgoing_sum / summary.total_outgoing as f64;
    }

    summary
}
