//! Statistics engine - per-partition mean, deviation, and Z-scores
//!
//! Z-scores are computed per transaction-type partition: incoming amounts are
//! scored against incoming statistics only, outgoing against outgoing. The
//! two directions have different amount distributions and must not share a
//! reference population.

use rust_decimal::prelude::ToPrimitive;

use crate::domain::TransactionType;
use crate::services::normalize::NormalizedRecord;

/// Mean and population standard deviation of one transaction-type partition
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartitionStats {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divide by N, not N-1)
    pub std_dev: f64,
}

impl PartitionStats {
    /// Compute statistics over a partition's amounts
    pub fn from_amounts(amounts: &[f64]) -> Self {
        let count = amounts.len();
        if count == 0 {
            return Self::default();
        }

        let mean = amounts.iter().sum::<f64>() / count as f64;
        let variance = amounts
            .iter()
            .map(|a| {
                let d = a - mean;
                d * d
            })
            .sum::<f64>()
            / count as f64;

        Self {
            count,
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// Z-score of one amount against this partition.
    ///
    /// Policy for degenerate partitions: fewer than 2 members, or all amounts
    /// identical (zero deviation), score 0 for every member. No anomaly is
    /// statistically detectable in such a partition.
    pub fn zscore(&self, amount: f64) -> f64 {
        if self.count < 2 || self.std_dev == 0.0 {
            return 0.0;
        }
        (amount - self.mean) / self.std_dev
    }
}

/// Compute one Z-score per record, each against its own transaction-type
/// partition. Output is index-aligned with the input.
pub fn zscores(records: &[NormalizedRecord]) -> Vec<f64> {
    let incoming = partition_stats(records, TransactionType::Incoming);
    let outgoing = partition_stats(records, TransactionType::Outgoing);

    records
        .iter()
        .map(|rec| {
            let stats = match rec.transaction_type {
                TransactionType::Incoming => &incoming,
                TransactionType::Outgoing => &outgoing,
            };
            stats.zscore(amount_f64(rec))
        })
        .collect()
}

fn partition_stats(records: &[NormalizedRecord], partition: TransactionType) -> PartitionStats {
    let amounts: Vec<f64> = records
        .iter()
        .filter(|rec| rec.transaction_type == partition)
        .map(amount_f64)
        .collect();
    PartitionStats::from_amounts(&amounts)
}

fn amount_f64(record: &NormalizedRecord) -> f64 {
    record.amount.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::TransactionType;

    fn record(amount: i64, tx_type: TransactionType) -> NormalizedRecord {
        NormalizedRecord {
            transaction_id: "T".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount: Decimal::new(amount, 0),
            transaction_type: tx_type,
            status: None,
        }
    }

    #[test]
    fn test_population_std_dev_divides_by_n() {
        // {100, 100, 10000}: mean 3400, variance (3300^2 * 2 + 6600^2) / 3
        let stats = PartitionStats::from_amounts(&[100.0, 100.0, 10000.0]);
        assert_eq!(stats.count, 3);
        assert!((stats.mean - 3400.0).abs() < 1e-9);
        assert!((stats.std_dev - 21_780_000.0_f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_zscore_formula() {
        let stats = PartitionStats::from_amounts(&[100.0, 100.0, 10000.0]);
        // (10000 - 3400) / 4666.9... = sqrt(2)
        let z = stats.zscore(10000.0);
        assert!((z - 2.0_f64.sqrt()).abs() < 1e-9);
        let z = stats.zscore(100.0);
        assert!((z + 1.0 / 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_single_member_partition_scores_zero() {
        let stats = PartitionStats::from_amounts(&[5000.0]);
        assert_eq!(stats.zscore(5000.0), 0.0);
    }

    #[test]
    fn test_identical_amounts_score_zero() {
        let stats = PartitionStats::from_amounts(&[250.0, 250.0, 250.0, 250.0]);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.zscore(250.0), 0.0);
    }

    #[test]
    fn test_empty_partition_scores_zero() {
        let stats = PartitionStats::from_amounts(&[]);
        assert_eq!(stats.zscore(123.0), 0.0);
    }

    #[test]
    fn test_partitions_are_scored_independently() {
        // Outgoing has a wild outlier; the incoming records must not see it.
        let records = vec![
            record(100, TransactionType::Incoming),
            record(110, TransactionType::Incoming),
            record(90, TransactionType::Incoming),
            record(100, TransactionType::Outgoing),
            record(100, TransactionType::Outgoing),
            record(1_000_000, TransactionType::Outgoing),
        ];

        let scores = zscores(&records);
        assert_eq!(scores.len(), 6);

        // Incoming scores come from the {100, 110, 90} population only
        let incoming = PartitionStats::from_amounts(&[100.0, 110.0, 90.0]);
        assert!((scores[0] - incoming.zscore(100.0)).abs() < 1e-12);
        assert!((scores[1] - incoming.zscore(110.0)).abs() < 1e-12);
        // The outgoing outlier scores high against its own partition
        assert!(scores[5] > 1.0);
        // ...and the small outgoing amounts sit below their mean
        assert!(scores[3] < 0.0);
    }

    #[test]
    fn test_scores_align_with_input_order() {
        let records = vec![
            record(1_000, TransactionType::Outgoing),
            record(10, TransactionType::Incoming),
            record(20, TransactionType::Incoming),
            record(2_000, TransactionType::Outgoing),
        ];
        let scores = zscores(&records);
        // Outgoing records (indices 0 and 3) are symmetric around their mean
        assert!((scores[0] + scores[3]).abs() < 1e-12);
        assert!((scores[1] + scores[2]).abs() < 1e-12);
    }
}
