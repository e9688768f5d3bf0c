//! Sample data - fabricated transaction batches with injected anomalies
//!
//! Produces CSV files in the standard ingestion schema so generated data can
//! be fed straight back into the analyzer. A fixed seed reproduces the same
//! batch.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use crate::domain::result::Result;
use crate::domain::RawRecord;

const DATE_START: (i32, u32, u32) = (2021, 1, 1);
const DATE_END: (i32, u32, u32) = (2025, 12, 31);

/// Knobs for sample generation
#[derive(Debug, Clone, Copy)]
pub struct SampleConfig {
    pub rows: usize,
    /// Share of rows that get an anomalous amount
    pub anomaly_ratio: f64,
    /// Share of anomalies placed on the Incoming side
    pub incoming_anomaly_ratio: f64,
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            rows: 500,
            anomaly_ratio: 0.08,
            incoming_anomaly_ratio: 0.60,
            seed: 42,
        }
    }
}

/// A generated batch plus how many anomalies were injected per direction
#[derive(Debug)]
pub struct SampleBatch {
    pub records: Vec<RawRecord>,
    pub incoming_anomalies: usize,
    pub outgoing_anomalies: usize,
}

/// Generate a batch of raw records with anomalies at random positions.
///
/// Normal amounts: incoming 100-6000, outgoing 100-8000. Anomalous amounts:
/// incoming 25000-90000, outgoing 20000-70000. Dates are spread uniformly
/// over 2021-01-01..=2025-12-31 and ids run TXN00001 upward.
pub fn generate_records(config: &SampleConfig) -> SampleBatch {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let start = NaiveDate::from_ymd_opt(DATE_START.0, DATE_START.1, DATE_START.2).unwrap();
    let end = NaiveDate::from_ymd_opt(DATE_END.0, DATE_END.1, DATE_END.2).unwrap();
    let range_days = (end - start).num_days();

    let num_anomalies = ((config.rows as f64 * config.anomaly_ratio) as usize).min(config.rows);
    let num_incoming = ((num_anomalies as f64 * config.incoming_anomaly_ratio) as usize)
        .min(num_anomalies);

    let positions = sample(&mut rng, config.rows, num_anomalies).into_vec();
    let incoming_positions: HashSet<usize> = positions[..num_incoming].iter().copied().collect();
    let outgoing_positions: HashSet<usize> = positions[num_incoming..].iter().copied().collect();

    let mut records = Vec::with_capacity(config.rows);
    for i in 0..config.rows {
        let date = start + Duration::days(rng.gen_range(0..=range_days));

        let (transaction_type, amount) = if incoming_positions.contains(&i) {
            ("Incoming", rng.gen_range(25_000.0..90_000.0))
        } else if outgoing_positions.contains(&i) {
            ("Outgoing", rng.gen_range(20_000.0..70_000.0))
        } else if rng.gen_bool(0.5) {
            ("Incoming", rng.gen_range(100.0..6_000.0))
        } else {
            ("Outgoing", rng.gen_range(100.0..8_000.0))
        };

        let status = if rng.gen_bool(0.95) {
            "successful"
        } else {
            "unsuccessful"
        };

        records.push(RawRecord {
            transaction_id: format!("TXN{:05}", i + 1),
            date: date.format("%Y-%m-%d").to_string(),
            amount: format!("{:.2}", amount),
            transaction_type: transaction_type.to_string(),
            status: Some(status.to_string()),
        });
    }

    SampleBatch {
        records,
        incoming_anomalies: num_incoming,
        outgoing_anomalies: num_anomalies - num_incoming,
    }
}

/// Write records as CSV in the standard ingestion schema
pub fn write_csv<W: Write>(records: &[RawRecord], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["transaction_id", "date", "amount", "transaction_type", "status"])?;
    for record in records {
        writer.write_record([
            record.transaction_id.as_str(),
            record.date.as_str(),
            record.amount.as_str(),
            record.transaction_type.as_str(),
            record.status.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records as a CSV file on disk
pub fn write_csv_file(records: &[RawRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)
}
