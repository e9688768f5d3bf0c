//! Generate command - write a sample transactions CSV

use std::path::PathBuf;

use anyhow::{Context, Result};

use txwatch_core::services::sample::{self, SampleConfig};

use crate::output;

pub fn run(output_path: PathBuf, rows: usize, anomaly_ratio: f64, seed: u64) -> Result<()> {
    let config = SampleConfig {
        rows,
        anomaly_ratio,
        seed,
        ..SampleConfig::default()
    };

    let batch = sample::generate_records(&config);
    sample::write_csv_file(&batch.records, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    output::success(&format!(
        "Wrote {} transactions to {}",
        batch.records.len(),
        output_path.display()
    ));
    println!("  Incoming anomalies: {}", batch.incoming_anomalies);
    println!("  Outgoing anomalies: {}", batch.outgoing_anomalies);

    Ok(())
}
