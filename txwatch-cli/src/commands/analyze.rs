//! Analyze command - run anomaly detection over a CSV file

use std::path::PathBuf;

use anyhow::{Context, Result};

use txwatch_core::services::ingest;
use txwatch_core::{AnalysisService, AnalyzeOptions, ValidationMode};

use crate::output;

pub fn run(
    file: PathBuf,
    threshold: f64,
    skip_invalid: bool,
    flagged_only: bool,
    json: bool,
) -> Result<()> {
    let records = ingest::read_csv_file(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let options = AnalyzeOptions {
        mode: if skip_invalid {
            ValidationMode::Lenient
        } else {
            ValidationMode::Strict
        },
    };

    let result = AnalysisService::new().analyze(&records, threshold, &options)?;

    output::render_result(&result, json, flagged_only)
}
