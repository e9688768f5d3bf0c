//! Add command - interactive manual entry and analysis

use anyhow::Result;
use chrono::Utc;
use dialoguer::{Confirm, Input, Select};

use txwatch_core::{AnalysisService, AnalyzeOptions, RawRecord};

use crate::output;

const TYPES: [&str; 2] = ["Incoming", "Outgoing"];
const STATUSES: [&str; 3] = ["successful", "unsuccessful", "(none)"];

pub fn run(threshold: f64, json: bool) -> Result<()> {
    let today = Utc::now().date_naive().to_string();
    let mut records = Vec::new();

    loop {
        let transaction_id: String = Input::new()
            .with_prompt("Transaction ID")
            .interact_text()?;

        let date: String = Input::new()
            .with_prompt("Date (YYYY-MM-DD)")
            .default(today.clone())
            .interact_text()?;

        let amount: String = Input::new().with_prompt("Amount").interact_text()?;

        let type_idx = Select::new()
            .with_prompt("Transaction type")
            .items(&TYPES)
            .default(0)
            .interact()?;

        let status_idx = Select::new()
            .with_prompt("Status")
            .items(&STATUSES)
            .default(0)
            .interact()?;
        let status = (status_idx < 2).then(|| STATUSES[status_idx].to_string());

        records.push(RawRecord {
            transaction_id,
            date,
            amount,
            transaction_type: TYPES[type_idx].to_string(),
            status,
        });

        let more = Confirm::new()
            .with_prompt("Add another transaction?")
            .default(false)
            .interact()?;
        if !more {
            break;
        }
    }

    if !json {
        println!();
        output::info(&format!(
            "Analyzing {} transaction(s) at threshold {:.1}",
            records.len(),
            threshold
        ));
        println!();
    }

    let result = AnalysisService::new().analyze(&records, threshold, &AnalyzeOptions::default())?;

    output::render_result(&result, json, false)
}
