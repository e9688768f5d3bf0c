//! Output formatting utilities

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};

use txwatch_core::{AnalysisResult, Summary, Transaction};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render an analysis result: JSON when requested, otherwise summary table
/// plus transaction listing
pub fn render_result(result: &AnalysisResult, json: bool, flagged_only: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    print_summary(&result.summary);

    if result.skipped_rows > 0 {
        warning(&format!("Skipped {} invalid row(s)", result.skipped_rows));
        println!();
    }

    print_transactions(&result.transactions, flagged_only);
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!("{}", "Transaction Analysis".bold());
    println!();

    let flagged = format!(
        "{} ({:.1}%)",
        summary.flagged_count, summary.flagged_percentage
    );

    let mut table = create_table();
    table.add_row(vec![
        Cell::new("Transactions"),
        Cell::new(summary.total_transactions),
    ]);
    table.add_row(vec![
        Cell::new("Flagged"),
        if summary.flagged_count > 0 {
            Cell::new(flagged).fg(Color::Red)
        } else {
            Cell::new(flagged)
        },
    ]);
    table.add_row(vec![
        Cell::new("Incoming"),
        Cell::new(format!(
            "{} (avg {:.2})",
            summary.total_incoming, summary.avg_incoming_amount
        )),
    ]);
    table.add_row(vec![
        Cell::new("Outgoing"),
        Cell::new(format!(
            "{} (avg {:.2})",
            summary.total_outgoing, summary.avg_outgoing_amount
        )),
    ]);
    table.add_row(vec![
        Cell::new("Avg flagged amount"),
        Cell::new(format!("{:.2}", summary.avg_flagged_amount)),
    ]);
    table.add_row(vec![
        Cell::new("Avg normal amount"),
        Cell::new(format!("{:.2}", summary.avg_normal_amount)),
    ]);

    println!("{table}");
    println!();
}

fn print_transactions(transactions: &[Transaction], flagged_only: bool) {
    let shown: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| !flagged_only || t.is_flagged)
        .collect();

    if shown.is_empty() {
        println!("No transactions to display.");
        return;
    }

    let mut table = create_table();
    table.set_header(vec![
        "ID", "Date", "Type", "Amount", "Z-Score", "Status", "Reason",
    ]);

    for tx in shown {
        let status = tx
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let reason = if tx.is_flagged { tx.reason.as_str() } else { "-" };

        let row = vec![
            Cell::new(&tx.transaction_id),
            Cell::new(tx.date),
            Cell::new(tx.transaction_type),
            Cell::new(format!("{:.2}", tx.amount)),
            Cell::new(format!("{:+.2}", tx.zscore)),
            Cell::new(status),
            Cell::new(reason),
        ];

        if tx.is_flagged {
            table.add_row(row.into_iter().map(|c| c.fg(Color::Red)).collect::<Vec<_>>());
        } else {
            table.add_row(row);
        }
    }

    println!("{table}");
}
