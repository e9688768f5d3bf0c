//! Txwatch CLI - transaction anomaly detection in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, analyze, generate};

/// txwatch - flag anomalous transactions with Z-score analysis
#[derive(Parser)]
#[command(name = "txw", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a CSV file of transactions
    Analyze {
        /// Path to CSV file
        file: PathBuf,
        /// Z-score magnitude above which a transaction is flagged
        #[arg(long, default_value_t = 3.0)]
        threshold: f64,
        /// Skip invalid rows instead of rejecting the whole file
        #[arg(long)]
        skip_invalid: bool,
        /// Only list flagged transactions
        #[arg(long)]
        flagged_only: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Enter transactions interactively and analyze them
    Add {
        /// Z-score magnitude above which a transaction is flagged
        #[arg(long, default_value_t = 3.0)]
        threshold: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a sample transactions CSV with injected anomalies
    Generate {
        /// Output path
        output: PathBuf,
        /// Number of rows to generate
        #[arg(long, default_value_t = 500)]
        rows: usize,
        /// Share of rows that get an anomalous amount
        #[arg(long, default_value_t = 0.08)]
        anomaly_ratio: f64,
        /// RNG seed, for reproducible files
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> ExitCode {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            file,
            threshold,
            skip_invalid,
            flagged_only,
            json,
        } => analyze::run(file, threshold, skip_invalid, flagged_only, json),
        Commands::Add { threshold, json } => add::run(threshold, json),
        Commands::Generate {
            output,
            rows,
            anomaly_ratio,
            seed,
        } => generate::run(output, rows, anomaly_ratio, seed),
    }
}
