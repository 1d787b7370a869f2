// ABOUTME: CLI driver that renders workout summary reports from sensor readings
// ABOUTME: Runs built-in sample readings and user-supplied CODE:n,n,... inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Summary contributors

//! Workout report driver.
//!
//! Usage:
//! ```bash
//! # Render the built-in sample readings
//! cargo run --bin workout-report
//!
//! # Render specific readings
//! cargo run --bin workout-report -- --reading RUN:15000,1,75 --reading SWM:720,1,80,25,40
//!
//! # Emit summaries as JSON lines
//! cargo run --bin workout-report -- --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use workout_summary::{WorkoutCompute, WorkoutRecord};

/// Built-in sample readings, mirroring a short stretch of sensor output
const SAMPLE_READINGS: [(&str, &[f64]); 4] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ("RUN", &[4200.0, 0.5, 70.0]),
];

#[derive(Parser)]
#[command(
    name = "workout-report",
    about = "Workout summary report renderer",
    long_about = "Compute distance, mean speed, and calories for sensor readings and render the summary report"
)]
struct ReportArgs {
    /// Reading to render, formatted as CODE:n,n,... (repeatable; replaces the samples)
    #[arg(long = "reading", value_name = "CODE:N,N,...")]
    readings: Vec<String>,

    /// Emit summaries as JSON lines instead of the text template
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = ReportArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let readings = if args.readings.is_empty() {
        SAMPLE_READINGS
            .iter()
            .map(|(code, payload)| ((*code).to_owned(), payload.to_vec()))
            .collect()
    } else {
        args.readings
            .iter()
            .map(|raw| parse_reading(raw))
            .collect::<Result<Vec<_>>>()?
    };

    // One bad reading must not take down the rest of the batch.
    for (code, payload) in readings {
        match WorkoutRecord::from_reading(&code, &payload).and_then(|r| r.summarize()) {
            Ok(summary) => {
                if args.json {
                    println!("{}", serde_json::to_string(&summary)?);
                } else {
                    println!("{summary}");
                }
            }
            Err(err) => warn!("skipping {code} reading: {err}"),
        }
    }

    Ok(())
}

/// Split a `CODE:n,n,...` argument into its code and payload parts
fn parse_reading(raw: &str) -> Result<(String, Vec<f64>)> {
    let (code, values) = raw
        .split_once(':')
        .with_context(|| format!("reading '{raw}' is missing the CODE: prefix"))?;
    let payload = values
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .with_context(|| format!("reading '{raw}' has a non-numeric value '{v}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((code.to_owned(), payload))
}
