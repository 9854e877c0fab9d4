// ABOUTME: acl-risk command-line tool for screening athlete profiles
// ABOUTME: Analyzes JSON/YAML profiles and prints text or JSON risk reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze one profile and print a text report
//! acl-risk analyze athletes/athl1.yaml
//!
//! # Analyze several profiles as JSON with custom weights
//! acl-risk analyze a.json b.yaml --format json --weights 0.3,0.4,0.3
//!
//! # Show the effective scoring table
//! acl-risk thresholds
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use acl_risk::formatters::{render_report, ReportFormat};
use acl_risk::logging::LoggingConfig;
use acl_risk::profile::load_athlete;
use acl_risk::{RiskAnalyzer, RiskScoringConfig, RiskWeights};
use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "acl-risk",
    about = "ACL injury-risk screening",
    long_about = "Scores athletes for ACL injury risk from demographic data, landing biomechanics, and injury history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze one or more athlete profiles
    Analyze {
        /// Profile files (.json, .yaml, .yml)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,

        /// Component weights as DEMOGRAPHIC,BIOMECHANICAL,MEDICAL (must sum to 1.0)
        #[arg(long, value_delimiter = ',', num_args = 3)]
        weights: Option<Vec<f64>>,
    },

    /// Print the effective scoring table as JSON
    Thresholds,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

fn build_analyzer(weights: Option<&[f64]>) -> Result<RiskAnalyzer> {
    let analyzer = match weights {
        None => RiskAnalyzer::from_env()?,
        Some(&[demographic, biomechanical, medical_history]) => {
            RiskAnalyzer::from_env_with_weights(RiskWeights {
                demographic,
                biomechanical,
                medical_history,
            })?
        }
        Some(other) => bail!("--weights expects 3 values, got {}", other.len()),
    };
    Ok(analyzer)
}

fn analyze(files: &[PathBuf], format: ReportFormat, weights: Option<&[f64]>) -> Result<()> {
    let analyzer = build_analyzer(weights)?;

    let athletes = files
        .iter()
        .map(|path| load_athlete(path).map_err(|e| anyhow!("{}: {e}", path.display())))
        .collect::<Result<Vec<_>>>()?;
    info!(count = athletes.len(), "analyzing athlete profiles");

    let assessments = analyzer.analyze_batch(&athletes);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, assessment) in assessments.iter().enumerate() {
        if index > 0 && format == ReportFormat::Text {
            writeln!(out)?;
        }
        writeln!(out, "{}", render_report(assessment, format)?)?;
    }
    Ok(())
}

fn thresholds() -> Result<()> {
    let config = RiskScoringConfig::load()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match cli.command {
        Command::Analyze {
            files,
            format,
            weights,
        } => analyze(&files, format.into(), weights.as_deref()),
        Command::Thresholds => thresholds(),
    }
}
