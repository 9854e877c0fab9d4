// ABOUTME: Report rendering for ACL risk assessments
// ABOUTME: Supports a human-readable text report and a timestamped JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report Format Layer
//!
//! ## Supported Formats
//!
//! - **Text**: The clinician-facing summary (default)
//! - **JSON**: The full assessment plus a `generated_at` timestamp
//!
//! Key risk factors are listed by severity (highest first, ties by name) in
//! both formats so repeated runs produce identical reports.

use acl_risk_core::models::{Recommendation, RiskAssessment, RiskCategory};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Write as _};

/// Report format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain-text summary (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl ReportFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: ReportFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// One named factor in a JSON report
#[derive(Debug, Serialize)]
struct FactorEntry<'r> {
    name: &'r str,
    severity: f64,
}

/// JSON document shape
#[derive(Debug, Serialize)]
struct JsonReport<'r> {
    athlete_name: &'r str,
    overall_risk_score: f64,
    risk_category: RiskCategory,
    demographic_risk_score: f64,
    biomechanical_risk_score: f64,
    medical_history_risk_score: f64,
    key_risk_factors: Vec<FactorEntry<'r>>,
    recommendations: &'r [Recommendation],
    generated_at: DateTime<Utc>,
}

/// Render an assessment in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn render_report(
    assessment: &RiskAssessment<'_>,
    format: ReportFormat,
) -> Result<String, FormatError> {
    match format {
        ReportFormat::Text => Ok(render_text_report(assessment)),
        ReportFormat::Json => render_json_report(assessment, Utc::now()),
    }
}

/// Human-readable summary of an assessment
///
/// ```text
/// ACL Risk Assessment for <name>
///
/// Overall Risk: <Category> (<score>/10)
///
/// Risk Component Scores:
/// - Demographic: <d>/10
/// ...
/// ```
#[must_use]
pub fn render_text_report(assessment: &RiskAssessment<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_text_report(&mut out, assessment);
    out
}

fn write_text_report(out: &mut String, assessment: &RiskAssessment<'_>) -> fmt::Result {
    writeln!(out, "ACL Risk Assessment for {}", assessment.athlete_name())?;
    writeln!(out)?;
    writeln!(
        out,
        "Overall Risk: {} ({:.1}/10)",
        assessment.risk_category(),
        assessment.overall_risk_score()
    )?;
    writeln!(out)?;

    writeln!(out, "Risk Component Scores:")?;
    writeln!(
        out,
        "- Demographic: {:.1}/10",
        assessment.demographic_risk_score()
    )?;
    writeln!(
        out,
        "- Biomechanical: {:.1}/10",
        assessment.biomechanical_risk_score()
    )?;
    writeln!(
        out,
        "- Medical History: {:.1}/10",
        assessment.medical_history_risk_score()
    )?;
    writeln!(out)?;

    writeln!(out, "Key Risk Factors:")?;
    for (name, severity) in assessment.ranked_risk_factors() {
        writeln!(out, "- {name}: {severity:.1}/10")?;
    }

    writeln!(out)?;
    writeln!(out, "Recommendations:")?;
    for recommendation in assessment.recommendations() {
        writeln!(out, "- {recommendation}")?;
    }
    Ok(())
}

/// Pretty JSON document of an assessment stamped with `generated_at`
///
/// # Errors
///
/// Returns `FormatError` if serialization fails
pub fn render_json_report(
    assessment: &RiskAssessment<'_>,
    generated_at: DateTime<Utc>,
) -> Result<String, FormatError> {
    let report = JsonReport {
        athlete_name: assessment.athlete_name(),
        overall_risk_score: assessment.overall_risk_score(),
        risk_category: assessment.risk_category(),
        demographic_risk_score: assessment.demographic_risk_score(),
        biomechanical_risk_score: assessment.biomechanical_risk_score(),
        medical_history_risk_score: assessment.medical_history_risk_score(),
        key_risk_factors: assessment
            .ranked_risk_factors()
            .into_iter()
            .map(|(name, severity)| FactorEntry { name, severity })
            .collect(),
        recommendations: assessment.recommendations(),
        generated_at,
    };

    serde_json::to_string_pretty(&report).map_err(|e| FormatError {
        message: e.to_string(),
        format: ReportFormat::Json,
    })
}
