// ABOUTME: Risk assessment result with component scores, key risk factors, and recommendations
// ABOUTME: RiskAssessment and RiskCategory definitions produced by the risk analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use super::Recommendation;

/// Overall risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Overall score at or below the low threshold
    Low,
    /// Overall score at or below the moderate threshold
    Moderate,
    /// Overall score at or below the high threshold
    High,
    /// Overall score above the high threshold
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskCategory {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// High or Very High
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::High | Self::VeryHigh)
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ACL injury-risk assessment for one athlete
///
/// Borrows the athlete's name rather than copying it, so an assessment
/// cannot outlive the athlete it describes.
///
/// # Examples
///
/// ```rust
/// use acl_risk_core::models::{RiskAssessment, RiskCategory};
///
/// let mut assessment = RiskAssessment::new("Test Athlete", 7.5, RiskCategory::High, 6.0, 8.0, 7.0);
/// assessment.add_key_risk_factor("Knee Valgus", 8.5);
/// assessment.add_key_risk_factor("Knee Valgus", 9.0);
/// assert_eq!(assessment.key_risk_factors().len(), 1);
/// assert_eq!(assessment.key_risk_factors()["Knee Valgus"], 9.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment<'a> {
    athlete_name: &'a str,
    overall_risk_score: f64,
    risk_category: RiskCategory,
    demographic_risk_score: f64,
    biomechanical_risk_score: f64,
    medical_history_risk_score: f64,
    key_risk_factors: HashMap<String, f64>,
    recommendations: Vec<Recommendation>,
}

impl<'a> RiskAssessment<'a> {
    /// Create an assessment with no factors or recommendations yet
    #[must_use]
    pub fn new(
        athlete_name: &'a str,
        overall_risk_score: f64,
        risk_category: RiskCategory,
        demographic_risk_score: f64,
        biomechanical_risk_score: f64,
        medical_history_risk_score: f64,
    ) -> Self {
        Self {
            athlete_name,
            overall_risk_score,
            risk_category,
            demographic_risk_score,
            biomechanical_risk_score,
            medical_history_risk_score,
            key_risk_factors: HashMap::new(),
            recommendations: Vec::new(),
        }
    }

    /// Record a risk factor; a name already present is overwritten
    pub fn add_key_risk_factor(&mut self, factor_name: impl Into<String>, severity: f64) {
        self.key_risk_factors.insert(factor_name.into(), severity);
    }

    /// Append a single recommendation
    pub fn add_recommendation(&mut self, recommendation: Recommendation) {
        self.recommendations.push(recommendation);
    }

    /// Replace the recommendation list
    pub fn set_recommendations(&mut self, recommendations: Vec<Recommendation>) {
        self.recommendations = recommendations;
    }

    /// Name of the assessed athlete
    #[must_use]
    pub const fn athlete_name(&self) -> &'a str {
        self.athlete_name
    }

    /// Weighted overall score
    #[must_use]
    pub const fn overall_risk_score(&self) -> f64 {
        self.overall_risk_score
    }

    /// Risk band of the overall score
    #[must_use]
    pub const fn risk_category(&self) -> RiskCategory {
        self.risk_category
    }

    /// Demographic component score (0-10)
    #[must_use]
    pub const fn demographic_risk_score(&self) -> f64 {
        self.demographic_risk_score
    }

    /// Biomechanical component score (0-10)
    #[must_use]
    pub const fn biomechanical_risk_score(&self) -> f64 {
        self.biomechanical_risk_score
    }

    /// Medical history component score (0-10)
    #[must_use]
    pub const fn medical_history_risk_score(&self) -> f64 {
        self.medical_history_risk_score
    }

    /// Risk factor name to severity (0-10)
    #[must_use]
    pub const fn key_risk_factors(&self) -> &HashMap<String, f64> {
        &self.key_risk_factors
    }

    /// Recommendations in generation order
    #[must_use]
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Risk factors ordered by severity (highest first), ties by name
    #[must_use]
    pub fn ranked_risk_factors(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .key_risk_factors
            .iter()
            .map(|(name, severity)| (name.as_str(), *severity))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        ranked
    }
}
