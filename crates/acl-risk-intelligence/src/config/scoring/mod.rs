// ABOUTME: Risk scoring table configuration for the ACL risk analyzer
// ABOUTME: Single auditable table of weights, thresholds, and points with validation and env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Risk Scoring Configuration
//!
//! Every weight, threshold, point value, and the high-risk sport list live in
//! one [`RiskScoringConfig`] so they can be overridden or audited without
//! touching the scoring logic.
//!
//! # Module Structure
//!
//! - `rules` - Table sections (weights, demographic, biomechanical, medical, bands, severity)
//! - `error` - Validation and parsing errors
//!
//! # Environment Overrides
//!
//! | Variable | Field |
//! |---|---|
//! | `ACL_RISK_WEIGHT_DEMOGRAPHIC` | `weights.demographic` |
//! | `ACL_RISK_WEIGHT_BIOMECHANICAL` | `weights.biomechanical` |
//! | `ACL_RISK_WEIGHT_MEDICAL` | `weights.medical_history` |
//! | `ACL_RISK_HIGH_RISK_SPORTS` | `demographic.high_risk_sports` (comma separated) |

pub mod error;
pub mod rules;

pub use error::ConfigError;
pub use rules::{
    BiomechanicalRules, CategoryThresholds, DemographicRules, MedicalHistoryRules, RiskDirection,
    RiskWeights, SeverityRules, SeverityScale, TierRule, WEIGHT_SUM_TOLERANCE,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Environment variable overriding the demographic weight
pub const ENV_WEIGHT_DEMOGRAPHIC: &str = "ACL_RISK_WEIGHT_DEMOGRAPHIC";
/// Environment variable overriding the biomechanical weight
pub const ENV_WEIGHT_BIOMECHANICAL: &str = "ACL_RISK_WEIGHT_BIOMECHANICAL";
/// Environment variable overriding the medical history weight
pub const ENV_WEIGHT_MEDICAL: &str = "ACL_RISK_WEIGHT_MEDICAL";
/// Environment variable overriding the high-risk sport list
pub const ENV_HIGH_RISK_SPORTS: &str = "ACL_RISK_HIGH_RISK_SPORTS";

/// Complete scoring table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskScoringConfig {
    /// Component weights for the overall score
    pub weights: RiskWeights,
    /// Demographic points and the high-risk sport list
    pub demographic: DemographicRules,
    /// Two-tier rules for the six scored measurements
    pub biomechanical: BiomechanicalRules,
    /// Prior injury and family history points
    pub medical_history: MedicalHistoryRules,
    /// Overall score bands
    pub categories: CategoryThresholds,
    /// Named risk-factor severities
    pub severity: SeverityRules,
}

impl RiskScoringConfig {
    /// Load the default table with environment overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::load_unvalidated()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the default table with environment overrides applied, leaving
    /// validation to the caller
    ///
    /// Used when some of the table is about to be replaced, so overrides that
    /// will not survive cannot reject the final table.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if an override cannot be parsed
    pub fn load_unvalidated() -> Result<Self, ConfigError> {
        Self::default().apply_env_overrides()
    }

    /// Replace the component weights
    #[must_use]
    pub const fn with_weights(mut self, weights: RiskWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Check every invariant of the table
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeights` if a weight is negative or the sum is outside
    /// 1.0 ± 0.01, and `InvalidRange` for misordered bands, tiers, or ages.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = &self.weights;
        if [
            weights.demographic,
            weights.biomechanical,
            weights.medical_history,
        ]
        .iter()
        .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(ConfigError::InvalidWeights(
                "weights must be finite and non-negative".into(),
            ));
        }
        if !weights.is_normalized() {
            return Err(ConfigError::InvalidWeights(format!(
                "weights must sum to 1.0 (±{WEIGHT_SUM_TOLERANCE}), got {:.3}",
                weights.sum()
            )));
        }

        let bands = &self.categories;
        if !(bands.low < bands.moderate && bands.moderate < bands.high) {
            return Err(ConfigError::InvalidRange(
                "categories: low < moderate < high required",
            ));
        }

        if self.demographic.min_high_risk_age > self.demographic.max_high_risk_age {
            return Err(ConfigError::InvalidRange(
                "demographic: min_high_risk_age must be <= max_high_risk_age",
            ));
        }
        if self.demographic.underweight_bmi > self.demographic.obese_bmi {
            return Err(ConfigError::InvalidRange(
                "demographic: underweight_bmi must be <= obese_bmi",
            ));
        }

        if let Some((name, _)) = self
            .biomechanical
            .labelled()
            .into_iter()
            .find(|(_, rule)| !rule.is_consistent())
        {
            warn!(rule = name, "inconsistent biomechanical tier rule");
            return Err(ConfigError::InvalidRange(
                "biomechanical: tiers must be ordered by direction with a positive severity scale",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_WEIGHT_DEMOGRAPHIC, &mut self.weights.demographic)?;
        Self::apply_env_var(ENV_WEIGHT_BIOMECHANICAL, &mut self.weights.biomechanical)?;
        Self::apply_env_var(ENV_WEIGHT_MEDICAL, &mut self.weights.medical_history)?;

        if let Ok(sports) = env::var(ENV_HIGH_RISK_SPORTS) {
            let sports: Vec<String> = sports
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if sports.is_empty() {
                return Err(ConfigError::Parse(format!(
                    "{ENV_HIGH_RISK_SPORTS} must list at least one sport"
                )));
            }
            self.demographic.high_risk_sports = sports;
        }

        Ok(self)
    }
}
