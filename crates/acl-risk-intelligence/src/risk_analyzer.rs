// ABOUTME: Stateless ACL injury-risk analyzer combining demographic, biomechanical, and medical scores
// ABOUTME: Weighted overall score, risk banding, factor extraction, and recommendation generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! ACL injury-risk analyzer
//!
//! Analysis is a linear pipeline over immutable inputs: three independent
//! component scores, a weighted overall score, a risk band, named risk
//! factors, and recommendations. The analyzer holds nothing but its scoring
//! table, so one instance can serve any number of threads.

use acl_risk_core::constants::scores::{MAX_SCORE, MIN_SCORE};
use acl_risk_core::errors::{AppError, AppResult};
use acl_risk_core::models::{Athlete, BiomechanicalData, RiskAssessment, RiskCategory};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::scoring::{RiskScoringConfig, RiskWeights};
use crate::recommendation_engine::{RecommendationEngine, RecommendationEngineTrait};
use crate::risk_factors::extract_key_risk_factors;

fn clamp_score(score: f64) -> f64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// ACL injury-risk analyzer
///
/// # Examples
///
/// ```rust
/// use acl_risk_core::models::{Athlete, Gender, RiskCategory};
/// use acl_risk_intelligence::RiskAnalyzer;
///
/// let athlete = Athlete::new("Swimmer", 30, Gender::Male, "Swimming", 180.0, 75.0, &[false, false, false])
///     .expect("valid athlete");
/// let assessment = RiskAnalyzer::new().analyze_risk(&athlete);
/// assert_eq!(assessment.risk_category(), RiskCategory::Low);
/// assert_eq!(assessment.recommendations().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAnalyzer {
    config: RiskScoringConfig,
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskAnalyzer {
    /// Analyzer with the default scoring table (weights 0.25 / 0.50 / 0.25)
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RiskScoringConfig::default(),
        }
    }

    /// Analyzer with custom component weights and default thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` unless the weights sum to 1.0 ± 0.01
    pub fn with_weights(
        demographic: f64,
        biomechanical: f64,
        medical_history: f64,
    ) -> AppResult<Self> {
        Self::with_config(RiskScoringConfig::default().with_weights(RiskWeights {
            demographic,
            biomechanical,
            medical_history,
        }))
    }

    /// Analyzer with a complete custom scoring table
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the table fails validation
    pub fn with_config(config: RiskScoringConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::from)?;
        Ok(Self { config })
    }

    /// Analyzer with the default table plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unparsable overrides and `ConfigInvalid` if
    /// the overridden table fails validation
    pub fn from_env() -> AppResult<Self> {
        let config = RiskScoringConfig::load()?;
        Ok(Self { config })
    }

    /// Analyzer with environment overrides and explicit component weights
    ///
    /// The explicit weights replace any weight overrides before the table is
    /// validated, so only the weights actually used are checked.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unparsable overrides and `ConfigInvalid` if
    /// the final table fails validation
    pub fn from_env_with_weights(weights: RiskWeights) -> AppResult<Self> {
        Self::with_config(RiskScoringConfig::load_unvalidated()?.with_weights(weights))
    }

    /// Scoring table in use
    #[must_use]
    pub const fn config(&self) -> &RiskScoringConfig {
        &self.config
    }

    /// Component weights in use
    #[must_use]
    pub const fn weights(&self) -> &RiskWeights {
        &self.config.weights
    }

    /// Evaluate ACL injury risk for one athlete
    ///
    /// Never mutates the athlete or its measurements.
    #[must_use]
    pub fn analyze_risk<'a>(&self, athlete: &'a Athlete) -> RiskAssessment<'a> {
        let demographic = self.demographic_risk(athlete);
        let biomechanical = self.biomechanical_risk(athlete.biomechanics());
        let medical = self.medical_history_risk(athlete);
        debug!(
            athlete = athlete.name(),
            demographic, biomechanical, medical, "component risk scores"
        );

        let overall = self.overall_risk(demographic, biomechanical, medical);
        let category = self.categorize(overall);

        let mut assessment = RiskAssessment::new(
            athlete.name(),
            overall,
            category,
            demographic,
            biomechanical,
            medical,
        );

        for (name, severity) in extract_key_risk_factors(&self.config, athlete) {
            assessment.add_key_risk_factor(name, severity);
        }

        let recommendations =
            RecommendationEngine::new(&self.config).generate_recommendations(athlete, category);
        assessment.set_recommendations(recommendations);

        info!(
            athlete = athlete.name(),
            overall_risk = overall,
            category = %category,
            factors = assessment.key_risk_factors().len(),
            "ACL risk assessment completed"
        );
        assessment
    }

    /// Evaluate many athletes in parallel, preserving input order
    #[must_use]
    pub fn analyze_batch<'a>(&self, athletes: &'a [Athlete]) -> Vec<RiskAssessment<'a>> {
        athletes
            .par_iter()
            .map(|athlete| self.analyze_risk(athlete))
            .collect()
    }

    /// Demographic component (0-10): gender, age band, sport, BMI
    #[must_use]
    pub fn demographic_risk(&self, athlete: &Athlete) -> f64 {
        let rules = &self.config.demographic;
        let mut score = 0.0;

        if athlete.gender().is_higher_risk() {
            score += rules.higher_risk_gender_points;
        }
        if rules.is_high_risk_age(athlete.age()) {
            score += rules.age_points;
        }
        if rules.is_high_risk_sport(athlete.sport()) {
            score += rules.sport_points;
        }
        if rules.is_bmi_outlier(athlete.bmi()) {
            score += rules.bmi_points;
        }

        clamp_score(score)
    }

    /// Biomechanical component (0-10): sum of the six two-tier rules
    #[must_use]
    pub fn biomechanical_risk(&self, data: &BiomechanicalData) -> f64 {
        let rules = &self.config.biomechanical;
        let score = rules.knee_valgus.points_for(data.knee_valgus_angle)
            + rules.hip_adduction.points_for(data.hip_adduction_angle)
            + rules.knee_flexion.points_for(data.knee_flexion_angle)
            + rules
                .hamstring_quad_ratio
                .points_for(data.hamstring_quad_ratio)
            + rules.landing_asymmetry.points_for(data.landing_asymmetry)
            + rules.q_angle.points_for(data.q_angle);

        clamp_score(score)
    }

    /// Medical history component (0-10): one prior-injury penalty plus family history
    #[must_use]
    pub fn medical_history_risk(&self, athlete: &Athlete) -> f64 {
        let rules = &self.config.medical_history;
        let history = athlete.history();
        let mut score = 0.0;

        if history.has_prior_injury() {
            score += rules.prior_injury_points;
        }
        if history.family_history {
            score += rules.family_history_points;
        }

        clamp_score(score)
    }

    /// Weighted sum of the component scores, not re-clamped
    #[must_use]
    pub fn overall_risk(&self, demographic: f64, biomechanical: f64, medical: f64) -> f64 {
        let weights = &self.config.weights;
        demographic * weights.demographic
            + biomechanical * weights.biomechanical
            + medical * weights.medical_history
    }

    /// Risk band of an overall score
    #[must_use]
    pub fn categorize(&self, overall: f64) -> RiskCategory {
        self.config.categories.categorize(overall)
    }
}
