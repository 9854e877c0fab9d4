// ABOUTME: ACL injury-prevention recommendation engine
// ABOUTME: Maps out-of-range measurements and elevated risk to prioritized, categorized actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Injury-prevention recommendation engine
//!
//! Rules are evaluated directly against the athlete's raw measurements, not
//! against the extracted risk factors, so the two passes stay independent even
//! where their triggers coincide. Each fired rule yields exactly one
//! recommendation; when none fires, a single maintenance recommendation is
//! returned.

use acl_risk_core::constants::{priority, risk_factors as names};
use acl_risk_core::models::{Athlete, Recommendation, RecommendationCategory, RiskCategory};
use tracing::debug;

use crate::config::scoring::RiskScoringConfig;

/// Fixed recommendation wording
pub mod messages {
    /// Prior ACL injury on either knee
    pub const PRIOR_INJURY: &str = "Consult with sports medicine physician and physical therapist for comprehensive ACL prevention program";
    /// Knee valgus above threshold
    pub const KNEE_VALGUS: &str =
        "Implement jump-landing training to reduce knee valgus during landing";
    /// Hip adduction above threshold
    pub const HIP_ADDUCTION: &str =
        "Strengthen hip abductors (glute medius) with side planks and lateral band walks";
    /// Knee flexion below threshold
    pub const KNEE_FLEXION: &str = "Practice soft landing techniques with increased knee bend";
    /// Hamstring:quadriceps ratio below threshold
    pub const HAMSTRING_QUAD_RATIO: &str =
        "Implement hamstring strengthening program (Nordic hamstring curls, deadlifts)";
    /// Landing asymmetry above threshold
    pub const LANDING_ASYMMETRY: &str =
        "Implement single-leg landing exercises with focus on symmetrical loading";
    /// Overall category High or Very High
    pub const OVERALL_HIGH_RISK: &str =
        "Complete neuromuscular training program designed specifically for ACL injury prevention";
    /// Nothing flagged
    pub const LOW_RISK_MAINTENANCE: &str =
        "Continue current training regimen with regular monitoring of biomechanical factors";
}

/// Trait for generating injury-prevention recommendations
pub trait RecommendationEngineTrait {
    /// Recommendations for an athlete whose overall score fell in `category`
    fn generate_recommendations(
        &self,
        athlete: &Athlete,
        category: RiskCategory,
    ) -> Vec<Recommendation>;
}

/// Rule-based recommendation engine reading thresholds from the scoring table
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'c> {
    config: &'c RiskScoringConfig,
}

impl<'c> RecommendationEngine<'c> {
    /// Create an engine over a scoring table
    #[must_use]
    pub const fn new(config: &'c RiskScoringConfig) -> Self {
        Self { config }
    }

    /// Fallback when no rule fires
    #[must_use]
    pub fn maintenance_recommendation() -> Recommendation {
        Recommendation::new(
            RecommendationCategory::General,
            priority::LOW,
            messages::LOW_RISK_MAINTENANCE,
            names::LOW_RISK_MAINTENANCE,
        )
    }
}

impl RecommendationEngineTrait for RecommendationEngine<'_> {
    fn generate_recommendations(
        &self,
        athlete: &Athlete,
        category: RiskCategory,
    ) -> Vec<Recommendation> {
        let rules = &self.config.biomechanical;
        let data = athlete.biomechanics();

        let candidates = [
            (
                athlete.history().has_prior_injury(),
                RecommendationCategory::Medical,
                priority::HIGH,
                messages::PRIOR_INJURY,
                names::PREVIOUS_ACL_INJURY,
            ),
            (
                rules.knee_valgus.triggers(data.knee_valgus_angle),
                RecommendationCategory::Biomechanical,
                priority::HIGH,
                messages::KNEE_VALGUS,
                names::EXCESSIVE_KNEE_VALGUS,
            ),
            (
                rules.hip_adduction.triggers(data.hip_adduction_angle),
                RecommendationCategory::Training,
                priority::MEDIUM,
                messages::HIP_ADDUCTION,
                names::EXCESSIVE_HIP_ADDUCTION,
            ),
            (
                rules.knee_flexion.triggers(data.knee_flexion_angle),
                RecommendationCategory::Biomechanical,
                priority::HIGH,
                messages::KNEE_FLEXION,
                names::INSUFFICIENT_KNEE_FLEXION,
            ),
            (
                rules
                    .hamstring_quad_ratio
                    .triggers(data.hamstring_quad_ratio),
                RecommendationCategory::Training,
                priority::HIGH,
                messages::HAMSTRING_QUAD_RATIO,
                names::HAMSTRING_QUADRICEPS_IMBALANCE,
            ),
            (
                rules.landing_asymmetry.triggers(data.landing_asymmetry),
                RecommendationCategory::Biomechanical,
                priority::MEDIUM,
                messages::LANDING_ASYMMETRY,
                names::LANDING_ASYMMETRY,
            ),
            (
                category.is_elevated(),
                RecommendationCategory::Educational,
                priority::HIGH,
                messages::OVERALL_HIGH_RISK,
                names::OVERALL_HIGH_RISK,
            ),
        ];

        let mut recommendations: Vec<Recommendation> = candidates
            .into_iter()
            .filter(|(fired, ..)| *fired)
            .map(|(_, kind, level, description, target)| {
                Recommendation::new(kind, level, description, target)
            })
            .collect();

        if recommendations.is_empty() {
            recommendations.push(Self::maintenance_recommendation());
        }

        debug!(
            athlete = athlete.name(),
            count = recommendations.len(),
            "generated recommendations"
        );
        recommendations
    }
}
