// ABOUTME: Named risk-factor extraction for ACL risk assessments
// ABOUTME: Diagnostic severities per out-of-range measurement, independent of the score clamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Key risk-factor extraction
//!
//! These severities are diagnostic, not scoring contributions: they are
//! computed from the raw measurements and never feed the component scores.

use acl_risk_core::constants::{risk_factors as names, scores::MAX_SCORE};
use acl_risk_core::models::Athlete;

use crate::config::scoring::{RiskScoringConfig, TierRule};

/// Severity of a measurement past its rule threshold, capped at 10
fn graded_severity(base: f64, rule: &TierRule, value: f64) -> f64 {
    (base + rule.severity_scale.points(rule.excess(value))).min(MAX_SCORE)
}

/// Named risk factors present for an athlete, with severities (0-10)
///
/// Order follows the clinical priority used in reports: prior injury first,
/// then landing mechanics, then demographic factors.
#[must_use]
pub fn extract_key_risk_factors(
    config: &RiskScoringConfig,
    athlete: &Athlete,
) -> Vec<(&'static str, f64)> {
    let mut factors = Vec::new();
    let severity = &config.severity;
    let rules = &config.biomechanical;
    let data = athlete.biomechanics();

    if athlete.history().has_prior_injury() {
        factors.push((names::PREVIOUS_ACL_INJURY, severity.prior_injury));
    }

    let graded = [
        (
            names::EXCESSIVE_KNEE_VALGUS,
            &rules.knee_valgus,
            data.knee_valgus_angle,
        ),
        (
            names::EXCESSIVE_HIP_ADDUCTION,
            &rules.hip_adduction,
            data.hip_adduction_angle,
        ),
        (
            names::INSUFFICIENT_KNEE_FLEXION,
            &rules.knee_flexion,
            data.knee_flexion_angle,
        ),
        (
            names::HAMSTRING_QUADRICEPS_IMBALANCE,
            &rules.hamstring_quad_ratio,
            data.hamstring_quad_ratio,
        ),
        (
            names::LANDING_ASYMMETRY,
            &rules.landing_asymmetry,
            data.landing_asymmetry,
        ),
        (names::ELEVATED_Q_ANGLE, &rules.q_angle, data.q_angle),
    ];
    factors.extend(
        graded
            .into_iter()
            .filter(|(_, rule, value)| rule.triggers(*value))
            .map(|(name, rule, value)| (name, graded_severity(severity.base, rule, value))),
    );

    if athlete.gender().is_higher_risk() {
        factors.push((names::FEMALE_GENDER, severity.higher_risk_gender));
    }

    if config.demographic.is_high_risk_sport(athlete.sport()) {
        factors.push((names::HIGH_RISK_SPORT, severity.high_risk_sport));
    }

    factors
}
