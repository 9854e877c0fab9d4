// ABOUTME: Tests for injury-prevention recommendation rules
// ABOUTME: Verifies one recommendation per fired rule, ordering, priorities, and the fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use acl_risk_core::constants::risk_factors as names;
use acl_risk_core::models::{
    Athlete, BiomechanicalData, Gender, Recommendation, RecommendationCategory, RiskCategory,
};
use acl_risk_intelligence::recommendation_engine::messages;
use acl_risk_intelligence::{RecommendationEngine, RecommendationEngineTrait, RiskScoringConfig};

fn athlete(history: [bool; 3], data: BiomechanicalData) -> Athlete {
    Athlete::new("Rec", 30, Gender::Male, "Running", 180.0, 75.0, &history)
        .unwrap()
        .with_biomechanics(data)
}

fn generate(athlete: &Athlete, category: RiskCategory) -> Vec<Recommendation> {
    let config = RiskScoringConfig::default();
    RecommendationEngine::new(&config).generate_recommendations(athlete, category)
}

fn summary(recs: &[Recommendation]) -> Vec<(RecommendationCategory, u8, &str)> {
    recs.iter()
        .map(|r| (r.category(), r.priority(), r.target_risk_factor()))
        .collect()
}

#[test]
fn test_fallback_when_nothing_fires() {
    let recs = generate(&athlete([true, false, false], BiomechanicalData::default()), RiskCategory::Moderate);

    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0], RecommendationEngine::maintenance_recommendation());
    assert_eq!(recs[0].description(), messages::LOW_RISK_MAINTENANCE);
    assert_eq!(recs[0].priority_label(), "Low");
}

#[test]
fn test_each_measurement_rule() {
    let cases = [
        (
            BiomechanicalData {
                knee_valgus_angle: 11.0,
                ..BiomechanicalData::default()
            },
            (RecommendationCategory::Biomechanical, 1, names::EXCESSIVE_KNEE_VALGUS),
        ),
        (
            BiomechanicalData {
                hip_adduction_angle: 16.0,
                ..BiomechanicalData::default()
            },
            (RecommendationCategory::Training, 2, names::EXCESSIVE_HIP_ADDUCTION),
        ),
        (
            BiomechanicalData {
                knee_flexion_angle: 59.0,
                ..BiomechanicalData::default()
            },
            (RecommendationCategory::Biomechanical, 1, names::INSUFFICIENT_KNEE_FLEXION),
        ),
        (
            BiomechanicalData {
                hamstring_quad_ratio: 0.59,
                ..BiomechanicalData::default()
            },
            (RecommendationCategory::Training, 1, names::HAMSTRING_QUADRICEPS_IMBALANCE),
        ),
        (
            BiomechanicalData {
                landing_asymmetry: 10.5,
                ..BiomechanicalData::default()
            },
            (RecommendationCategory::Biomechanical, 2, names::LANDING_ASYMMETRY),
        ),
    ];

    for (data, expected) in cases {
        let recs = generate(&athlete([false; 3], data), RiskCategory::Low);
        assert_eq!(summary(&recs), vec![expected]);
    }
}

#[test]
fn test_q_angle_has_no_recommendation() {
    let data = BiomechanicalData {
        q_angle: 25.0,
        ..BiomechanicalData::default()
    };
    let recs = generate(&athlete([false; 3], data), RiskCategory::Low);
    assert_eq!(recs, vec![RecommendationEngine::maintenance_recommendation()]);
}

#[test]
fn test_prior_injury_recommends_medical_consult() {
    let recs = generate(&athlete([false, false, true], BiomechanicalData::default()), RiskCategory::Moderate);
    assert_eq!(
        summary(&recs),
        vec![(RecommendationCategory::Medical, 1, names::PREVIOUS_ACL_INJURY)]
    );
    assert_eq!(recs[0].description(), messages::PRIOR_INJURY);
}

#[test]
fn test_elevated_category_adds_educational_program() {
    for category in [RiskCategory::High, RiskCategory::VeryHigh] {
        let recs = generate(&athlete([false; 3], BiomechanicalData::default()), category);
        assert_eq!(
            summary(&recs),
            vec![(RecommendationCategory::Educational, 1, names::OVERALL_HIGH_RISK)]
        );
    }
}

#[test]
fn test_all_rules_fire_in_fixed_order() {
    let data = BiomechanicalData {
        knee_valgus_angle: 20.0,
        hip_adduction_angle: 25.0,
        knee_flexion_angle: 40.0,
        hamstring_quad_ratio: 0.45,
        landing_asymmetry: 25.0,
        q_angle: 22.0,
        ..BiomechanicalData::default()
    };
    let recs = generate(&athlete([true, true, true], data), RiskCategory::VeryHigh);

    let targets: Vec<&str> = recs.iter().map(Recommendation::target_risk_factor).collect();
    assert_eq!(
        targets,
        vec![
            names::PREVIOUS_ACL_INJURY,
            names::EXCESSIVE_KNEE_VALGUS,
            names::EXCESSIVE_HIP_ADDUCTION,
            names::INSUFFICIENT_KNEE_FLEXION,
            names::HAMSTRING_QUADRICEPS_IMBALANCE,
            names::LANDING_ASYMMETRY,
            names::OVERALL_HIGH_RISK,
        ]
    );
}

#[test]
fn test_engine_categories_cover_every_variant() {
    let data = BiomechanicalData {
        knee_valgus_angle: 20.0,
        hip_adduction_angle: 25.0,
        knee_flexion_angle: 40.0,
        hamstring_quad_ratio: 0.45,
        landing_asymmetry: 25.0,
        ..BiomechanicalData::default()
    };
    let flagged = generate(&athlete([true; 3], data), RiskCategory::VeryHigh);
    let clean = generate(&athlete([false; 3], BiomechanicalData::default()), RiskCategory::Low);

    let mut produced: Vec<RecommendationCategory> = flagged
        .iter()
        .chain(&clean)
        .map(Recommendation::category)
        .collect();
    produced.sort_by_key(RecommendationCategory::as_str);
    produced.dedup();

    assert_eq!(
        produced,
        vec![
            RecommendationCategory::Biomechanical,
            RecommendationCategory::Educational,
            RecommendationCategory::General,
            RecommendationCategory::Medical,
            RecommendationCategory::Training,
        ]
    );
}
