// ABOUTME: Tests for text and JSON risk reports
// ABOUTME: Verifies report layout, factor ranking, and the JSON document shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use acl_risk::formatters::{render_json_report, render_report, render_text_report, ReportFormat};
use acl_risk::models::{Athlete, BiomechanicalData, Gender};
use acl_risk::RiskAnalyzer;
use chrono::{TimeZone, Utc};

fn high_risk_athlete() -> Athlete {
    Athlete::new(
        "HighRisk",
        18,
        Gender::Female,
        "Basketball",
        170.0,
        65.0,
        &[true, true, false],
    )
    .unwrap()
    .with_biomechanics(BiomechanicalData {
        knee_valgus_angle: 20.0,
        hip_adduction_angle: 25.0,
        knee_flexion_angle: 40.0,
        hamstring_quad_ratio: 0.45,
        landing_asymmetry: 25.0,
        q_angle: 22.0,
        ..BiomechanicalData::default()
    })
}

#[test]
fn test_text_report_layout() {
    let athlete = high_risk_athlete();
    let assessment = RiskAnalyzer::new().analyze_risk(&athlete);
    let report = render_text_report(&assessment);

    let expected_head = "ACL Risk Assessment for HighRisk\n\
        \n\
        Overall Risk: Very High (8.4/10)\n\
        \n\
        Risk Component Scores:\n\
        - Demographic: 5.5/10\n\
        - Biomechanical: 10.0/10\n\
        - Medical History: 8.0/10\n\
        \n\
        Key Risk Factors:\n";
    assert!(report.starts_with(expected_head), "{report}");

    assert!(report.contains(
        "- [High Priority] Medical: Consult with sports medicine physician and physical therapist for comprehensive ACL prevention program (Addresses: Previous ACL Injury)"
    ));
    assert!(report.ends_with("(Addresses: Overall High Risk)\n"));
}

#[test]
fn test_text_report_ranks_factors() {
    let athlete = high_risk_athlete();
    let assessment = RiskAnalyzer::new().analyze_risk(&athlete);
    let report = render_text_report(&assessment);

    let factors: Vec<&str> = report
        .split("Key Risk Factors:\n")
        .nth(1)
        .unwrap()
        .split("\n\n")
        .next()
        .unwrap()
        .lines()
        .collect();
    assert_eq!(factors.len(), 9);
    // Severity 10 ties are broken by name
    assert_eq!(factors[0], "- Excessive Knee Valgus: 10.0/10");
    assert_eq!(factors[1], "- Insufficient Knee Flexion: 10.0/10");
    assert_eq!(factors[2], "- Previous ACL Injury: 9.0/10");

    // Identical input renders identically
    assert_eq!(report, render_text_report(&assessment));
}

#[test]
fn test_json_report_shape() {
    let athlete = high_risk_athlete();
    let assessment = RiskAnalyzer::new().analyze_risk(&athlete);
    let stamp = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();

    let json = render_json_report(&assessment, stamp).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["athlete_name"], "HighRisk");
    assert_eq!(value["risk_category"], "Very High");
    assert_eq!(value["overall_risk_score"], 8.375);
    assert_eq!(value["generated_at"], "2025-03-14T09:30:00Z");
    assert_eq!(value["key_risk_factors"].as_array().unwrap().len(), 9);
    assert_eq!(value["key_risk_factors"][0]["name"], "Excessive Knee Valgus");
    assert_eq!(value["recommendations"][0]["category"], "medical");
    assert_eq!(value["recommendations"][0]["priority"], 1);
}

#[test]
fn test_render_report_dispatch() {
    let athlete = Athlete::new("Calm", 35, Gender::Male, "Swimming", 180.0, 75.0, &[false; 3]).unwrap();
    let assessment = RiskAnalyzer::new().analyze_risk(&athlete);

    let text = render_report(&assessment, ReportFormat::Text).unwrap();
    assert!(text.contains("Overall Risk: Low (0.0/10)"));
    assert!(text.contains("[Low Priority] General:"));

    let json = render_report(&assessment, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["key_risk_factors"].as_array().unwrap().is_empty());
    assert!(value.get("generated_at").is_some());
}
