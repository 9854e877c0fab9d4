// ABOUTME: Tests for the risk scoring table configuration
// ABOUTME: Validates defaults, invariant checks, and environment variable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::env;

use acl_risk_core::errors::{AppError, ErrorCode};
use acl_risk_intelligence::config::scoring::{
    ENV_HIGH_RISK_SPORTS, ENV_WEIGHT_BIOMECHANICAL, ENV_WEIGHT_DEMOGRAPHIC, ENV_WEIGHT_MEDICAL,
};
use acl_risk_intelligence::{ConfigError, RiskAnalyzer, RiskScoringConfig, RiskWeights};
use serial_test::serial;

const ALL_VARS: [&str; 4] = [
    ENV_WEIGHT_DEMOGRAPHIC,
    ENV_WEIGHT_BIOMECHANICAL,
    ENV_WEIGHT_MEDICAL,
    ENV_HIGH_RISK_SPORTS,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_table_is_valid() {
    let config = RiskScoringConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.weights.demographic, 0.25);
    assert_eq!(config.weights.biomechanical, 0.5);
    assert_eq!(config.weights.medical_history, 0.25);
    assert_eq!(config.demographic.high_risk_sports.len(), 5);
    assert_eq!(config.categories.low, 3.0);
    assert_eq!(config.categories.moderate, 6.0);
    assert_eq!(config.categories.high, 8.0);
}

#[test]
fn test_weight_sum_tolerance() {
    let with = |d, b, m| {
        RiskScoringConfig::default().with_weights(RiskWeights {
            demographic: d,
            biomechanical: b,
            medical_history: m,
        })
    };

    assert!(with(0.2, 0.5, 0.3).validate().is_ok());
    assert!(with(0.245, 0.5, 0.25).validate().is_ok());
    assert!(with(0.255, 0.5, 0.25).validate().is_ok());
    assert!(matches!(
        with(0.3, 0.5, 0.25).validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
    assert!(matches!(
        with(f64::NAN, 0.5, 0.25).validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_misordered_bands_rejected() {
    let mut config = RiskScoringConfig::default();
    config.categories.moderate = 9.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let err = RiskAnalyzer::with_config(config).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_inverted_tier_rejected() {
    let mut config = RiskScoringConfig::default();
    config.biomechanical.knee_flexion.severe_threshold = 70.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_custom_table_changes_scoring() {
    let mut config = RiskScoringConfig::default();
    config.demographic.high_risk_sports = vec!["Rugby".into()];
    let analyzer = RiskAnalyzer::with_config(config).unwrap();

    let rugby = acl_risk_core::models::Athlete::new(
        "R",
        40,
        acl_risk_core::models::Gender::Male,
        "rugby",
        180.0,
        75.0,
        &[false; 3],
    )
    .unwrap();
    assert_eq!(analyzer.demographic_risk(&rugby), 2.0);
}

#[test]
fn test_config_error_maps_to_app_error_codes() {
    let invalid: AppError = ConfigError::InvalidWeights("sum 0.9".into()).into();
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
    assert!(invalid.to_string().contains("sum 0.9"));

    let parse: AppError = ConfigError::Parse("Invalid X".into()).into();
    assert_eq!(parse.code, ErrorCode::ConfigError);
    assert!(std::error::Error::source(&parse).is_some());
}

#[test]
#[serial]
fn test_env_weight_overrides() {
    clear_env();
    env::set_var(ENV_WEIGHT_DEMOGRAPHIC, "0.2");
    env::set_var(ENV_WEIGHT_MEDICAL, " 0.3 ");

    let analyzer = RiskAnalyzer::from_env().unwrap();
    assert_eq!(analyzer.weights().demographic, 0.2);
    assert_eq!(analyzer.weights().biomechanical, 0.5);
    assert_eq!(analyzer.weights().medical_history, 0.3);

    clear_env();
}

#[test]
#[serial]
fn test_env_weights_must_still_sum_to_one() {
    clear_env();
    env::set_var(ENV_WEIGHT_BIOMECHANICAL, "0.9");

    let err = RiskAnalyzer::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_env();
}

#[test]
#[serial]
fn test_explicit_weights_replace_invalid_env_weights() {
    clear_env();
    env::set_var(ENV_WEIGHT_DEMOGRAPHIC, "0.9");
    env::set_var(ENV_HIGH_RISK_SPORTS, "Rugby");

    assert_eq!(
        RiskAnalyzer::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    let analyzer = RiskAnalyzer::from_env_with_weights(RiskWeights {
        demographic: 0.25,
        biomechanical: 0.5,
        medical_history: 0.25,
    })
    .unwrap();
    assert_eq!(analyzer.weights().demographic, 0.25);
    assert_eq!(analyzer.weights().biomechanical, 0.5);
    assert_eq!(analyzer.weights().medical_history, 0.25);
    assert_eq!(analyzer.config().demographic.high_risk_sports, vec!["Rugby"]);

    let err = RiskAnalyzer::from_env_with_weights(RiskWeights {
        demographic: 0.5,
        biomechanical: 0.5,
        medical_history: 0.25,
    })
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    env::set_var(ENV_WEIGHT_DEMOGRAPHIC, "a quarter");
    let err = RiskAnalyzer::from_env_with_weights(RiskWeights::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);

    clear_env();
}

#[test]
#[serial]
fn test_env_unparsable_weight() {
    clear_env();
    env::set_var(ENV_WEIGHT_DEMOGRAPHIC, "a quarter");

    assert!(matches!(
        RiskScoringConfig::load(),
        Err(ConfigError::Parse(_))
    ));
    let err = RiskAnalyzer::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);

    clear_env();
}

#[test]
#[serial]
fn test_env_high_risk_sports() {
    clear_env();
    env::set_var(ENV_HIGH_RISK_SPORTS, "Rugby, Hockey ,,");

    let config = RiskScoringConfig::load().unwrap();
    assert_eq!(config.demographic.high_risk_sports, vec!["Rugby", "Hockey"]);
    assert!(config.demographic.is_high_risk_sport("HOCKEY"));
    assert!(!config.demographic.is_high_risk_sport("Soccer"));

    env::set_var(ENV_HIGH_RISK_SPORTS, " , ");
    assert!(matches!(
        RiskScoringConfig::load(),
        Err(ConfigError::Parse(_))
    ));

    clear_env();
}

#[test]
#[serial]
fn test_load_without_overrides_matches_default() {
    clear_env();
    assert_eq!(RiskScoringConfig::load().unwrap(), RiskScoringConfig::default());
}
