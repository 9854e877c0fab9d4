// ABOUTME: Main library entry point for the ACL injury-risk assessment toolkit
// ABOUTME: Re-exports the scoring engine and adds profile loading, reports, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ACL Risk
//!
//! Screens athletes for anterior cruciate ligament (ACL) injury risk from
//! demographic data, landing biomechanics, and injury history.
//!
//! ## Architecture
//!
//! - **`acl-risk-core`**: Athlete, measurement, assessment, and recommendation models plus errors
//! - **`acl-risk-intelligence`**: The scoring table and the stateless [`RiskAnalyzer`]
//! - **This crate**: Profile files, text/JSON reports, logging, and the `acl-risk` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use acl_risk::models::{Athlete, BiomechanicalData, Gender};
//! use acl_risk::RiskAnalyzer;
//!
//! let athlete = Athlete::new("ATHL1", 22, Gender::Female, "Soccer", 165.1, 54.4, &[false, true, false])
//!     .expect("valid athlete")
//!     .with_biomechanics(BiomechanicalData {
//!         knee_valgus_angle: 14.0,
//!         ..BiomechanicalData::default()
//!     });
//!
//! let assessment = RiskAnalyzer::new().analyze_risk(&athlete);
//! println!("{}", acl_risk::formatters::render_text_report(&assessment));
//! ```

/// Report rendering (text and JSON)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Athlete profile files
pub mod profile;

pub use acl_risk_core::{constants, errors, models};
pub use acl_risk_intelligence::{
    config, extract_key_risk_factors, ConfigError, RecommendationEngine,
    RecommendationEngineTrait, RiskAnalyzer, RiskScoringConfig, RiskWeights,
};
