// ABOUTME: ACL injury-risk intelligence crate: scoring table, analyzer, factors, and recommendations
// ABOUTME: Pure, synchronous scoring engine over validated athlete inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ACL Risk Intelligence
//!
//! Computes an ACL injury-risk assessment for an [`Athlete`](acl_risk_core::models::Athlete):
//!
//! 1. demographic, biomechanical, and medical-history component scores (0-10 each)
//! 2. a weighted overall score and its risk band
//! 3. named risk factors with diagnostic severities
//! 4. prioritized recommendations
//!
//! All thresholds, points, and weights come from [`RiskScoringConfig`].

/// Scoring table configuration
pub mod config;

/// Injury-prevention recommendation rules
pub mod recommendation_engine;

/// Stateless risk analyzer
pub mod risk_analyzer;

/// Named risk-factor extraction
pub mod risk_factors;

pub use config::{ConfigError, RiskScoringConfig, RiskWeights};
pub use recommendation_engine::{RecommendationEngine, RecommendationEngineTrait};
pub use risk_analyzer::RiskAnalyzer;
pub use risk_factors::extract_key_risk_factors;
