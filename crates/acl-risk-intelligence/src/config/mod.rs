// ABOUTME: Configuration module for acl-risk-intelligence crate
// ABOUTME: Re-exports the risk scoring table types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Risk scoring table (weights, thresholds, points, sports)
pub mod scoring;

pub use scoring::{ConfigError, RiskScoringConfig, RiskWeights};
