// ABOUTME: Core data models for ACL injury-risk assessment
// ABOUTME: Re-exports Athlete, BiomechanicalData, RiskAssessment, and Recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Inputs (`Athlete` with its `BiomechanicalData`) are built and validated by
//! the caller; outputs (`RiskAssessment` with its `Recommendation`s) are
//! produced by the analyzer and read-only afterwards.
//!
//! ## Core Models
//!
//! - `Athlete`: demographics, injury history, derived BMI
//! - `BiomechanicalData`: twelve landing, jump, and anatomical measurements
//! - `RiskAssessment`: component scores, named risk factors, recommendations
//! - `Recommendation`: prioritized, categorized action

mod assessment;
mod athlete;
mod biomechanics;
mod recommendation;

pub use assessment::{RiskAssessment, RiskCategory};
pub use athlete::{Athlete, Gender, InjuryHistory};
pub use biomechanics::BiomechanicalData;
pub use recommendation::{Recommendation, RecommendationCategory};
