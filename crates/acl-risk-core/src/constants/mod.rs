// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for factor names, score bounds, and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Tunable thresholds and points live in the intelligence crate's
//! scoring table; only values that are part of the data contract live here.

/// Named risk factors reported in an assessment
pub mod risk_factors {
    /// Either knee has a prior ACL injury
    pub const PREVIOUS_ACL_INJURY: &str = "Previous ACL Injury";
    /// Knee valgus angle above threshold
    pub const EXCESSIVE_KNEE_VALGUS: &str = "Excessive Knee Valgus";
    /// Hip adduction angle above threshold
    pub const EXCESSIVE_HIP_ADDUCTION: &str = "Excessive Hip Adduction";
    /// Knee flexion angle below threshold
    pub const INSUFFICIENT_KNEE_FLEXION: &str = "Insufficient Knee Flexion";
    /// Hamstring:quadriceps ratio below threshold
    pub const HAMSTRING_QUADRICEPS_IMBALANCE: &str = "Hamstring-Quadriceps Imbalance";
    /// Left/right landing asymmetry above threshold
    pub const LANDING_ASYMMETRY: &str = "Landing Asymmetry";
    /// Q-angle above threshold
    pub const ELEVATED_Q_ANGLE: &str = "Elevated Q-Angle";
    /// Athlete is in the higher-risk gender category
    pub const FEMALE_GENDER: &str = "Female Gender";
    /// Athlete plays a pivoting/jumping sport
    pub const HIGH_RISK_SPORT: &str = "High-Risk Sport Participation";
    /// Overall category is High or Very High
    pub const OVERALL_HIGH_RISK: &str = "Overall High Risk";
    /// Target of the fallback recommendation
    pub const LOW_RISK_MAINTENANCE: &str = "Maintenance of Low Risk Profile";
}

/// Score bounds shared by every component score and factor severity
pub mod scores {
    /// Lower bound of every score
    pub const MIN_SCORE: f64 = 0.0;
    /// Upper bound of every component score and severity
    pub const MAX_SCORE: f64 = 10.0;
}

/// Recommendation priority levels (1 = highest)
pub mod priority {
    /// Act first
    pub const HIGH: u8 = 1;
    /// Act soon
    pub const MEDIUM: u8 = 2;
    /// Keep in mind
    pub const LOW: u8 = 3;
}

/// Unit conversion and measurement constants
pub mod units {
    /// Centimeters per meter (height is recorded in cm)
    pub const CM_PER_METER: f64 = 100.0;
}

/// Medical history record layout
pub mod history {
    /// Entries in a history record: family, right knee, left knee
    pub const HISTORY_LEN: usize = 3;
}
