// ABOUTME: Scoring table sections for weights, demographic, biomechanical, and medical rules
// ABOUTME: Two-tier step rules, category bands, and factor severity parameters with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Rule Sections
//!
//! Each section of the scoring table owns both its default constants and the
//! small predicates that read them, so the analyzer never hard-codes a
//! threshold.

use acl_risk_core::models::RiskCategory;
use serde::{Deserialize, Serialize};

/// Allowed deviation of the weight sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Component weights for the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    /// Weight of the demographic component
    pub demographic: f64,
    /// Weight of the biomechanical component
    pub biomechanical: f64,
    /// Weight of the medical history component
    pub medical_history: f64,
}

impl RiskWeights {
    /// Sum of the three weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.demographic + self.biomechanical + self.medical_history
    }

    /// Sum lies within 1.0 ± [`WEIGHT_SUM_TOLERANCE`]
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        (1.0 - WEIGHT_SUM_TOLERANCE..=1.0 + WEIGHT_SUM_TOLERANCE).contains(&self.sum())
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        // Biomechanics dominate
        Self {
            demographic: 0.25,
            biomechanical: 0.5,
            medical_history: 0.25,
        }
    }
}

/// Demographic scoring rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicRules {
    /// Points for the higher-risk gender category
    pub higher_risk_gender_points: f64,
    /// Youngest age (inclusive) in the high-risk age band
    pub min_high_risk_age: u32,
    /// Oldest age (inclusive) in the high-risk age band
    pub max_high_risk_age: u32,
    /// Points for an age inside the band
    pub age_points: f64,
    /// Sports matched case-insensitively as high risk
    pub high_risk_sports: Vec<String>,
    /// Points for a high-risk sport
    pub sport_points: f64,
    /// BMI below this is penalized
    pub underweight_bmi: f64,
    /// BMI above this is penalized
    pub obese_bmi: f64,
    /// Points for a BMI outside the healthy band
    pub bmi_points: f64,
}

impl DemographicRules {
    /// Age falls inside the inclusive high-risk band
    #[must_use]
    pub fn is_high_risk_age(&self, age: u32) -> bool {
        (self.min_high_risk_age..=self.max_high_risk_age).contains(&age)
    }

    /// Sport matches a configured high-risk sport, ignoring case
    #[must_use]
    pub fn is_high_risk_sport(&self, sport: &str) -> bool {
        self.high_risk_sports
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(sport))
    }

    /// BMI is below the underweight or above the obese cutoff
    #[must_use]
    pub fn is_bmi_outlier(&self, bmi: f64) -> bool {
        bmi < self.underweight_bmi || bmi > self.obese_bmi
    }
}

impl Default for DemographicRules {
    fn default() -> Self {
        Self {
            higher_risk_gender_points: 2.0,
            min_high_risk_age: 14,
            max_high_risk_age: 25,
            age_points: 1.5,
            high_risk_sports: ["Basketball", "Soccer", "Football", "Handball", "Volleyball"]
                .into_iter()
                .map(String::from)
                .collect(),
            sport_points: 2.0,
            underweight_bmi: 18.5,
            obese_bmi: 30.0,
            bmi_points: 1.0,
        }
    }
}

/// Which side of a threshold is the risky one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDirection {
    /// Values above the threshold are risky (angles, asymmetry)
    Above,
    /// Values below the threshold are risky (flexion, H:Q ratio)
    Below,
}

/// How the excess past a threshold converts into severity points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityScale {
    /// One point per `step` units of excess (`excess / step`)
    Step(f64),
    /// `rate` points per unit of excess (`excess * rate`)
    Rate(f64),
}

impl SeverityScale {
    /// Severity points for an excess past the threshold
    #[must_use]
    pub fn points(self, excess: f64) -> f64 {
        match self {
            Self::Step(step) => excess / step,
            Self::Rate(rate) => excess * rate,
        }
    }

    /// Scale factor is positive and finite
    #[must_use]
    pub fn is_positive(self) -> bool {
        let (Self::Step(value) | Self::Rate(value)) = self;
        value.is_finite() && value > 0.0
    }
}

/// Two-tier step rule for one biomechanical measurement
///
/// `threshold` is the moderate tier and also the trigger for the named risk
/// factor and its recommendation; `severe_threshold` is the stricter tier.
/// The tiers are mutually exclusive. For `Below` rules a reading of zero is
/// treated as unmeasured and never triggers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierRule {
    /// Risky side of the thresholds
    pub direction: RiskDirection,
    /// Moderate tier / factor trigger
    pub threshold: f64,
    /// Severe tier
    pub severe_threshold: f64,
    /// Points in the moderate tier
    pub points: f64,
    /// Points in the severe tier
    pub severe_points: f64,
    /// Conversion of excess over `threshold` into severity points
    pub severity_scale: SeverityScale,
}

impl TierRule {
    /// Rule where larger readings are worse
    #[must_use]
    pub const fn above(
        threshold: f64,
        severe_threshold: f64,
        points: f64,
        severe_points: f64,
        severity_scale: SeverityScale,
    ) -> Self {
        Self {
            direction: RiskDirection::Above,
            threshold,
            severe_threshold,
            points,
            severe_points,
            severity_scale,
        }
    }

    /// Rule where smaller readings are worse
    #[must_use]
    pub const fn below(
        threshold: f64,
        severe_threshold: f64,
        points: f64,
        severe_points: f64,
        severity_scale: SeverityScale,
    ) -> Self {
        Self {
            direction: RiskDirection::Below,
            threshold,
            severe_threshold,
            points,
            severe_points,
            severity_scale,
        }
    }

    fn is_measured(&self, value: f64) -> bool {
        match self.direction {
            RiskDirection::Above => true,
            RiskDirection::Below => value > 0.0,
        }
    }

    fn beyond(&self, value: f64, limit: f64) -> bool {
        self.is_measured(value)
            && match self.direction {
                RiskDirection::Above => value > limit,
                RiskDirection::Below => value < limit,
            }
    }

    /// Reading is past the moderate threshold
    #[must_use]
    pub fn triggers(&self, value: f64) -> bool {
        self.beyond(value, self.threshold)
    }

    /// Step-function points for a reading (severe tier takes priority)
    #[must_use]
    pub fn points_for(&self, value: f64) -> f64 {
        if self.beyond(value, self.severe_threshold) {
            self.severe_points
        } else if self.triggers(value) {
            self.points
        } else {
            0.0
        }
    }

    /// Distance past the moderate threshold, in the rule's risky direction
    #[must_use]
    pub fn excess(&self, value: f64) -> f64 {
        match self.direction {
            RiskDirection::Above => value - self.threshold,
            RiskDirection::Below => self.threshold - value,
        }
    }

    /// Tiers are ordered consistently with the direction and the scale is positive
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let ordered = match self.direction {
            RiskDirection::Above => self.severe_threshold >= self.threshold,
            RiskDirection::Below => self.severe_threshold <= self.threshold,
        };
        ordered && self.severity_scale.is_positive()
    }
}

/// Biomechanical scoring rules, one per scored measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiomechanicalRules {
    /// Knee valgus angle (degrees)
    pub knee_valgus: TierRule,
    /// Hip adduction angle (degrees)
    pub hip_adduction: TierRule,
    /// Knee flexion angle (degrees, lower is worse)
    pub knee_flexion: TierRule,
    /// Hamstring:quadriceps ratio (lower is worse)
    pub hamstring_quad_ratio: TierRule,
    /// Landing asymmetry (%)
    pub landing_asymmetry: TierRule,
    /// Q-angle (degrees)
    pub q_angle: TierRule,
}

impl BiomechanicalRules {
    /// All rules with a label, in scoring order
    #[must_use]
    pub const fn labelled(&self) -> [(&'static str, &TierRule); 6] {
        [
            ("knee_valgus", &self.knee_valgus),
            ("hip_adduction", &self.hip_adduction),
            ("knee_flexion", &self.knee_flexion),
            ("hamstring_quad_ratio", &self.hamstring_quad_ratio),
            ("landing_asymmetry", &self.landing_asymmetry),
            ("q_angle", &self.q_angle),
        ]
    }
}

impl Default for BiomechanicalRules {
    fn default() -> Self {
        Self {
            knee_valgus: TierRule::above(10.0, 15.0, 1.0, 2.0, SeverityScale::Step(2.0)),
            hip_adduction: TierRule::above(15.0, 20.0, 0.75, 1.5, SeverityScale::Step(3.0)),
            knee_flexion: TierRule::below(60.0, 45.0, 0.75, 1.5, SeverityScale::Step(4.0)),
            hamstring_quad_ratio: TierRule::below(0.6, 0.5, 1.0, 2.0, SeverityScale::Rate(20.0)),
            landing_asymmetry: TierRule::above(10.0, 20.0, 0.75, 1.5, SeverityScale::Step(4.0)),
            q_angle: TierRule::above(15.0, 20.0, 0.75, 1.5, SeverityScale::Step(3.0)),
        }
    }
}

/// Medical history scoring rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistoryRules {
    /// Points when either knee has a prior injury (not per knee)
    pub prior_injury_points: f64,
    /// Points for family history
    pub family_history_points: f64,
}

impl Default for MedicalHistoryRules {
    fn default() -> Self {
        Self {
            prior_injury_points: 6.0,
            family_history_points: 2.0,
        }
    }
}

/// Upper bounds (inclusive) of the overall risk bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryThresholds {
    /// Highest score still Low
    pub low: f64,
    /// Highest score still Moderate
    pub moderate: f64,
    /// Highest score still High
    pub high: f64,
}

impl CategoryThresholds {
    /// Band for an overall score
    #[must_use]
    pub fn categorize(&self, score: f64) -> RiskCategory {
        if score <= self.low {
            RiskCategory::Low
        } else if score <= self.moderate {
            RiskCategory::Moderate
        } else if score <= self.high {
            RiskCategory::High
        } else {
            RiskCategory::VeryHigh
        }
    }
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            low: 3.0,
            moderate: 6.0,
            high: 8.0,
        }
    }
}

/// Severity parameters for named risk factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityRules {
    /// Severity of a measurement just past its threshold
    pub base: f64,
    /// Fixed severity of a prior ACL injury
    pub prior_injury: f64,
    /// Fixed severity of the higher-risk gender category
    pub higher_risk_gender: f64,
    /// Fixed severity of high-risk sport participation
    pub high_risk_sport: f64,
}

impl Default for SeverityRules {
    fn default() -> Self {
        Self {
            base: 5.0,
            prior_injury: 9.0,
            higher_risk_gender: 7.0,
            high_risk_sport: 7.0,
        }
    }
}
