// ABOUTME: Biomechanical measurement record for landing, jump, and neuromuscular tests
// ABOUTME: Twelve independent measurements, all defaulting to zero (unmeasured)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Biomechanical measurements for one athlete
///
/// Fields are public and unvalidated: range and unit checks belong to
/// whoever records the data. A value of zero means "not measured".
///
/// # Examples
///
/// ```rust
/// use acl_risk_core::models::BiomechanicalData;
///
/// let data = BiomechanicalData {
///     knee_valgus_angle: 12.5,
///     hamstring_quad_ratio: 0.55,
///     ..BiomechanicalData::default()
/// };
/// assert_eq!(data.q_angle, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomechanicalData {
    // Landing mechanics
    /// Knee valgus angle (degrees)
    pub knee_valgus_angle: f64,
    /// Hip adduction angle (degrees)
    pub hip_adduction_angle: f64,
    /// Knee flexion angle at landing (degrees)
    pub knee_flexion_angle: f64,

    // Jump measurements
    /// Vertical jump height (cm)
    pub vertical_jump_height: f64,
    /// Landing force (N/kg of body weight)
    pub landing_force: f64,
    /// Left/right landing difference (%)
    pub landing_asymmetry: f64,

    // Neuromuscular control
    /// Hamstring:quadriceps strength ratio
    pub hamstring_quad_ratio: f64,
    /// Single-leg balance time (seconds)
    pub single_leg_balance_time: u32,
    /// Proprioception (0-10 scale)
    pub proprioception_score: f64,

    // Anatomical factors
    /// Q-angle (degrees)
    pub q_angle: f64,
    /// Joint laxity (0-5 scale)
    pub joint_laxity: f64,
    /// Intercondylar notch width (mm, from imaging when available)
    pub intercondylar_notch_width: f64,
}
