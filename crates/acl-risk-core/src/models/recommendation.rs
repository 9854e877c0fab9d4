// ABOUTME: Recommendation value object with category, priority, and target risk factor
// ABOUTME: Priority label rendering and the one-line display format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::priority;

/// Kind of action a recommendation asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RecommendationCategory {
    /// Clinical follow-up
    Medical,
    /// Movement-pattern correction
    Biomechanical,
    /// Strength or conditioning work
    Training,
    /// Prevention-program education
    Educational,
    /// Maintenance advice when nothing is flagged
    General,
}

impl RecommendationCategory {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medical => "Medical",
            Self::Biomechanical => "Biomechanical",
            Self::Training => "Training",
            Self::Educational => "Educational",
            Self::General => "General",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single actionable recommendation
///
/// Priority is kept as a raw integer: 1 is highest, 3 lowest, and any other
/// value renders as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    category: RecommendationCategory,
    priority: u8,
    description: String,
    target_risk_factor: String,
}

impl Recommendation {
    /// Create a recommendation
    #[must_use]
    pub fn new(
        category: RecommendationCategory,
        priority: u8,
        description: impl Into<String>,
        target_risk_factor: impl Into<String>,
    ) -> Self {
        Self {
            category,
            priority,
            description: description.into(),
            target_risk_factor: target_risk_factor.into(),
        }
    }

    /// Category tag
    #[must_use]
    pub const fn category(&self) -> RecommendationCategory {
        self.category
    }

    /// Priority (1 = highest)
    #[must_use]
    pub const fn priority(&self) -> u8 {
        self.priority
    }

    /// Recommended action
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Risk factor this recommendation addresses
    #[must_use]
    pub fn target_risk_factor(&self) -> &str {
        &self.target_risk_factor
    }

    /// `High`, `Medium`, `Low`, or `Unknown` for out-of-range priorities
    #[must_use]
    pub const fn priority_label(&self) -> &'static str {
        match self.priority {
            priority::HIGH => "High",
            priority::MEDIUM => "Medium",
            priority::LOW => "Low",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} Priority] {}: {} (Addresses: {})",
            self.priority_label(),
            self.category,
            self.description,
            self.target_risk_factor
        )
    }
}
