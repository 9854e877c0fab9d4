// ABOUTME: Athlete demographic profile and medical history models
// ABOUTME: Athlete, Gender, and InjuryHistory definitions with BMI derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::BiomechanicalData;
use crate::constants::{history, units::CM_PER_METER};
use crate::errors::{AppError, AppResult};

/// Gender category used by the demographic scoring rules
///
/// `Female` is the higher-risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Higher-risk category
    Female,
    /// Lower-risk category
    Male,
}

impl Gender {
    /// Whether this category receives the demographic gender penalty
    #[must_use]
    pub const fn is_higher_risk(self) -> bool {
        matches!(self, Self::Female)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => f.write_str("Female"),
            Self::Male => f.write_str("Male"),
        }
    }
}

/// Medical history record: family history plus prior injury per knee
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InjuryHistory {
    /// A close relative has had an ACL injury
    pub family_history: bool,
    /// Prior right-knee ACL injury
    pub prior_right_injury: bool,
    /// Prior left-knee ACL injury
    pub prior_left_injury: bool,
}

impl InjuryHistory {
    /// Build from the ordered `[family, right, left]` flag record
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `flags` has exactly three entries
    pub fn from_flags(flags: &[bool]) -> AppResult<Self> {
        match *flags {
            [family_history, prior_right_injury, prior_left_injury] => Ok(Self {
                family_history,
                prior_right_injury,
                prior_left_injury,
            }),
            _ => Err(AppError::invalid_input(format!(
                "history must have exactly {} entries (family, right, left), got {}",
                history::HISTORY_LEN,
                flags.len()
            ))),
        }
    }

    /// Ordered `[family, right, left]` flags
    #[must_use]
    pub const fn as_flags(&self) -> [bool; history::HISTORY_LEN] {
        [
            self.family_history,
            self.prior_right_injury,
            self.prior_left_injury,
        ]
    }

    /// Either knee has a prior injury
    #[must_use]
    pub const fn has_prior_injury(&self) -> bool {
        self.prior_right_injury || self.prior_left_injury
    }
}

/// Athlete under assessment
///
/// Demographic fields and the history record are fixed at construction; BMI
/// is derived once. Only the attached [`BiomechanicalData`] may be changed
/// afterwards, through [`Athlete::biomechanics_mut`].
///
/// # Examples
///
/// ```rust
/// use acl_risk_core::models::{Athlete, Gender};
///
/// let athlete = Athlete::new("ATHL1", 22, Gender::Female, "Soccer", 165.1, 54.4, &[false, true, false])
///     .expect("valid athlete");
/// assert!(athlete.has_prior_injury_right());
/// assert!((athlete.bmi() - 19.96).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Athlete {
    name: String,
    age: u32,
    gender: Gender,
    sport: String,
    height_cm: f64,
    weight_kg: f64,
    history: InjuryHistory,
    bmi: f64,
    biomechanics: BiomechanicalData,
}

impl Athlete {
    /// Create an athlete from demographic data and the `[family, right, left]` history record
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the history record does not have exactly three
    /// entries, or `ValueOutOfRange` if height or weight is not positive.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        sport: impl Into<String>,
        height_cm: f64,
        weight_kg: f64,
        history: &[bool],
    ) -> AppResult<Self> {
        let history = InjuryHistory::from_flags(history)?;
        Self::with_history(name, age, gender, sport, height_cm, weight_kg, history)
    }

    /// Create an athlete from an already-structured history record
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if height or weight is not positive
    pub fn with_history(
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        sport: impl Into<String>,
        height_cm: f64,
        weight_kg: f64,
        history: InjuryHistory,
    ) -> AppResult<Self> {
        // NaN fails both comparisons, so it is rejected here too
        if !(height_cm > 0.0 && height_cm.is_finite()) {
            return Err(AppError::value_out_of_range(format!(
                "height must be positive, got {height_cm} cm"
            )));
        }
        if !(weight_kg > 0.0 && weight_kg.is_finite()) {
            return Err(AppError::value_out_of_range(format!(
                "weight must be positive, got {weight_kg} kg"
            )));
        }

        Ok(Self {
            name: name.into(),
            age,
            gender,
            sport: sport.into(),
            height_cm,
            weight_kg,
            history,
            bmi: Self::calculate_bmi(height_cm, weight_kg),
            biomechanics: BiomechanicalData::default(),
        })
    }

    /// Attach a complete set of biomechanical measurements
    #[must_use]
    pub fn with_biomechanics(mut self, biomechanics: BiomechanicalData) -> Self {
        self.biomechanics = biomechanics;
        self
    }

    /// BMI from height in cm and weight in kg
    #[must_use]
    pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
        let height_m = height_cm / CM_PER_METER;
        weight_kg / (height_m * height_m)
    }

    /// Athlete name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Gender category
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Sport as entered
    #[must_use]
    pub fn sport(&self) -> &str {
        &self.sport
    }

    /// Height in cm
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight in kg
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Body mass index computed at construction
    #[must_use]
    pub const fn bmi(&self) -> f64 {
        self.bmi
    }

    /// Medical history record
    #[must_use]
    pub const fn history(&self) -> &InjuryHistory {
        &self.history
    }

    /// Family history of ACL injury
    #[must_use]
    pub const fn has_family_history(&self) -> bool {
        self.history.family_history
    }

    /// Prior right-knee injury
    #[must_use]
    pub const fn has_prior_injury_right(&self) -> bool {
        self.history.prior_right_injury
    }

    /// Prior left-knee injury
    #[must_use]
    pub const fn has_prior_injury_left(&self) -> bool {
        self.history.prior_left_injury
    }

    /// Biomechanical measurements
    #[must_use]
    pub const fn biomechanics(&self) -> &BiomechanicalData {
        &self.biomechanics
    }

    /// Mutable access for recording measurements before analysis
    pub fn biomechanics_mut(&mut self) -> &mut BiomechanicalData {
        &mut self.biomechanics
    }
}
