// ABOUTME: Athlete profile files for the command-line analyzer
// ABOUTME: Loads JSON or YAML profiles and converts them into validated athletes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Athlete profile loading
//!
//! A profile is the on-disk form of an [`Athlete`]. The format is chosen by
//! file extension: `.json`, `.yaml` or `.yml`.
//!
//! ```yaml
//! name: ATHL1
//! age: 22
//! gender: female
//! sport: Soccer
//! height_cm: 165.1
//! weight_kg: 54.4
//! history: [false, true, false]
//! biomechanics:
//!   knee_valgus_angle: 14.0
//! ```

use acl_risk_core::errors::{AppError, AppResult, ErrorCode};
use acl_risk_core::models::{Athlete, BiomechanicalData, Gender};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialized athlete record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Athlete name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Primary sport
    pub sport: String,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// `[family history, prior right injury, prior left injury]`
    pub history: Vec<bool>,
    /// Screening measurements; omitted fields are unmeasured
    #[serde(default)]
    pub biomechanics: BiomechanicalData,
}

impl AthleteProfile {
    /// Validate the profile and build an athlete from it
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a history of the wrong length and
    /// `ValueOutOfRange` for non-positive height or weight
    pub fn into_athlete(self) -> AppResult<Athlete> {
        Ok(Athlete::new(
            self.name,
            self.age,
            self.gender,
            self.sport,
            self.height_cm,
            self.weight_kg,
            &self.history,
        )?
        .with_biomechanics(self.biomechanics))
    }
}

/// Supported profile encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ProfileFormat {
    /// Detect the encoding from a file extension (case-insensitive)
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse a profile from text in a known encoding
///
/// # Errors
///
/// Returns `SerializationError` if the text does not decode into a profile
pub fn parse_profile(contents: &str, format: ProfileFormat) -> AppResult<AthleteProfile> {
    match format {
        ProfileFormat::Json => serde_json::from_str(contents).map_err(|e| {
            AppError::new(ErrorCode::SerializationError, format!("invalid JSON profile: {e}"))
                .with_source(e)
        }),
        ProfileFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| {
            AppError::new(ErrorCode::SerializationError, format!("invalid YAML profile: {e}"))
                .with_source(e)
        }),
    }
}

/// Read and decode a profile file
///
/// # Errors
///
/// Returns `InvalidInput` for an unsupported extension, `StorageError` if the
/// file cannot be read and `SerializationError` if it cannot be decoded
pub fn load_profile(path: &Path) -> AppResult<AthleteProfile> {
    let format = ProfileFormat::from_path(path).ok_or_else(|| {
        AppError::invalid_input(format!(
            "unsupported profile extension for {} (expected .json, .yaml or .yml)",
            path.display()
        ))
    })?;

    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::StorageError,
            format!("cannot read {}: {e}", path.display()),
        )
        .with_source(e)
    })?;

    debug!(path = %path.display(), ?format, "loaded athlete profile");
    parse_profile(&contents, format)
}

/// Read a profile file and build the athlete it describes
///
/// # Errors
///
/// Returns any error from [`load_profile`] or [`AthleteProfile::into_athlete`]
pub fn load_athlete(path: &Path) -> AppResult<Athlete> {
    load_profile(path)?.into_athlete()
}
