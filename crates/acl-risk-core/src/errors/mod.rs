// ABOUTME: Unified error types for athlete construction, configuration, and profile loading
// ABOUTME: Defines ErrorCode, AppError with chaining, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure in the workspace is a construction-time rejection: either
//! the analyzer was configured with an invalid scoring table, or an athlete
//! was built from malformed input. Risk analysis itself never fails.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed input such as an athlete history of the wrong length
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A numeric input lies outside its physical domain (e.g. non-positive height)
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration could not be read or parsed
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration was read but violates an invariant (e.g. weight sum)
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Reading an input file failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

/// Broad classification of an error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The analyzer or scoring table was configured incorrectly
    InvalidConfiguration,
    /// Athlete data was malformed at construction time
    InvalidInput,
    /// Input could not be read or decoded
    Io,
}

impl ErrorCode {
    /// Classify this code into one of the two construction error kinds (or I/O)
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange => ErrorKind::InvalidInput,
            Self::ConfigError | Self::ConfigInvalid => ErrorKind::InvalidConfiguration,
            Self::StorageError | Self::SerializationError => ErrorKind::Io,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Malformed athlete input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Numeric input outside its valid domain
    #[must_use]
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Error kind of the underlying code
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.code.kind()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(ErrorCode::InvalidInput.kind(), ErrorKind::InvalidInput);
        assert_eq!(ErrorCode::ValueOutOfRange.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            ErrorCode::ConfigInvalid.kind(),
            ErrorKind::InvalidConfiguration
        );
        assert_eq!(ErrorCode::SerializationError.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let err = AppError::new(ErrorCode::ConfigInvalid, "weights sum to 0.9");
        assert_eq!(
            err.to_string(),
            "Configuration is invalid: weights sum to 0.9"
        );
    }

    #[test]
    fn test_validation_constructors_use_validation_codes() {
        let err = AppError::invalid_input("history needs 3 entries");
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = AppError::value_out_of_range("height must be positive");
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        assert_eq!(
            serde_json::to_string(&ErrorCode::ValueOutOfRange).ok().as_deref(),
            Some("\"VALUE_OUT_OF_RANGE\"")
        );
        assert!(serde_json::from_str::<ErrorCode>("\"MISSING_REQUIRED_FIELD\"").is_err());
    }

    #[test]
    fn test_source_chaining() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AppError::new(ErrorCode::StorageError, "profile.json").with_source(io);
        assert!(StdError::source(&err).is_some());
    }
}
