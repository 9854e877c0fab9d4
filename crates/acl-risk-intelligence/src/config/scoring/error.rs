// ABOUTME: Configuration error types for scoring table validation
// ABOUTME: Defines error variants for invalid weights, ranges, and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for scoring table validation.

use acl_risk_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Weights don't sum to 1.0 within tolerance
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Threshold ordering or range violated (e.g. category bands not ascending)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse(_) => ErrorCode::ConfigError,
            ConfigError::InvalidWeights(_) | ConfigError::InvalidRange(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
