// ABOUTME: Core types and constants for ACL injury-risk assessment
// ABOUTME: Foundation crate with error handling, scoring constants, and the data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ACL Risk Core
//!
//! Foundation crate providing shared types and constants for the ACL
//! injury-risk assessment engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Scoring thresholds, points, and factor names
//! - **models**: `Athlete`, `BiomechanicalData`, `RiskAssessment`, `Recommendation`

/// Unified error handling system with standard error codes
pub mod errors;

/// Scoring constants organized by domain
pub mod constants;

/// Core data models (Athlete, `BiomechanicalData`, `RiskAssessment`, Recommendation)
pub mod models;
