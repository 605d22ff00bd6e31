// ABOUTME: Core types and constants for the coachdesk check-in pipeline
// ABOUTME: Foundation crate with error handling, check-in models, and scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachdesk Core
//!
//! Foundation crate providing shared types and constants for the coachdesk
//! check-in pipeline. It changes infrequently and carries no pipeline logic.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the pipeline error taxonomy (`PipelineError`)
//! - **constants**: Scoring formula constants and reserved sheet column names
//! - **models**: Check-in records and the raw rows they are built from

/// Unified error handling with standard error codes and HTTP status mapping
pub mod errors;

/// Scoring constants and reserved column names organized by domain
pub mod constants;

/// Check-in data models (typed records and raw wire rows)
pub mod models;
