// ABOUTME: Main library entry point for the coachdesk check-in pipeline
// ABOUTME: Wires validation, scoring, insights, and recommendations into a batch import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachdesk
//!
//! Check-in import pipeline for a coaching platform. Raw rows exported from a
//! client's check-in sheet go in; scored check-ins, a measurement projection,
//! progress insights, recommendations, and grouped custom questions come out.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coachdesk::config::ImportConfig;
//! use coachdesk::import::ImportOrchestrator;
//! use coachdesk::models::RawRow;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ImportConfig::from_env()?;
//! let orchestrator = ImportOrchestrator::new(&config);
//!
//! let rows: Vec<RawRow> = serde_json::from_str(&std::fs::read_to_string("rows.json")?)?;
//! let result = orchestrator.process_rows(&rows)?;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `coachdesk-core`: error taxonomy, check-in models, formula constants
//! - `coachdesk-intelligence`: validator, score calculator, insights, recommendations
//! - this crate: configuration, logging, the import orchestrator and sheet header map

/// Import configuration and deployment environment
pub mod config;

/// Error types and the response envelope
pub mod errors;

/// Batch import orchestration and sheet header mapping
pub mod import;

/// Structured logging setup
pub mod logging;

/// Check-in models
pub mod models {
    pub use coachdesk_core::models::{
        normalize_key, CheckInRecord, CheckInRecordBuilder, CustomQuestion, NutritionEntry,
        RawNutrition, RawRecovery, RawRow, RawTraining, RecoveryEntry, TrainingEntry,
    };
}

pub use coachdesk_intelligence as intelligence;
