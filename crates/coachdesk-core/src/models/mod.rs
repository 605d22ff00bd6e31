// ABOUTME: Check-in data models for the coachdesk pipeline
// ABOUTME: Re-exports CheckInRecord, RawRow and their nested sub-records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `RawRow`: what the spreadsheet/CSV adapters hand to the importer; everything optional
//! - `CheckInRecord`: a fully typed submission produced by the importer
//!
//! Both are plain values. Nothing here is persisted or shared across calls.

mod check_in;
mod raw_row;

pub use check_in::{
    CheckInRecord, CheckInRecordBuilder, CustomQuestion, NutritionEntry, RecoveryEntry,
    TrainingEntry,
};
pub use raw_row::{RawNutrition, RawRecovery, RawRow, RawTraining};

/// Normalise a field or column name for case-insensitive lookup
///
/// Lower-cases ASCII letters and drops everything that is not an ASCII letter or
/// digit, so `Body Fat %`, `body_fat` and `bodyFat` all become `bodyfat`.
#[must_use]
pub fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
