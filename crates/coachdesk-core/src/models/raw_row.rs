// ABOUTME: Raw check-in row as produced by the spreadsheet and CSV adapters
// ABOUTME: Every nested object and figure is optional so the importer decides how absence is handled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CustomQuestion;

/// Nutrition block of a raw row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNutrition {
    /// Calories (kcal)
    pub calories: Option<f64>,
    /// Protein (grams)
    pub protein: Option<f64>,
    /// Carbohydrates (grams)
    pub carbs: Option<f64>,
    /// Fats (grams)
    pub fats: Option<f64>,
}

/// Training block of a raw row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTraining {
    /// Sessions completed
    pub sessions: Option<f64>,
    /// Self-rated intensity (0-10)
    pub intensity: Option<f64>,
    /// Free-text progress note
    pub progress: Option<String>,
}

/// Recovery block of a raw row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecovery {
    /// Sleep (hours)
    pub sleep: Option<f64>,
    /// Self-rated stress (0-10)
    pub stress: Option<f64>,
    /// Self-rated energy (0-10)
    pub energy: Option<f64>,
}

/// One row of check-in data before validation
///
/// Field names follow the JSON contract of the external adapters (`bodyFat`,
/// `customQuestions`, `percentageRating`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRow {
    /// Submission date, `YYYY-MM-DD` (also accepts `MM/DD/YYYY` and RFC 3339 timestamps)
    pub date: Option<String>,
    /// Coach-defined week ordinal
    pub week: Option<u32>,
    /// Body weight (kg)
    pub weight: Option<f64>,
    /// Body fat (%)
    pub body_fat: Option<f64>,
    /// Named circumference measurements (cm)
    #[serde(default)]
    pub measurements: BTreeMap<String, f64>,
    /// Nutrition block
    pub nutrition: Option<RawNutrition>,
    /// Training block
    pub training: Option<RawTraining>,
    /// Recovery block
    pub recovery: Option<RawRecovery>,
    /// Custom question answers
    #[serde(default)]
    pub custom_questions: Vec<CustomQuestion>,
    /// Coach-supplied overall rating (0-100)
    pub percentage_rating: Option<f64>,
}
