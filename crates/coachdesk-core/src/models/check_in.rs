// ABOUTME: Typed check-in record models including CheckInRecord and CheckInRecordBuilder
// ABOUTME: Nutrition, training, recovery sub-records and custom question answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily nutrition figures reported in a check-in
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein: f64,
    /// Carbohydrates (grams)
    pub carbs: f64,
    /// Fats (grams)
    pub fats: f64,
}

/// Training volume and effort reported in a check-in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingEntry {
    /// Sessions completed in the period
    pub sessions: f64,
    /// Self-rated intensity (0-10)
    pub intensity: f64,
    /// Free-text progress note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
}

/// Recovery markers reported in a check-in
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecoveryEntry {
    /// Average sleep (hours per night)
    pub sleep: f64,
    /// Self-rated stress (0-10, higher is worse)
    pub stress: f64,
    /// Self-rated energy (0-10)
    pub energy: f64,
}

/// Answer to a question outside the fixed check-in schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomQuestion {
    /// Question text as asked
    pub question: String,
    /// Client's answer
    pub answer: String,
    /// Category used for grouping (e.g. `nutrition`, `general`)
    pub category: String,
}

impl CustomQuestion {
    /// Create a custom question answer
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
        }
    }
}

/// One check-in submission for one client on one date
///
/// Records are value objects: built once at import time and never mutated by the
/// pipeline. Use [`CheckInRecordBuilder`] to construct one field by field.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use coachdesk_core::models::CheckInRecordBuilder;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let record = CheckInRecordBuilder::new(date)
///     .week(1)
///     .weight(82.5)
///     .body_fat(18.0)
///     .measurement("waist", 84.0)
///     .build();
///
/// assert_eq!(record.week, 1);
/// assert_eq!(record.measurements.get("waist"), Some(&84.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRecord {
    /// Submission date
    pub date: NaiveDate,
    /// Coach-defined week ordinal
    pub week: u32,
    /// Body weight (kg)
    pub weight: f64,
    /// Body fat (%)
    pub body_fat: f64,
    /// Named circumference measurements (cm); keys are open-ended
    #[serde(default)]
    pub measurements: BTreeMap<String, f64>,
    /// Nutrition figures
    pub nutrition: NutritionEntry,
    /// Training figures
    pub training: TrainingEntry,
    /// Recovery figures
    pub recovery: RecoveryEntry,
    /// Answers to questions outside the fixed schema, in submission order
    #[serde(default)]
    pub custom_questions: Vec<CustomQuestion>,
    /// Overall rating supplied by the coach (0-100)
    pub percentage_rating: f64,
}

/// Builder for [`CheckInRecord`]
#[derive(Debug, Clone)]
pub struct CheckInRecordBuilder {
    record: CheckInRecord,
}

impl CheckInRecordBuilder {
    /// Start a record for the given date with every figure at zero
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            record: CheckInRecord {
                date,
                week: 0,
                weight: 0.0,
                body_fat: 0.0,
                measurements: BTreeMap::new(),
                nutrition: NutritionEntry::default(),
                training: TrainingEntry::default(),
                recovery: RecoveryEntry::default(),
                custom_questions: Vec::new(),
                percentage_rating: 0.0,
            },
        }
    }

    /// Set the week ordinal
    #[must_use]
    pub fn week(mut self, week: u32) -> Self {
        self.record.week = week;
        self
    }

    /// Set body weight
    #[must_use]
    pub fn weight(mut self, weight: f64) -> Self {
        self.record.weight = weight;
        self
    }

    /// Set body fat percentage
    #[must_use]
    pub fn body_fat(mut self, body_fat: f64) -> Self {
        self.record.body_fat = body_fat;
        self
    }

    /// Add or replace a named measurement
    #[must_use]
    pub fn measurement(mut self, name: impl Into<String>, value: f64) -> Self {
        self.record.measurements.insert(name.into(), value);
        self
    }

    /// Set nutrition figures
    #[must_use]
    pub fn nutrition(mut self, calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        self.record.nutrition = NutritionEntry {
            calories,
            protein,
            carbs,
            fats,
        };
        self
    }

    /// Set training figures
    #[must_use]
    pub fn training(mut self, sessions: f64, intensity: f64) -> Self {
        self.record.training.sessions = sessions;
        self.record.training.intensity = intensity;
        self
    }

    /// Set the training progress note
    #[must_use]
    pub fn training_progress(mut self, progress: impl Into<String>) -> Self {
        self.record.training.progress = Some(progress.into());
        self
    }

    /// Set recovery figures
    #[must_use]
    pub fn recovery(mut self, sleep: f64, stress: f64, energy: f64) -> Self {
        self.record.recovery = RecoveryEntry {
            sleep,
            stress,
            energy,
        };
        self
    }

    /// Append a custom question answer
    #[must_use]
    pub fn custom_question(mut self, question: CustomQuestion) -> Self {
        self.record.custom_questions.push(question);
        self
    }

    /// Set the coach's overall rating
    #[must_use]
    pub fn percentage_rating(mut self, rating: f64) -> Self {
        self.record.percentage_rating = rating;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> CheckInRecord {
        self.record
    }
}
