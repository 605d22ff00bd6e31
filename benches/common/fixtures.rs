// ABOUTME: Benchmark fixtures generating deterministic check-in histories
// ABOUTME: Typed records for the intelligence components and raw rows for the import pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating check-in data.
//!
//! Values drift week over week so trends and outlier checks have work to do.

use chrono::{Duration, NaiveDate};
use coachdesk::models::{
    CheckInRecord, CheckInRecordBuilder, CustomQuestion, RawNutrition, RawRecovery, RawRow,
    RawTraining,
};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One quarter of weekly check-ins
    Quarter,
    /// One year of weekly check-ins
    Year,
    /// A coach's full roster export
    Roster,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Quarter => 13,
            Self::Year => 52,
            Self::Roster => 1_000,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::Roster => "roster",
        }
    }
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default()
}

#[allow(clippy::cast_precision_loss)]
fn figure(index: usize, modulus: usize, scale: f64) -> f64 {
    (index % modulus) as f64 * scale
}

/// Typed records, one per week
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_records(size: HistorySize) -> Vec<CheckInRecord> {
    (0..size.count())
        .map(|index| {
            let date = start_date() + Duration::weeks(index as i64);
            CheckInRecordBuilder::new(date)
                .week(index as u32 + 1)
                .weight(82.0 - figure(index, 20, 0.2))
                .body_fat(20.0 - figure(index, 10, 0.15))
                .measurement("waist", 86.0 - figure(index, 8, 0.25))
                .nutrition(
                    1900.0 + figure(index, 5, 50.0),
                    140.0 + figure(index, 7, 5.0),
                    190.0 + figure(index, 6, 10.0),
                    60.0 + figure(index, 4, 3.0),
                )
                .training(2.0 + figure(index, 4, 1.0), 6.0 + figure(index, 5, 0.5))
                .recovery(6.5 + figure(index, 4, 0.5), 3.0 + figure(index, 5, 1.0), 7.0)
                .custom_question(CustomQuestion::new(
                    "How many meals?",
                    (3 + index % 3).to_string(),
                    "nutrition",
                ))
                .percentage_rating(70.0 + figure(index, 30, 1.0))
                .build()
        })
        .collect()
}

/// Raw rows equivalent to [`generate_records`], with every fifth row spiking in weight
#[must_use]
pub fn generate_rows(size: HistorySize) -> Vec<RawRow> {
    generate_records(size)
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let weight = if index % 5 == 4 {
                record.weight * 1.1
            } else {
                record.weight
            };
            RawRow {
                date: Some(record.date.format("%Y-%m-%d").to_string()),
                week: Some(record.week),
                weight: Some(weight),
                body_fat: Some(record.body_fat),
                measurements: record.measurements,
                nutrition: Some(RawNutrition {
                    calories: Some(record.nutrition.calories),
                    protein: Some(record.nutrition.protein),
                    carbs: Some(record.nutrition.carbs),
                    fats: Some(record.nutrition.fats),
                }),
                training: Some(RawTraining {
                    sessions: Some(record.training.sessions),
                    intensity: Some(record.training.intensity),
                    progress: None,
                }),
                recovery: Some(RawRecovery {
                    sleep: Some(record.recovery.sleep),
                    stress: Some(record.recovery.stress),
                    energy: Some(record.recovery.energy),
                }),
                custom_questions: record.custom_questions,
                percentage_rating: Some(record.percentage_rating),
            }
        })
        .collect()
}
