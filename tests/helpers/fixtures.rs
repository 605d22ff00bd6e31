// ABOUTME: Check-in fixtures for integration tests
// ABOUTME: Typed records, raw JSON-shaped rows, and a sample sheet export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use chrono::NaiveDate;
use coachdesk::import::SheetTable;
use coachdesk::models::{
    CheckInRecord, CheckInRecordBuilder, CustomQuestion, RawNutrition, RawRecovery, RawRow,
    RawTraining,
};

/// Parse a `YYYY-MM-DD` literal
pub fn date(ymd: &str) -> NaiveDate {
    NaiveDate::parse_from_str(ymd, "%Y-%m-%d").unwrap()
}

/// A complete record with typical figures
pub fn record(ymd: &str, weight: f64, body_fat: f64) -> CheckInRecord {
    CheckInRecordBuilder::new(date(ymd))
        .week(1)
        .weight(weight)
        .body_fat(body_fat)
        .nutrition(2000.0, 150.0, 200.0, 70.0)
        .training(4.0, 8.0)
        .recovery(7.0, 6.0, 8.0)
        .percentage_rating(80.0)
        .build()
}

/// A complete raw row with typical figures
pub fn raw_row(ymd: &str, week: u32, weight: f64) -> RawRow {
    RawRow {
        date: Some(ymd.to_owned()),
        week: Some(week),
        weight: Some(weight),
        body_fat: Some(18.0),
        measurements: [("waist".to_owned(), 84.0), ("chest".to_owned(), 102.0)]
            .into_iter()
            .collect(),
        nutrition: Some(RawNutrition {
            calories: Some(2000.0),
            protein: Some(150.0),
            carbs: Some(200.0),
            fats: Some(70.0),
        }),
        training: Some(RawTraining {
            sessions: Some(4.0),
            intensity: Some(8.0),
            progress: Some("Squat up 5kg".to_owned()),
        }),
        recovery: Some(RawRecovery {
            sleep: Some(7.0),
            stress: Some(6.0),
            energy: Some(8.0),
        }),
        custom_questions: Vec::new(),
        percentage_rating: Some(82.0),
    }
}

/// A raw row carrying one custom question answer
pub fn raw_row_with_question(
    ymd: &str,
    week: u32,
    category: &str,
    question: &str,
    answer: &str,
) -> RawRow {
    let mut row = raw_row(ymd, week, 80.0);
    row.custom_questions
        .push(CustomQuestion::new(question, answer, category));
    row
}

/// Two-week sheet export with mixed header spellings and custom questions
pub fn sample_sheet() -> SheetTable {
    let headers = [
        "Date",
        "Week",
        "Weight",
        "Body Fat %",
        "Waist",
        "Calories",
        "Protein",
        "Carbs",
        "Fats",
        "Sessions",
        "Intensity",
        "Sleep",
        "Stress",
        "Energy",
        "Rating",
        "Nutrition: How many meals?",
        "Anything else?",
    ];
    let rows = [
        [
            "2025-03-03", "1", "80", "18.5%", "84", "2000", "150", "200", "70", "4", "8", "7",
            "6", "8", "80", "3", "Felt good",
        ],
        [
            "2025-03-10", "2", "78", "18", "83", "2,100", "160", "210", "65", "3", "7", "7.5",
            "5", "7", "85", "4", "",
        ],
    ];

    SheetTable {
        headers: headers.iter().map(|h| (*h).to_owned()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|c| (*c).to_owned()).collect())
            .collect(),
    }
}
