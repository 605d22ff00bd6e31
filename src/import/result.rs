// ABOUTME: Response envelope produced by a check-in import
// ABOUTME: Scored check-ins, measurement projection, insights, recommendations, grouped questions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use coachdesk_intelligence::{CategoryScore, InsightSummary, Recommendations};
use serde::{Deserialize, Serialize};

/// Result of importing a batch of raw rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// One entry per input row, in input order
    pub check_ins: Vec<CheckInEntry>,
    /// Measurement projection, parallel to `check_ins`
    pub measurements: Vec<MeasurementEntry>,
    /// Aggregate over the whole batch
    pub insights: InsightSummary,
    /// Advice derived from the batch averages
    pub recommendations: Recommendations,
    /// Custom question answers grouped by category
    pub custom_questions: Vec<CustomQuestionGroup>,
    /// Out-of-range values and outlier warnings, in date order
    pub validation: Vec<MeasurementIssue>,
}

/// A question label paired with the client's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelledAnswer {
    /// Display label
    pub question: String,
    /// Answer as displayed
    pub answer: String,
}

impl LabelledAnswer {
    pub(super) fn new(question: &str, answer: impl ToString) -> Self {
        Self {
            question: question.to_owned(),
            answer: answer.to_string(),
        }
    }
}

/// Fixed-schema answers of one check-in, per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInAnswers {
    /// Nutrition answers
    pub nutrition: Vec<LabelledAnswer>,
    /// Training answers
    pub training: Vec<LabelledAnswer>,
    /// Recovery answers
    pub recovery: Vec<LabelledAnswer>,
}

/// One scored check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInEntry {
    /// Submission date
    pub date: NaiveDate,
    /// Week ordinal
    pub week: u32,
    /// Category scores
    pub scores: CategoryScore,
    /// Coach-supplied overall rating
    pub percentage_rating: f64,
    /// Labelled answers
    pub answers: CheckInAnswers,
}

/// One named measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPair {
    /// Measurement name
    #[serde(rename = "type")]
    pub kind: String,
    /// Value (cm)
    pub value: f64,
}

/// Body composition of one check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementEntry {
    /// Submission date
    pub date: NaiveDate,
    /// Week ordinal
    pub week: u32,
    /// Body weight
    pub weight: f64,
    /// Body fat percentage
    pub body_fat: f64,
    /// Named measurements ordered by name
    pub measurements: Vec<MeasurementPair>,
}

/// A validator finding for one value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementIssue {
    /// Date of the check-in carrying the value
    pub date: NaiveDate,
    /// Measurement type
    #[serde(rename = "type")]
    pub kind: String,
    /// Offending value
    pub value: f64,
    /// Outlier warning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Range error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MeasurementIssue {
    /// Whether the value was rejected rather than merely flagged
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A custom question with every answer given to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedQuestion {
    /// Question text
    pub question: String,
    /// Answers in input order
    pub answers: Vec<String>,
}

/// Custom questions of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomQuestionGroup {
    /// Category name
    pub category: String,
    /// Distinct questions in first-seen order
    pub questions: Vec<GroupedQuestion>,
}
