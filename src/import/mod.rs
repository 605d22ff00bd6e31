// ABOUTME: Import orchestrator turning raw check-in rows into a scored, aggregated envelope
// ABOUTME: All-or-nothing batch: one malformed row fails the import, range findings are reported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Check-in Import
//!
//! [`ImportOrchestrator::process_rows`] runs the whole pipeline over one batch:
//!
//! 1. Every [`RawRow`] becomes a [`CheckInRecord`]. A missing nested block or an
//!    unparsable date fails the batch; absent figures follow the configured
//!    [`MissingValuePolicy`](coachdesk_intelligence::config::MissingValuePolicy).
//! 2. Each record is scored and projected into a measurement entry.
//! 3. Weight, body fat and named measurements are validated against the previous
//!    check-in carrying the same measurement. Findings are reported, not fatal.
//! 4. Insights and recommendations are computed once over the batch.
//! 5. Custom question answers are grouped by category.

mod header_map;
mod result;

pub use header_map::{HeaderMap, SheetTable};
pub use result::{
    CheckInAnswers, CheckInEntry, CustomQuestionGroup, GroupedQuestion, ImportResult,
    LabelledAnswer, MeasurementEntry, MeasurementIssue, MeasurementPair,
};

use chrono::{DateTime, NaiveDate};
use coachdesk_core::constants::measurements;
use coachdesk_core::errors::PipelineError;
use coachdesk_core::models::{
    normalize_key, CheckInRecord, CustomQuestion, NutritionEntry, RawRow, RecoveryEntry,
    TrainingEntry,
};
use coachdesk_intelligence::config::{IntelligenceConfig, MissingValuePolicy};
use coachdesk_intelligence::{
    InsightGenerator, MeasurementValidator, RecommendationEngine, ScoreCalculator,
};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

use crate::config::ImportConfig;

/// Date layouts accepted in the `date` field, tried in order
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Runs the import pipeline with an explicit configuration
#[derive(Debug, Clone)]
pub struct ImportOrchestrator {
    missing_values: MissingValuePolicy,
    validator: MeasurementValidator,
    calculator: ScoreCalculator,
    insights: InsightGenerator,
    recommendations: RecommendationEngine,
}

impl Default for ImportOrchestrator {
    fn default() -> Self {
        Self::new(&ImportConfig::default())
    }
}

impl ImportOrchestrator {
    /// Build every pipeline component from the configuration
    #[must_use]
    pub fn new(config: &ImportConfig) -> Self {
        Self::from_intelligence(&config.intelligence)
    }

    /// Build from the intelligence configuration alone
    #[must_use]
    pub fn from_intelligence(config: &IntelligenceConfig) -> Self {
        Self {
            missing_values: config.scoring.missing_values,
            validator: MeasurementValidator::new(config.measurement_rules.clone()),
            calculator: ScoreCalculator::with_config(config.scoring),
            insights: InsightGenerator::with_config(config.trends),
            recommendations: RecommendationEngine::with_messages(config.recommendations.clone()),
        }
    }

    /// Import a batch of raw rows
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyInput`] for an empty batch and
    /// [`PipelineError::MalformedRow`] for the first row that cannot be converted
    #[instrument(skip_all, fields(rows = rows.len()))]
    pub fn process_rows(&self, rows: &[RawRow]) -> Result<ImportResult, PipelineError> {
        if rows.is_empty() {
            return Err(PipelineError::empty_input("import check-ins"));
        }
        info!("starting check-in import");

        let records = rows
            .iter()
            .enumerate()
            .map(|(index, row)| self.to_record(index, row))
            .collect::<Result<Vec<_>, _>>()?;

        let check_ins = records.iter().map(|r| self.check_in_entry(r)).collect();
        let measurement_entries = records.iter().map(measurement_entry).collect();
        let validation = self.collect_issues(rows, &records);

        let insights = self.insights.generate_insights(&records)?;
        let recommendations = self
            .recommendations
            .recommend_from_patterns(&insights.patterns);
        let custom_questions = group_custom_questions(&records);

        info!(
            check_ins = records.len(),
            issues = validation.len(),
            question_categories = custom_questions.len(),
            "check-in import complete"
        );

        Ok(ImportResult {
            check_ins,
            measurements: measurement_entries,
            insights,
            recommendations,
            custom_questions,
            validation,
        })
    }

    /// Import a header-and-cells sheet export
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MalformedRow`] for unparsable cells, otherwise the
    /// same errors as [`Self::process_rows`]
    pub fn process_sheet(&self, table: &SheetTable) -> Result<ImportResult, PipelineError> {
        let rows = HeaderMap::new(&table.headers).rows_from(&table.rows)?;
        self.process_rows(&rows)
    }

    /// Convert one raw row into a typed record
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MalformedRow`] when a nested block or the date is
    /// missing, the date cannot be parsed, or (in strict mode) a figure is absent
    pub fn to_record(&self, index: usize, row: &RawRow) -> Result<CheckInRecord, PipelineError> {
        let policy = self.missing_values;

        let date = parse_date(index, row.date.as_deref())?;
        let week = match row.week {
            Some(week) => week,
            None if policy.is_strict() => return Err(PipelineError::missing_field(index, "week")),
            None => 0,
        };

        let raw_nutrition = row
            .nutrition
            .as_ref()
            .ok_or_else(|| PipelineError::missing_field(index, "nutrition"))?;
        let raw_training = row
            .training
            .as_ref()
            .ok_or_else(|| PipelineError::missing_field(index, "training"))?;
        let raw_recovery = row
            .recovery
            .as_ref()
            .ok_or_else(|| PipelineError::missing_field(index, "recovery"))?;

        let nutrition = NutritionEntry {
            calories: policy.resolve(raw_nutrition.calories, index, "nutrition.calories")?,
            protein: policy.resolve(raw_nutrition.protein, index, "nutrition.protein")?,
            carbs: policy.resolve(raw_nutrition.carbs, index, "nutrition.carbs")?,
            fats: policy.resolve(raw_nutrition.fats, index, "nutrition.fats")?,
        };
        let training = TrainingEntry {
            sessions: policy.resolve(raw_training.sessions, index, "training.sessions")?,
            intensity: policy.resolve(raw_training.intensity, index, "training.intensity")?,
            progress: raw_training.progress.clone(),
        };
        let recovery = RecoveryEntry {
            sleep: policy.resolve(raw_recovery.sleep, index, "recovery.sleep")?,
            stress: policy.resolve(raw_recovery.stress, index, "recovery.stress")?,
            energy: policy.resolve(raw_recovery.energy, index, "recovery.energy")?,
        };

        debug!(row = index, %date, week, "converted check-in row");

        Ok(CheckInRecord {
            date,
            week,
            weight: policy.resolve(row.weight, index, "weight")?,
            body_fat: policy.resolve(row.body_fat, index, "bodyFat")?,
            measurements: row.measurements.clone(),
            nutrition,
            training,
            recovery,
            custom_questions: row.custom_questions.clone(),
            percentage_rating: policy.resolve(row.percentage_rating, index, "percentageRating")?,
        })
    }

    fn check_in_entry(&self, record: &CheckInRecord) -> CheckInEntry {
        CheckInEntry {
            date: record.date,
            week: record.week,
            scores: self.calculator.score_record(record),
            percentage_rating: record.percentage_rating,
            answers: CheckInAnswers {
                nutrition: nutrition_answers(&record.nutrition),
                training: training_answers(&record.training),
                recovery: recovery_answers(&record.recovery),
            },
        }
    }

    /// Validate the values each row actually supplied, in date order
    ///
    /// The previous value for a measurement is the last one supplied by an earlier
    /// check-in, so a row that skipped a measurement does not reset its history.
    fn collect_issues(&self, rows: &[RawRow], records: &[CheckInRecord]) -> Vec<MeasurementIssue> {
        let mut order: Vec<usize> = (0..records.len()).collect();
        order.sort_by_key(|&i| records[i].date);

        // keyed like the rule table, so `Waist` and `waist` share one history
        let mut last_seen: HashMap<String, f64> = HashMap::new();
        let mut issues = Vec::new();

        for index in order {
            let row = &rows[index];
            let date = records[index].date;

            let supplied = [
                (measurements::WEIGHT, row.weight),
                (measurements::BODY_FAT, row.body_fat),
            ]
            .into_iter()
            .filter_map(|(kind, value)| value.map(|v| (kind, v)))
            .chain(row.measurements.iter().map(|(k, v)| (k.as_str(), *v)));

            for (kind, value) in supplied {
                let key = normalize_key(kind);
                let previous = last_seen.get(&key).copied();
                let result = self.validator.validate(kind, value, previous);

                if result.has_findings() {
                    warn!(
                        row = index,
                        %date,
                        kind,
                        value,
                        error = result.error.as_deref(),
                        warning = result.warning.as_deref(),
                        "measurement flagged during import"
                    );
                    issues.push(MeasurementIssue {
                        date,
                        kind: kind.to_owned(),
                        value,
                        warning: result.warning,
                        error: result.error,
                    });
                }

                // rejected values do not become the baseline for the next check-in
                if result.is_valid {
                    last_seen.insert(key, value);
                }
            }
        }

        issues
    }
}

fn parse_date(index: usize, value: Option<&str>) -> Result<NaiveDate, PipelineError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| PipelineError::missing_field(index, "date"))?;

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .ok_or_else(|| {
            PipelineError::invalid_field(index, "date", format!("unparsable date `{raw}` in"))
        })
}

fn measurement_entry(record: &CheckInRecord) -> MeasurementEntry {
    MeasurementEntry {
        date: record.date,
        week: record.week,
        weight: record.weight,
        body_fat: record.body_fat,
        measurements: record
            .measurements
            .iter()
            .map(|(kind, value)| MeasurementPair {
                kind: kind.clone(),
                value: *value,
            })
            .collect(),
    }
}

fn nutrition_answers(nutrition: &NutritionEntry) -> Vec<LabelledAnswer> {
    vec![
        LabelledAnswer::new("Calories", nutrition.calories),
        LabelledAnswer::new("Protein (g)", nutrition.protein),
        LabelledAnswer::new("Carbs (g)", nutrition.carbs),
        LabelledAnswer::new("Fats (g)", nutrition.fats),
    ]
}

fn training_answers(training: &TrainingEntry) -> Vec<LabelledAnswer> {
    let mut answers = vec![
        LabelledAnswer::new("Sessions", training.sessions),
        LabelledAnswer::new("Intensity (1-10)", training.intensity),
    ];
    if let Some(progress) = &training.progress {
        answers.push(LabelledAnswer::new("Progress", progress));
    }
    answers
}

fn recovery_answers(recovery: &RecoveryEntry) -> Vec<LabelledAnswer> {
    vec![
        LabelledAnswer::new("Sleep (hours)", recovery.sleep),
        LabelledAnswer::new("Stress (1-10)", recovery.stress),
        LabelledAnswer::new("Energy (1-10)", recovery.energy),
    ]
}

/// Group answers by category, then by exact question text, keeping first-seen order
fn group_custom_questions(records: &[CheckInRecord]) -> Vec<CustomQuestionGroup> {
    let mut groups: Vec<CustomQuestionGroup> = Vec::new();

    for CustomQuestion {
        question,
        answer,
        category,
    } in records.iter().flat_map(|r| &r.custom_questions)
    {
        let group_index = if let Some(i) = groups.iter().position(|g| &g.category == category) {
            i
        } else {
            groups.push(CustomQuestionGroup {
                category: category.clone(),
                questions: Vec::new(),
            });
            groups.len() - 1
        };
        let questions = &mut groups[group_index].questions;

        if let Some(existing) = questions.iter_mut().find(|q| &q.question == question) {
            existing.answers.push(answer.clone());
        } else {
            questions.push(GroupedQuestion {
                question: question.clone(),
                answers: vec![answer.clone()],
            });
        }
    }

    groups
}
