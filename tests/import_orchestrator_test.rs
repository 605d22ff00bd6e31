// ABOUTME: Integration tests for the check-in import orchestrator
// ABOUTME: Covers scoring, aggregation, custom question grouping, validation findings, and failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use coachdesk::config::ImportConfig;
use coachdesk::errors::PipelineError;
use coachdesk::import::ImportOrchestrator;
use coachdesk::intelligence::config::{MissingValuePolicy, ScoreBound};
use coachdesk::models::RawRow;
use helpers::fixtures::{date, raw_row, raw_row_with_question};

#[test]
fn test_two_week_import() {
    let rows = vec![raw_row("2025-03-03", 1, 80.0), raw_row("2025-03-10", 2, 78.0)];
    let result = ImportOrchestrator::default().process_rows(&rows).unwrap();

    assert_eq!(result.check_ins.len(), 2);
    assert_eq!(result.measurements.len(), 2);
    assert!(result.validation.is_empty());

    let first = &result.check_ins[0];
    assert_eq!(first.date, date("2025-03-03"));
    assert_eq!(first.week, 1);
    assert_eq!(first.scores.nutrition, 87);
    assert_eq!(first.scores.training, 90);
    assert_eq!(first.scores.recovery, 71);
    assert_eq!(first.scores.overall, 83);
    assert!((first.percentage_rating - 82.0).abs() < f64::EPSILON);

    assert!((result.insights.progress.weight_change - -2.0).abs() < f64::EPSILON);
    assert_eq!(result.recommendations.nutrition.len(), 2);
    assert!(result.custom_questions.is_empty());
}

#[test]
fn test_check_ins_keep_input_order() {
    let rows = vec![raw_row("2025-03-10", 2, 78.0), raw_row("2025-03-03", 1, 80.0)];
    let result = ImportOrchestrator::default().process_rows(&rows).unwrap();

    assert_eq!(result.check_ins[0].week, 2);
    assert_eq!(result.measurements[1].week, 1);
    // insights are still computed in date order
    assert_eq!(result.insights.progress.start_date, date("2025-03-03"));
}

#[test]
fn test_answers_are_labelled() {
    let rows = vec![raw_row("2025-03-03", 1, 80.0)];
    let result = ImportOrchestrator::default().process_rows(&rows).unwrap();
    let answers = &result.check_ins[0].answers;

    assert_eq!(answers.nutrition[0].question, "Calories");
    assert_eq!(answers.nutrition[0].answer, "2000");
    assert_eq!(answers.training.len(), 3);
    assert_eq!(answers.training[2].answer, "Squat up 5kg");
    assert_eq!(answers.recovery[0].question, "Sleep (hours)");
}

#[test]
fn test_measurements_are_ordered_by_name() {
    let rows = vec![raw_row("2025-03-03", 1, 80.0)];
    let result = ImportOrchestrator::default().process_rows(&rows).unwrap();
    let kinds: Vec<&str> = result.measurements[0]
        .measurements
        .iter()
        .map(|m| m.kind.as_str())
        .collect();

    assert_eq!(kinds, vec!["chest", "waist"]);
    assert!((result.measurements[0].body_fat - 18.0).abs() < f64::EPSILON);
}

#[test]
fn test_custom_questions_are_merged() {
    let rows = vec![
        raw_row_with_question("2025-03-03", 1, "nutrition", "How many meals?", "3"),
        raw_row_with_question("2025-03-10", 2, "nutrition", "How many meals?", "4"),
        raw_row_with_question("2025-03-17", 3, "general", "Anything else?", "No"),
    ];
    let result = ImportOrchestrator::default().process_rows(&rows).unwrap();

    assert_eq!(result.custom_questions.len(), 2);
    let nutrition = &result.custom_questions[0];
    assert_eq!(nutrition.category, "nutrition");
    assert_eq!(nutrition.questions.len(), 1);
    assert_eq!(nutrition.questions[0].answers, vec!["3", "4"]);
    assert_eq!(result.custom_questions[1].category, "general");
}

#[test]
fn test_missing_block_fails_whole_batch() {
    let mut broken = raw_row("2025-03-10", 2, 78.0);
    broken.nutrition = None;
    let rows = vec![raw_row("2025-03-03", 1, 80.0), broken];

    let error = ImportOrchestrator::default().process_rows(&rows).unwrap_err();
    assert_eq!(error, PipelineError::missing_field(1, "nutrition"));
    assert!(!error.is_recoverable());
}

#[test]
fn test_missing_figures_default_to_zero() {
    let mut row = raw_row("2025-03-03", 1, 80.0);
    row.nutrition.as_mut().unwrap().protein = None;
    row.week = None;

    let result = ImportOrchestrator::default().process_rows(&[row]).unwrap();
    assert_eq!(result.check_ins[0].week, 0);
    // protein contributes nothing: 0 + 24 + 30
    assert_eq!(result.check_ins[0].scores.nutrition, 54);
}

#[test]
fn test_strict_mode_rejects_missing_figures() {
    let mut row = raw_row("2025-03-03", 1, 80.0);
    row.recovery.as_mut().unwrap().sleep = None;

    let config = ImportConfig::default().with_missing_values(MissingValuePolicy::Strict);
    let error = ImportOrchestrator::new(&config)
        .process_rows(&[row])
        .unwrap_err();

    assert!(matches!(
        error,
        PipelineError::MalformedRow { row: 0, ref field, .. } if field == "recovery.sleep"
    ));
}

#[test]
fn test_upper_only_scores_can_go_negative() {
    let mut row = raw_row("2025-03-03", 1, 80.0);
    let recovery = row.recovery.as_mut().unwrap();
    recovery.sleep = Some(0.0);
    recovery.stress = Some(20.0);
    recovery.energy = Some(0.0);

    let clamped = ImportOrchestrator::default()
        .process_rows(&[row.clone()])
        .unwrap();
    assert_eq!(clamped.check_ins[0].scores.recovery, 0);

    let config = ImportConfig::default().with_score_bound(ScoreBound::UpperOnly);
    let unclamped = ImportOrchestrator::new(&config).process_rows(&[row]).unwrap();
    assert_eq!(unclamped.check_ins[0].scores.recovery, -30);
}

#[test]
fn test_unparsable_date_fails() {
    let mut row = raw_row("2025-03-03", 1, 80.0);
    row.date = Some("someday".to_owned());

    let error = ImportOrchestrator::default().process_rows(&[row]).unwrap_err();
    assert!(matches!(error, PipelineError::MalformedRow { row: 0, ref field, .. } if field == "date"));
}

#[test]
fn test_validation_findings_are_reported_not_fatal() {
    let mut too_light = raw_row("2025-03-17", 3, 20.0);
    too_light.measurements.clear();
    let rows = vec![
        raw_row("2025-03-03", 1, 80.0),
        raw_row("2025-03-10", 2, 90.0),
        too_light,
    ];

    let result = ImportOrchestrator::default().process_rows(&rows).unwrap();
    assert_eq!(result.check_ins.len(), 3);
    assert_eq!(result.validation.len(), 2);

    let warning = &result.validation[0];
    assert_eq!(warning.kind, "weight");
    assert_eq!(warning.date, date("2025-03-10"));
    assert!(warning.warning.as_deref().unwrap().contains("12.5%"));
    assert!(!warning.is_error());

    let error = &result.validation[1];
    assert_eq!(error.date, date("2025-03-17"));
    assert!(error.is_error());
    assert!(error.error.as_deref().unwrap().contains("30"));
}

#[test]
fn test_empty_batch_is_rejected() {
    let error = ImportOrchestrator::default().process_rows(&[]).unwrap_err();
    assert_eq!(error, PipelineError::empty_input("import check-ins"));
}

#[test]
fn test_result_serializes_camel_case() {
    let rows = vec![raw_row_with_question(
        "2025-03-03",
        1,
        "nutrition",
        "How many meals?",
        "3",
    )];
    let result = ImportOrchestrator::default().process_rows(&rows).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["checkIns"].is_array());
    assert!(json["customQuestions"].is_array());
    assert_eq!(json["checkIns"][0]["percentageRating"], 82.0);
    assert_eq!(json["checkIns"][0]["date"], "2025-03-03");
    assert_eq!(json["measurements"][0]["bodyFat"], 18.0);
    assert_eq!(json["measurements"][0]["measurements"][0]["type"], "chest");
    assert!(json["insights"]["progress"]["weightChange"].is_number());
}

#[test]
fn test_raw_rows_deserialize_from_camel_case_json() {
    let json = serde_json::json!([{
        "date": "2025-03-03",
        "week": 1,
        "weight": 80,
        "bodyFat": 18,
        "measurements": { "waist": 84 },
        "nutrition": { "calories": 2000, "protein": 150, "carbs": 200, "fats": 70 },
        "training": { "sessions": 4, "intensity": 8 },
        "recovery": { "sleep": 7, "stress": 6, "energy": 8 },
        "customQuestions": [
            { "question": "How many meals?", "answer": "3", "category": "nutrition" }
        ],
        "percentageRating": 80
    }]);
    let rows: Vec<RawRow> = serde_json::from_value(json).unwrap();

    let result = ImportOrchestrator::default().process_rows(&rows).unwrap();
    assert_eq!(result.check_ins[0].scores.overall, 83);
    assert_eq!(result.custom_questions[0].questions[0].answers, vec!["3"]);
}

#[test]
fn test_measurement_history_ignores_key_spelling() {
    let mut first = raw_row("2025-03-03", 1, 80.0);
    first.measurements = [("Waist".to_owned(), 80.0)].into_iter().collect();
    let mut second = raw_row("2025-03-10", 2, 80.0);
    second.measurements = [("waist".to_owned(), 100.0)].into_iter().collect();

    let result = ImportOrchestrator::default()
        .process_rows(&[first, second])
        .unwrap();

    assert_eq!(result.validation.len(), 1);
    let issue = &result.validation[0];
    assert_eq!(issue.kind, "waist");
    assert_eq!(issue.date, date("2025-03-10"));
    assert!(issue.warning.as_deref().unwrap().contains("25.0%"));
}

#[test]
fn test_body_fat_history_spans_top_level_and_named_measurements() {
    let first = raw_row("2025-03-03", 1, 80.0);
    let mut second = raw_row("2025-03-10", 2, 80.0);
    second.body_fat = None;
    second.measurements.insert("body_fat".to_owned(), 24.0);

    let result = ImportOrchestrator::default()
        .process_rows(&[first, second])
        .unwrap();

    // 18 -> 24 is a 33.3% change against the 10% body fat threshold
    assert_eq!(result.validation.len(), 1);
    assert_eq!(result.validation[0].kind, "body_fat");
    assert!(result.validation[0].warning.is_some());
}
