// ABOUTME: Integration tests for environment-driven import configuration
// ABOUTME: Covers defaults, COACHDESK_* overrides, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coachdesk::config::{Environment, ImportConfig};
use coachdesk::intelligence::config::{env_vars, MissingValuePolicy, ScoreBound};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 10] = [
    "ENVIRONMENT",
    env_vars::SCORE_BOUND,
    env_vars::STRICT_MISSING_VALUES,
    env_vars::TARGET_PROTEIN_G,
    env_vars::TARGET_CARBS_G,
    env_vars::TARGET_FATS_G,
    env_vars::TARGET_WEEKLY_SESSIONS,
    env_vars::TARGET_SLEEP_HOURS,
    env_vars::TREND_WEIGHT_THRESHOLD,
    env_vars::TREND_BODY_FAT_THRESHOLD,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ImportConfig::from_env().unwrap();

    assert_eq!(config, ImportConfig::default());
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.intelligence.scoring.bound, ScoreBound::Clamped);
    assert_eq!(
        config.intelligence.scoring.missing_values,
        MissingValuePolicy::ZeroDefault
    );
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var(env_vars::SCORE_BOUND, "upper_only");
    env::set_var(env_vars::STRICT_MISSING_VALUES, "true");
    env::set_var(env_vars::TARGET_PROTEIN_G, "160");
    env::set_var(env_vars::TREND_WEIGHT_THRESHOLD, "0.5");

    let config = ImportConfig::from_env().unwrap();
    clear_env();

    assert!(config.environment.is_production());
    let scoring = config.intelligence.scoring;
    assert_eq!(scoring.bound, ScoreBound::UpperOnly);
    assert!(scoring.missing_values.is_strict());
    assert!((scoring.targets.protein_g - 160.0).abs() < f64::EPSILON);
    assert!((config.intelligence.trends.weight_stable_threshold - 0.5).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_env();
    env::set_var(env_vars::TARGET_SLEEP_HOURS, "eight");

    let result = ImportConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_non_positive_target_is_rejected() {
    clear_env();
    env::set_var(env_vars::TARGET_WEEKLY_SESSIONS, "0");

    let result = ImportConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
fn test_builder_overrides() {
    let config = ImportConfig::default()
        .with_score_bound(ScoreBound::UpperOnly)
        .with_missing_values(MissingValuePolicy::Strict);

    assert_eq!(config.intelligence.scoring.bound, ScoreBound::UpperOnly);
    assert!(config.intelligence.scoring.missing_values.is_strict());
}
