// ABOUTME: Configuration module for coachdesk-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (scoring, measurement rules, trends, messages)
pub mod intelligence;

pub use intelligence::{
    env_vars, ConfigError, IntelligenceConfig, MeasurementRule, MeasurementRules,
    MissingValuePolicy, RecommendationMessages, ScoreBound, ScoreTargets, ScoringConfig,
    TrendConfig, AVERAGE_PLACEHOLDER,
};
