// ABOUTME: Check-in intelligence engine for the coachdesk platform
// ABOUTME: Measurement validation, category scoring, insight/trend aggregation, recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coachdesk Intelligence
//!
//! Pure, synchronous functions over check-in records. Nothing here performs I/O or
//! keeps state between calls; every component is built from an explicit
//! configuration value handed in by the caller.
//!
//! Components, in dependency order:
//!
//! 1. [`MeasurementValidator`] - range and outlier checks for one measurement
//! 2. [`ScoreCalculator`] - 0-100 category scores from nutrition, training, recovery
//! 3. [`InsightGenerator`] - progress deltas, trend series, category averages
//! 4. [`RecommendationEngine`] - canned advice interpolated with the averages

/// Intelligence configuration (scoring policy, measurement rules, trends, messages)
pub mod config;

/// Range and outlier checks for body measurements
pub mod measurement_validator;

/// Category score formulas
pub mod scoring;

/// Progress, trend, and pattern aggregation over a check-in history
pub mod insights;

/// Template-based recommendations from aggregate averages
pub mod recommendation_engine;

pub use config::IntelligenceConfig;
pub use insights::{
    InsightGenerator, InsightSummary, MetricTrend, NutritionPattern, Patterns, Progress,
    RecoveryPattern, TrackedMetric, TrainingPattern, TrendDirection, TrendPoint, Trends,
};
pub use measurement_validator::{MeasurementValidator, ValidationResult};
pub use recommendation_engine::{RecommendationEngine, Recommendations};
pub use scoring::{round_half_up, CategoryScore, ScoreCalculator};
