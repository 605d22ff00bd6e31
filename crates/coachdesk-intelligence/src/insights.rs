// ABOUTME: Aggregates a check-in history into progress deltas, trend series, and category averages
// ABOUTME: Stable date ordering; trends classified by average per-step change against a threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight generation over a client's check-in history
//!
//! [`InsightGenerator::generate_insights`] sorts a copy of the records by date
//! (stable, so same-day submissions keep their input order) and derives:
//!
//! - [`Progress`]: first and last date, weight and body fat change between them
//! - [`Trends`]: `{date, value}` series for weight and body fat with a direction
//! - [`Patterns`]: arithmetic means over all records per category

use chrono::NaiveDate;
use coachdesk_core::errors::PipelineError;
use coachdesk_core::models::CheckInRecord;
use serde::{Deserialize, Serialize};
use std::slice;
use tracing::debug;

use crate::config::TrendConfig;

/// Metrics that get a trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackedMetric {
    /// Body weight
    Weight,
    /// Body fat percentage
    BodyFat,
}

impl TrackedMetric {
    /// Every tracked metric, in output order
    pub const ALL: [Self; 2] = [Self::Weight, Self::BodyFat];

    /// Wire name of the metric
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::BodyFat => "bodyFat",
        }
    }

    /// Read this metric from a record
    #[must_use]
    pub const fn value_of(&self, record: &CheckInRecord) -> f64 {
        match self {
            Self::Weight => record.weight,
            Self::BodyFat => record.body_fat,
        }
    }

    const fn stable_threshold(self, config: &TrendConfig) -> f64 {
        match self {
            Self::Weight => config.weight_stable_threshold,
            Self::BodyFat => config.body_fat_stable_threshold,
        }
    }
}

/// Direction of a metric across the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Average step above the threshold
    Increasing,
    /// Average step below the negative threshold
    Decreasing,
    /// Within the threshold either way
    Stable,
}

impl TrendDirection {
    /// Classify an average per-step change
    #[must_use]
    pub fn classify(average_change: f64, threshold: f64) -> Self {
        if average_change > threshold {
            Self::Increasing
        } else if average_change < -threshold {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

/// One point of a trend series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Check-in date
    pub date: NaiveDate,
    /// Metric value on that date
    pub value: f64,
}

/// Date-ordered series for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrend {
    /// Metric the series tracks
    pub metric: TrackedMetric,
    /// Points in ascending date order
    pub points: Vec<TrendPoint>,
    /// Overall direction
    pub direction: TrendDirection,
    /// `(last - first) / (n - 1)`; zero for a single point
    pub average_change: f64,
}

impl MetricTrend {
    fn from_sorted(metric: TrackedMetric, sorted: &[&CheckInRecord], config: &TrendConfig) -> Self {
        let points: Vec<TrendPoint> = sorted
            .iter()
            .map(|record| TrendPoint {
                date: record.date,
                value: metric.value_of(record),
            })
            .collect();

        let average_change = match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() > 1 => {
                (last.value - first.value) / (points.len() - 1) as f64
            }
            _ => 0.0,
        };

        Self {
            metric,
            direction: TrendDirection::classify(average_change, metric.stable_threshold(config)),
            average_change,
            points,
        }
    }

    /// Iterate the series in date order; each call starts from the beginning
    pub fn iter(&self) -> slice::Iter<'_, TrendPoint> {
        self.points.iter()
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<'a> IntoIterator for &'a MetricTrend {
    type Item = &'a TrendPoint;
    type IntoIter = slice::Iter<'a, TrendPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Trend series for every tracked metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    /// Weight series
    pub weight: MetricTrend,
    /// Body fat series
    pub body_fat: MetricTrend,
}

impl Trends {
    /// Series for a metric
    #[must_use]
    pub const fn get(&self, metric: TrackedMetric) -> &MetricTrend {
        match metric {
            TrackedMetric::Weight => &self.weight,
            TrackedMetric::BodyFat => &self.body_fat,
        }
    }
}

/// Change between the first and last check-in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Earliest check-in date
    pub start_date: NaiveDate,
    /// Latest check-in date
    pub end_date: NaiveDate,
    /// `last.weight - first.weight`
    pub weight_change: f64,
    /// `last.body_fat - first.body_fat`
    pub body_fat_change: f64,
}

/// Nutrition averages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPattern {
    /// Mean calories
    pub average_calories: f64,
    /// Mean protein (g)
    pub average_protein: f64,
    /// Mean carbohydrates (g)
    pub average_carbs: f64,
    /// Mean fats (g)
    pub average_fats: f64,
}

/// Training averages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPattern {
    /// Mean sessions
    pub average_sessions: f64,
    /// Mean intensity
    pub average_intensity: f64,
}

/// Recovery averages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryPattern {
    /// Mean sleep (hours)
    pub average_sleep: f64,
    /// Mean stress
    pub average_stress: f64,
    /// Mean energy
    pub average_energy: f64,
}

/// Per-category means over every record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patterns {
    /// Nutrition means
    pub nutrition: NutritionPattern,
    /// Training means
    pub training: TrainingPattern,
    /// Recovery means
    pub recovery: RecoveryPattern,
}

impl Patterns {
    /// Compute means over the records
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyInput`] for an empty slice
    pub fn from_records(records: &[CheckInRecord]) -> Result<Self, PipelineError> {
        if records.is_empty() {
            return Err(PipelineError::empty_input("compute patterns"));
        }
        Ok(Self::from_iter_nonempty(records.iter()))
    }

    fn from_iter_nonempty<'a>(records: impl Iterator<Item = &'a CheckInRecord> + Clone) -> Self {
        let mean = |field: fn(&CheckInRecord) -> f64| {
            let (sum, count) = records
                .clone()
                .fold((0.0, 0_usize), |(sum, count), r| (sum + field(r), count + 1));
            sum / count as f64
        };

        Self {
            nutrition: NutritionPattern {
                average_calories: mean(|r| r.nutrition.calories),
                average_protein: mean(|r| r.nutrition.protein),
                average_carbs: mean(|r| r.nutrition.carbs),
                average_fats: mean(|r| r.nutrition.fats),
            },
            training: TrainingPattern {
                average_sessions: mean(|r| r.training.sessions),
                average_intensity: mean(|r| r.training.intensity),
            },
            recovery: RecoveryPattern {
                average_sleep: mean(|r| r.recovery.sleep),
                average_stress: mean(|r| r.recovery.stress),
                average_energy: mean(|r| r.recovery.energy),
            },
        }
    }
}

/// Aggregate view of a check-in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    /// First-to-last deltas
    pub progress: Progress,
    /// Per-metric series
    pub trends: Trends,
    /// Per-category means
    pub patterns: Patterns,
}

/// Builds [`InsightSummary`] values
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    config: TrendConfig,
}

impl InsightGenerator {
    /// Generator with default trend thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator with explicit trend thresholds
    #[must_use]
    pub const fn with_config(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Aggregate a check-in history
    ///
    /// The input is not reordered; sorting happens on a view of references.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyInput`] when `records` is empty
    pub fn generate_insights(&self, records: &[CheckInRecord]) -> Result<InsightSummary, PipelineError> {
        let mut sorted: Vec<&CheckInRecord> = records.iter().collect();
        // sort_by_key is stable
        sorted.sort_by_key(|record| record.date);

        let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
            return Err(PipelineError::empty_input("generate insights"));
        };

        let progress = Progress {
            start_date: first.date,
            end_date: last.date,
            weight_change: last.weight - first.weight,
            body_fat_change: last.body_fat - first.body_fat,
        };

        let trends = Trends {
            weight: MetricTrend::from_sorted(TrackedMetric::Weight, &sorted, &self.config),
            body_fat: MetricTrend::from_sorted(TrackedMetric::BodyFat, &sorted, &self.config),
        };

        let patterns = Patterns::from_iter_nonempty(sorted.iter().copied());

        debug!(
            records = records.len(),
            start = %progress.start_date,
            end = %progress.end_date,
            weight_change = progress.weight_change,
            weight_trend = ?trends.weight.direction,
            "generated insights"
        );

        Ok(InsightSummary {
            progress,
            trends,
            patterns,
        })
    }
}
