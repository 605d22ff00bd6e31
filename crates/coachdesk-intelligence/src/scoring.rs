// ABOUTME: Category score formulas for nutrition, training, and recovery
// ABOUTME: Fixed linear weights against configurable targets, bounded and rounded half-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Category Scores
//!
//! | Category  | Formula (before bounding)                                        |
//! |-----------|------------------------------------------------------------------|
//! | Nutrition | `protein/180*40 + carbs/250*30 + fats/70*30`                     |
//! | Training  | `sessions/4*50 + intensity/10*50`                                |
//! | Recovery  | `sleep/8*40 + (10-stress)/10*30 + energy/10*30`                  |
//!
//! The divisors are [`ScoreTargets`](crate::config::ScoreTargets); the weights are
//! fixed. Calories do not contribute to the nutrition score. Every score is capped
//! at 100 and, in the default [`ScoreBound::Clamped`] mode, floored at 0.

use coachdesk_core::constants::{score_targets, score_weights};
use coachdesk_core::models::{CheckInRecord, NutritionEntry, RecoveryEntry, TrainingEntry};
use serde::{Deserialize, Serialize};

use crate::config::{ScoreBound, ScoringConfig};

/// Round halves toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`)
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Scores for one check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    /// Nutrition score
    pub nutrition: i32,
    /// Training score
    pub training: i32,
    /// Recovery score
    pub recovery: i32,
    /// Rounded mean of the three category scores
    pub overall: i32,
}

impl CategoryScore {
    /// Combine three category scores
    #[must_use]
    pub fn new(nutrition: i32, training: i32, recovery: i32) -> Self {
        let mean = (f64::from(nutrition) + f64::from(training) + f64::from(recovery)) / 3.0;
        Self {
            nutrition,
            training,
            recovery,
            overall: round_half_up(mean),
        }
    }
}

/// Computes category scores
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    config: ScoringConfig,
}

impl ScoreCalculator {
    /// Calculator with default targets and clamped bounding
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with explicit configuration
    #[must_use]
    pub const fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Nutrition score from protein, carbohydrate and fat intake
    #[must_use]
    pub fn nutrition_score(&self, nutrition: &NutritionEntry) -> i32 {
        let targets = &self.config.targets;
        let raw = nutrition.protein / targets.protein_g * score_weights::PROTEIN
            + nutrition.carbs / targets.carbs_g * score_weights::CARBS
            + nutrition.fats / targets.fats_g * score_weights::FATS;
        self.finish(raw)
    }

    /// Training score from session count and intensity
    #[must_use]
    pub fn training_score(&self, training: &TrainingEntry) -> i32 {
        let raw = training.sessions / self.config.targets.weekly_sessions * score_weights::SESSIONS
            + training.intensity / score_targets::RATING_SCALE_MAX * score_weights::INTENSITY;
        self.finish(raw)
    }

    /// Recovery score from sleep, stress (inverted) and energy
    #[must_use]
    pub fn recovery_score(&self, recovery: &RecoveryEntry) -> i32 {
        let scale = score_targets::RATING_SCALE_MAX;
        let raw = recovery.sleep / self.config.targets.sleep_hours * score_weights::SLEEP
            + (scale - recovery.stress) / scale * score_weights::STRESS
            + recovery.energy / scale * score_weights::ENERGY;
        self.finish(raw)
    }

    /// All category scores for a record
    #[must_use]
    pub fn score_record(&self, record: &CheckInRecord) -> CategoryScore {
        CategoryScore::new(
            self.nutrition_score(&record.nutrition),
            self.training_score(&record.training),
            self.recovery_score(&record.recovery),
        )
    }

    fn finish(&self, raw: f64) -> i32 {
        let capped = raw.min(score_weights::MAX_SCORE);
        let bounded = match self.config.bound {
            ScoreBound::Clamped => capped.max(score_weights::MIN_SCORE),
            ScoreBound::UpperOnly => capped,
        };
        round_half_up(bounded)
    }
}
