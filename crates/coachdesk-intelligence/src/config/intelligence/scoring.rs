// ABOUTME: Score calculator configuration: bounding mode, missing-value policy, formula targets
// ABOUTME: Makes the lenient zero-default and the upper-only clamp explicit, switchable choices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Configuration
//!
//! Two behaviours of the category score formulas are policy rather than math:
//!
//! - **Bounding**: scores are always capped at 100. Whether they are also floored
//!   at 0 is [`ScoreBound`]; `Clamped` is the default, `UpperOnly` reproduces the
//!   historical behaviour where a stress rating above 10 yields a negative score.
//! - **Missing values**: an absent figure inside a present nutrition/training/recovery
//!   block reads as 0 under [`MissingValuePolicy::ZeroDefault`] (the default) and
//!   rejects the row under [`MissingValuePolicy::Strict`].

use coachdesk_core::constants::score_targets;
use coachdesk_core::errors::PipelineError;
use serde::{Deserialize, Serialize};

/// How computed category scores are bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBound {
    /// Clamp to `[0, 100]`
    #[default]
    Clamped,
    /// Cap at 100 only; negative weighted sums stay negative
    UpperOnly,
}

impl ScoreBound {
    /// Configuration string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clamped => "clamped",
            Self::UpperOnly => "upper_only",
        }
    }

    /// Parse from configuration string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clamped" | "clamp" => Some(Self::Clamped),
            "upper_only" | "upperonly" | "unclamped" => Some(Self::UpperOnly),
            _ => None,
        }
    }
}

/// What to do with an absent numeric figure inside a present block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Treat the figure as 0
    #[default]
    ZeroDefault,
    /// Reject the row with a malformed-row error
    Strict,
}

impl MissingValuePolicy {
    /// Resolve an optional figure according to the policy
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MalformedRow`] when the value is absent and the
    /// policy is `Strict`.
    pub fn resolve(self, value: Option<f64>, row: usize, field: &str) -> Result<f64, PipelineError> {
        match (value, self) {
            (Some(v), _) => Ok(v),
            (None, Self::ZeroDefault) => Ok(0.0),
            (None, Self::Strict) => Err(PipelineError::missing_field(row, field)),
        }
    }

    /// Whether absent figures are rejected
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Targets the score formulas divide by
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTargets {
    /// Daily protein target (grams)
    pub protein_g: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_g: f64,
    /// Daily fat target (grams)
    pub fats_g: f64,
    /// Weekly training sessions target
    pub weekly_sessions: f64,
    /// Nightly sleep target (hours)
    pub sleep_hours: f64,
}

impl Default for ScoreTargets {
    fn default() -> Self {
        Self {
            protein_g: score_targets::PROTEIN_G,
            carbs_g: score_targets::CARBS_G,
            fats_g: score_targets::FATS_G,
            weekly_sessions: score_targets::WEEKLY_SESSIONS,
            sleep_hours: score_targets::SLEEP_HOURS,
        }
    }
}

/// Score calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Bounding applied after the weighted sum
    pub bound: ScoreBound,
    /// Handling of absent figures during import
    pub missing_values: MissingValuePolicy,
    /// Formula targets
    pub targets: ScoreTargets,
}
