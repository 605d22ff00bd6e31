// ABOUTME: Template-based recommendations interpolated with category averages
// ABOUTME: Exactly two messages per category, one carrying the client's average
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachdesk_core::errors::PipelineError;
use coachdesk_core::models::CheckInRecord;
use serde::{Deserialize, Serialize};

use crate::config::{RecommendationMessages, AVERAGE_PLACEHOLDER};
use crate::insights::Patterns;
use crate::scoring::round_half_up;

/// Recommendations per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Nutrition advice
    pub nutrition: Vec<String>,
    /// Training advice
    pub training: Vec<String>,
    /// Recovery advice
    pub recovery: Vec<String>,
}

/// Produces [`Recommendations`] from message templates
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    messages: RecommendationMessages,
}

impl RecommendationEngine {
    /// Engine with the default messages
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom messages
    #[must_use]
    pub const fn with_messages(messages: RecommendationMessages) -> Self {
        Self { messages }
    }

    /// Recommendations for a check-in history
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyInput`] when `records` is empty
    pub fn generate_recommendations(
        &self,
        records: &[CheckInRecord],
    ) -> Result<Recommendations, PipelineError> {
        if records.is_empty() {
            return Err(PipelineError::empty_input("generate recommendations"));
        }
        Ok(self.recommend_from_patterns(&Patterns::from_records(records)?))
    }

    /// Recommendations from already computed averages
    #[must_use]
    pub fn recommend_from_patterns(&self, patterns: &Patterns) -> Recommendations {
        let calories = round_half_up(patterns.nutrition.average_calories).to_string();
        let intensity = format!("{:.1}", patterns.training.average_intensity);
        let sleep = format!("{:.1}", patterns.recovery.average_sleep);

        Recommendations {
            nutrition: vec![
                interpolate(&self.messages.nutrition_average, &calories),
                self.messages.nutrition_advice.clone(),
            ],
            training: vec![
                interpolate(&self.messages.training_average, &intensity),
                self.messages.training_advice.clone(),
            ],
            recovery: vec![
                interpolate(&self.messages.recovery_average, &sleep),
                self.messages.recovery_advice.clone(),
            ],
        }
    }
}

fn interpolate(template: &str, average: &str) -> String {
    template.replace(AVERAGE_PLACEHOLDER, average)
}
