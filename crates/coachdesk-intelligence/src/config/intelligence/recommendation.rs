// ABOUTME: Recommendation generator configuration: message templates per category
// ABOUTME: Templates interpolate the category average through a single placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Configuration
//!
//! Each category produces exactly two messages: one that states the client's
//! average (through [`AVERAGE_PLACEHOLDER`]) and one piece of standing advice.

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the formatted average
pub const AVERAGE_PLACEHOLDER: &str = "{average}";

/// Template messages for recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// Nutrition message stating average calories
    pub nutrition_average: String,
    /// Standing nutrition advice
    pub nutrition_advice: String,
    /// Training message stating average intensity
    pub training_average: String,
    /// Standing training advice
    pub training_advice: String,
    /// Recovery message stating average sleep
    pub recovery_average: String,
    /// Standing recovery advice
    pub recovery_advice: String,
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            nutrition_average: "Your average daily intake is {average} calories. Keep it consistent with your plan.".into(),
            nutrition_advice: "Include a quality protein source in every meal to support recovery.".into(),
            training_average: "Your average training intensity is {average}/10. Progress the load gradually week to week.".into(),
            training_advice: "Schedule at least one full rest day between your hardest sessions.".to_owned(),
            recovery_average: "You are averaging {average} hours of sleep per night. Aim for 7-9 hours.".into(),
            recovery_advice: "Keep a consistent wind-down routine to bring stress down before bed.".to_owned(),
        }
    }
}

impl RecommendationMessages {
    /// Templates that must carry the average placeholder
    #[must_use]
    pub fn average_templates(&self) -> [(&'static str, &str); 3] {
        [
            ("nutrition_average", &self.nutrition_average),
            ("training_average", &self.training_average),
            ("recovery_average", &self.recovery_average),
        ]
    }
}
