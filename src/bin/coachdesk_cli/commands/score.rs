// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Score command for coachdesk-cli
// ABOUTME: Computes a single nutrition, training, or recovery score

use coachdesk::config::ImportConfig;
use coachdesk::errors::AppResult;
use coachdesk::intelligence::config::ScoreBound;
use coachdesk::intelligence::ScoreCalculator;
use coachdesk::models::{NutritionEntry, RecoveryEntry, TrainingEntry};
use serde::Serialize;

use crate::helpers::output::print_json;

/// Figures for one category
pub enum ScoreInput {
    Nutrition {
        calories: f64,
        protein: f64,
        carbs: f64,
        fats: f64,
    },
    Training {
        sessions: f64,
        intensity: f64,
    },
    Recovery {
        sleep: f64,
        stress: f64,
        energy: f64,
    },
}

#[derive(Serialize)]
struct ScoreOutput {
    category: &'static str,
    score: i32,
}

/// Score one category and print `{category, score}`
pub fn run(
    mut config: ImportConfig,
    input: ScoreInput,
    unclamped: bool,
    pretty: bool,
) -> AppResult<()> {
    if unclamped {
        config = config.with_score_bound(ScoreBound::UpperOnly);
    }
    let calculator = ScoreCalculator::with_config(config.intelligence.scoring);

    let output = match input {
        ScoreInput::Nutrition {
            calories,
            protein,
            carbs,
            fats,
        } => ScoreOutput {
            category: "nutrition",
            score: calculator.nutrition_score(&NutritionEntry {
                calories,
                protein,
                carbs,
                fats,
            }),
        },
        ScoreInput::Training {
            sessions,
            intensity,
        } => ScoreOutput {
            category: "training",
            score: calculator.training_score(&TrainingEntry {
                sessions,
                intensity,
                progress: None,
            }),
        },
        ScoreInput::Recovery {
            sleep,
            stress,
            energy,
        } => ScoreOutput {
            category: "recovery",
            score: calculator.recovery_score(&RecoveryEntry {
                sleep,
                stress,
                energy,
            }),
        },
    };

    print_json(&output, pretty)
}
