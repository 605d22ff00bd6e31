// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Scoring formula weights, default targets, measurement names, and sheet column names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Anything a coach may want to tune lives in the
//! intelligence configuration instead; what stays here is fixed by the scoring formulas.

/// Category score formula weights (points out of 100)
pub mod score_weights {
    /// Protein contribution to the nutrition score
    pub const PROTEIN: f64 = 40.0;
    /// Carbohydrate contribution to the nutrition score
    pub const CARBS: f64 = 30.0;
    /// Fat contribution to the nutrition score
    pub const FATS: f64 = 30.0;
    /// Session count contribution to the training score
    pub const SESSIONS: f64 = 50.0;
    /// Intensity contribution to the training score
    pub const INTENSITY: f64 = 50.0;
    /// Sleep contribution to the recovery score
    pub const SLEEP: f64 = 40.0;
    /// Inverted stress contribution to the recovery score
    pub const STRESS: f64 = 30.0;
    /// Energy contribution to the recovery score
    pub const ENERGY: f64 = 30.0;
    /// Upper bound of every category score
    pub const MAX_SCORE: f64 = 100.0;
    /// Lower bound applied in clamped mode
    pub const MIN_SCORE: f64 = 0.0;
}

/// Default daily/weekly targets the formulas divide by
pub mod score_targets {
    /// Daily protein target (grams)
    pub const PROTEIN_G: f64 = 180.0;
    /// Daily carbohydrate target (grams)
    pub const CARBS_G: f64 = 250.0;
    /// Daily fat target (grams)
    pub const FATS_G: f64 = 70.0;
    /// Weekly training sessions target
    pub const WEEKLY_SESSIONS: f64 = 4.0;
    /// Nightly sleep target (hours)
    pub const SLEEP_HOURS: f64 = 8.0;
    /// Top of the 0-10 self-report scales (intensity, stress, energy)
    pub const RATING_SCALE_MAX: f64 = 10.0;
}

/// Canonical measurement type names
pub mod measurements {
    /// Body weight (kg)
    pub const WEIGHT: &str = "weight";
    /// Body fat (%)
    pub const BODY_FAT: &str = "bodyFat";
    /// Chest circumference (cm)
    pub const CHEST: &str = "chest";
    /// Waist circumference (cm)
    pub const WAIST: &str = "waist";
    /// Hip circumference (cm)
    pub const HIPS: &str = "hips";
    /// Arm circumference (cm)
    pub const ARMS: &str = "arms";
    /// Leg circumference (cm)
    pub const LEGS: &str = "legs";

    /// Circumference measurements stored in the `measurements` map
    pub const CIRCUMFERENCES: [&str; 5] = [CHEST, WAIST, HIPS, ARMS, LEGS];
}

/// Normalised spreadsheet column names reserved by the fixed check-in schema
///
/// Normalisation lower-cases and drops everything except ASCII letters and digits,
/// so `Body Fat %` and `body_fat` both become `bodyfat`.
pub mod columns {
    /// Submission date
    pub const DATE: &str = "date";
    /// Coach-defined week number
    pub const WEEK: &str = "week";
    /// Body weight
    pub const WEIGHT: &str = "weight";
    /// Body fat percentage
    pub const BODY_FAT: &str = "bodyfat";
    /// Daily calories
    pub const CALORIES: &str = "calories";
    /// Daily protein
    pub const PROTEIN: &str = "protein";
    /// Daily carbohydrates
    pub const CARBS: &str = "carbs";
    /// Daily fats
    pub const FATS: &str = "fats";
    /// Weekly sessions
    pub const SESSIONS: &str = "sessions";
    /// Training intensity
    pub const INTENSITY: &str = "intensity";
    /// Free-text training progress
    pub const PROGRESS: &str = "progress";
    /// Sleep hours
    pub const SLEEP: &str = "sleep";
    /// Stress rating
    pub const STRESS: &str = "stress";
    /// Energy rating
    pub const ENERGY: &str = "energy";
    /// Overall rating supplied by the coach
    pub const PERCENTAGE_RATING: &str = "percentagerating";
    /// Short alias for the overall rating
    pub const RATING: &str = "rating";

    /// Every reserved column; anything else is a custom question
    pub const RESERVED: [&str; 21] = [
        DATE,
        WEEK,
        WEIGHT,
        BODY_FAT,
        CALORIES,
        PROTEIN,
        CARBS,
        FATS,
        SESSIONS,
        INTENSITY,
        PROGRESS,
        SLEEP,
        STRESS,
        ENERGY,
        PERCENTAGE_RATING,
        RATING,
        "chest",
        "waist",
        "hips",
        "arms",
        "legs",
    ];
}

/// Custom question defaults
pub mod custom_questions {
    /// Category used when a question does not name one
    pub const DEFAULT_CATEGORY: &str = "general";
    /// Separator between category and question text in sheet headers
    pub const CATEGORY_SEPARATOR: char = ':';
}
