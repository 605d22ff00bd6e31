// ABOUTME: Trend classification thresholds for the insight generator
// ABOUTME: Average per-step change beyond the threshold marks a metric increasing or decreasing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Per-metric stability thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Weight change per check-in (kg) within which the trend is stable
    pub weight_stable_threshold: f64,
    /// Body fat change per check-in (percentage points) within which the trend is stable
    pub body_fat_stable_threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            weight_stable_threshold: 0.2,
            body_fat_stable_threshold: 0.2,
        }
    }
}
