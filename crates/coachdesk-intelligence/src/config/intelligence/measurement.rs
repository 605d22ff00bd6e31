// ABOUTME: Measurement rule table used by the measurement validator
// ABOUTME: Per-type plausible range and the percent change that triggers an outlier warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coachdesk_core::constants::measurements;
use coachdesk_core::models::normalize_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accepted range and change threshold for one measurement type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRule {
    /// Smallest plausible value (inclusive)
    pub min: f64,
    /// Largest plausible value (inclusive)
    pub max: f64,
    /// Change versus the previous check-in, in percent, above which a warning is raised
    pub warning_threshold_percent: f64,
}

impl MeasurementRule {
    /// Create a rule
    #[must_use]
    pub const fn new(min: f64, max: f64, warning_threshold_percent: f64) -> Self {
        Self {
            min,
            max,
            warning_threshold_percent,
        }
    }
}

/// Rule table keyed by measurement type
///
/// Keys are normalised with [`normalize_key`], so lookups are case-insensitive and
/// ignore separators (`bodyFat`, `body_fat` and `Body Fat` hit the same rule).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRules {
    rules: BTreeMap<String, MeasurementRule>,
}

impl Default for MeasurementRules {
    fn default() -> Self {
        Self::empty()
            .with_rule(measurements::WEIGHT, MeasurementRule::new(30.0, 300.0, 5.0))
            .with_rule(measurements::BODY_FAT, MeasurementRule::new(3.0, 60.0, 10.0))
            .with_rule(measurements::CHEST, MeasurementRule::new(50.0, 200.0, 5.0))
            .with_rule(measurements::WAIST, MeasurementRule::new(40.0, 200.0, 5.0))
            .with_rule(measurements::HIPS, MeasurementRule::new(50.0, 200.0, 5.0))
            .with_rule(measurements::ARMS, MeasurementRule::new(15.0, 70.0, 10.0))
            .with_rule(measurements::LEGS, MeasurementRule::new(30.0, 100.0, 10.0))
    }
}

impl MeasurementRules {
    /// A table with no rules; every type passes through
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Add or replace the rule for a measurement type
    #[must_use]
    pub fn with_rule(mut self, kind: &str, rule: MeasurementRule) -> Self {
        self.rules.insert(normalize_key(kind), rule);
        self
    }

    /// Look up the rule for a measurement type
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&MeasurementRule> {
        self.rules.get(&normalize_key(kind))
    }

    /// Iterate over `(normalised type, rule)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MeasurementRule)> {
        self.rules.iter().map(|(kind, rule)| (kind.as_str(), rule))
    }

    /// Number of configured rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
