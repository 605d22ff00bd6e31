// ABOUTME: Range and outlier validation for body measurements in a check-in
// ABOUTME: Rejects implausible values and warns on large jumps versus the previous check-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Measurement Validation
//!
//! Each measurement type has a plausible range and a change threshold. A value
//! outside the range is invalid; a value inside the range that moved more than the
//! threshold percentage since the previous check-in is valid but carries a warning.
//! Range errors take precedence, so an invalid value never also gets a warning.
//!
//! Types without a rule are accepted unchanged, which keeps the measurement map
//! open-ended (coaches can track `neck` or `calves` without a rule).
//!
//! ```rust
//! use coachdesk_intelligence::MeasurementValidator;
//!
//! let validator = MeasurementValidator::default();
//!
//! let result = validator.validate("weight", 29.0, None);
//! assert!(!result.is_valid);
//!
//! let result = validator.validate("weight", 100.0, Some(90.0));
//! assert!(result.is_valid);
//! assert!(result.warning.is_some());
//! ```

use coachdesk_core::errors::PipelineError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MeasurementRules;

/// Outcome of validating one measurement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the value is within the plausible range
    pub is_valid: bool,
    /// Outlier warning for a valid value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Reason the value was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// A valid result with no warning
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            warning: None,
            error: None,
        }
    }

    /// A valid result carrying an outlier warning
    #[must_use]
    pub fn with_warning(warning: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            warning: Some(warning.into()),
            error: None,
        }
    }

    /// An invalid result
    #[must_use]
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            warning: None,
            error: Some(error.into()),
        }
    }

    /// Whether there is anything to report (an error or a warning)
    #[must_use]
    pub const fn has_findings(&self) -> bool {
        !self.is_valid || self.warning.is_some()
    }

    /// Convert into a hard failure for callers that cannot accept invalid values
    ///
    /// Warnings are dropped; only an invalid result becomes an error.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Validation`] when the result is invalid
    pub fn into_result(self, kind: &str) -> Result<Option<String>, PipelineError> {
        if self.is_valid {
            Ok(self.warning)
        } else {
            Err(PipelineError::validation(
                kind,
                self.error.unwrap_or_default(),
            ))
        }
    }
}

/// Validates measurements against a rule table
#[derive(Debug, Clone, Default)]
pub struct MeasurementValidator {
    rules: MeasurementRules,
}

impl MeasurementValidator {
    /// Create a validator over the given rules
    #[must_use]
    pub const fn new(rules: MeasurementRules) -> Self {
        Self { rules }
    }

    /// Rule table in use
    #[must_use]
    pub const fn rules(&self) -> &MeasurementRules {
        &self.rules
    }

    /// Validate one measurement value, optionally against the previous check-in's value
    ///
    /// A previous value of zero is treated as absent, since a percentage change
    /// from zero is undefined.
    #[must_use]
    pub fn validate(&self, kind: &str, value: f64, previous: Option<f64>) -> ValidationResult {
        if !value.is_finite() {
            return ValidationResult::invalid(format!("{kind} value must be a finite number"));
        }

        let Some(rule) = self.rules.get(kind) else {
            debug!(kind, value, "no rule for measurement type, accepting");
            return ValidationResult::valid();
        };

        if value < rule.min {
            debug!(kind, value, min = rule.min, "measurement below minimum");
            return ValidationResult::invalid(format!(
                "{kind} value {value} is below the minimum of {}",
                rule.min
            ));
        }

        if value > rule.max {
            debug!(kind, value, max = rule.max, "measurement above maximum");
            return ValidationResult::invalid(format!(
                "{kind} value {value} is above the maximum of {}",
                rule.max
            ));
        }

        let Some(prev) = previous.filter(|p| p.is_finite() && *p != 0.0) else {
            return ValidationResult::valid();
        };

        let change_percent = ((value - prev) / prev * 100.0).abs();
        if change_percent > rule.warning_threshold_percent {
            debug!(
                kind,
                value,
                previous = prev,
                change_percent,
                "measurement changed beyond warning threshold"
            );
            return ValidationResult::with_warning(format!(
                "{kind} changed by {change_percent:.1}% since the previous check-in (threshold {}%)",
                rule.warning_threshold_percent
            ));
        }

        ValidationResult::valid()
    }
}
