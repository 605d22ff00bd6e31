// ABOUTME: Intelligence configuration: scoring policy, measurement rules, trend thresholds, messages
// ABOUTME: Built from defaults, overridden from COACHDESK_* environment variables, then validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration
//!
//! [`IntelligenceConfig::load`] is the only entry point that reads the environment.
//! Components never look the configuration up themselves: callers build one value
//! and hand it to each component they construct.

mod error;
mod measurement;
mod recommendation;
mod scoring;
mod trend;

pub use error::ConfigError;
pub use measurement::{MeasurementRule, MeasurementRules};
pub use recommendation::{RecommendationMessages, AVERAGE_PLACEHOLDER};
pub use scoring::{MissingValuePolicy, ScoreBound, ScoreTargets, ScoringConfig};
pub use trend::TrendConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variable names read by [`IntelligenceConfig::apply_env_overrides`]
pub mod env_vars {
    /// `clamped` or `upper_only`
    pub const SCORE_BOUND: &str = "COACHDESK_SCORE_BOUND";
    /// `true` rejects rows with absent figures
    pub const STRICT_MISSING_VALUES: &str = "COACHDESK_STRICT_MISSING_VALUES";
    /// Protein target (g)
    pub const TARGET_PROTEIN_G: &str = "COACHDESK_TARGET_PROTEIN_G";
    /// Carbohydrate target (g)
    pub const TARGET_CARBS_G: &str = "COACHDESK_TARGET_CARBS_G";
    /// Fat target (g)
    pub const TARGET_FATS_G: &str = "COACHDESK_TARGET_FATS_G";
    /// Weekly sessions target
    pub const TARGET_WEEKLY_SESSIONS: &str = "COACHDESK_TARGET_WEEKLY_SESSIONS";
    /// Sleep target (hours)
    pub const TARGET_SLEEP_HOURS: &str = "COACHDESK_TARGET_SLEEP_HOURS";
    /// Weight trend stability threshold
    pub const TREND_WEIGHT_THRESHOLD: &str = "COACHDESK_TREND_WEIGHT_THRESHOLD";
    /// Body fat trend stability threshold
    pub const TREND_BODY_FAT_THRESHOLD: &str = "COACHDESK_TREND_BODY_FAT_THRESHOLD";
}

/// Configuration for every intelligence component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Score calculator policy and targets
    pub scoring: ScoringConfig,
    /// Measurement validator rule table
    pub measurement_rules: MeasurementRules,
    /// Trend classification thresholds
    pub trends: TrendConfig,
    /// Recommendation message templates
    pub recommendations: RecommendationMessages,
}

impl IntelligenceConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `COACHDESK_*` environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when a variable is set but cannot be parsed
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = env::var(env_vars::SCORE_BOUND) {
            self.scoring.bound = ScoreBound::parse(&val).ok_or_else(|| {
                ConfigError::Parse(format!("Invalid {}: {val}", env_vars::SCORE_BOUND))
            })?;
        }

        if let Ok(val) = env::var(env_vars::STRICT_MISSING_VALUES) {
            let strict = parse_flag(&val).ok_or_else(|| {
                ConfigError::Parse(format!(
                    "Invalid {}: {val}",
                    env_vars::STRICT_MISSING_VALUES
                ))
            })?;
            self.scoring.missing_values = if strict {
                MissingValuePolicy::Strict
            } else {
                MissingValuePolicy::ZeroDefault
            };
        }

        let targets = &mut self.scoring.targets;
        env_override(env_vars::TARGET_PROTEIN_G, &mut targets.protein_g)?;
        env_override(env_vars::TARGET_CARBS_G, &mut targets.carbs_g)?;
        env_override(env_vars::TARGET_FATS_G, &mut targets.fats_g)?;
        env_override(env_vars::TARGET_WEEKLY_SESSIONS, &mut targets.weekly_sessions)?;
        env_override(env_vars::TARGET_SLEEP_HOURS, &mut targets.sleep_hours)?;

        env_override(
            env_vars::TREND_WEIGHT_THRESHOLD,
            &mut self.trends.weight_stable_threshold,
        )?;
        env_override(
            env_vars::TREND_BODY_FAT_THRESHOLD,
            &mut self.trends.body_fat_stable_threshold,
        )?;

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a target is not positive, a measurement rule has
    /// non-finite bounds, `min >= max` or a non-positive warning threshold, a trend threshold is
    /// negative, or an average template lacks the placeholder
    pub fn validate(&self) -> Result<(), ConfigError> {
        let targets = &self.scoring.targets;
        for (name, value) in [
            ("protein_g", targets.protein_g),
            ("carbs_g", targets.carbs_g),
            ("fats_g", targets.fats_g),
            ("weekly_sessions", targets.weekly_sessions),
            ("sleep_hours", targets.sleep_hours),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "score target {name} must be positive, got {value}"
                )));
            }
        }

        for (kind, rule) in self.measurement_rules.iter() {
            if !rule.min.is_finite() || !rule.max.is_finite() || rule.min >= rule.max {
                return Err(ConfigError::InvalidRange(format!(
                    "{kind}: min ({}) must be < max ({})",
                    rule.min, rule.max
                )));
            }
            if !rule.warning_threshold_percent.is_finite() || rule.warning_threshold_percent <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{kind}: warning threshold must be positive, got {}",
                    rule.warning_threshold_percent
                )));
            }
        }

        for (name, value) in [
            ("weight", self.trends.weight_stable_threshold),
            ("body_fat", self.trends.body_fat_stable_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} trend threshold must be non-negative, got {value}"
                )));
            }
        }

        for (name, template) in self.recommendations.average_templates() {
            if !template.contains(AVERAGE_PLACEHOLDER) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "recommendation template {name} must contain {AVERAGE_PLACEHOLDER}"
                )));
            }
        }

        Ok(())
    }
}

fn env_override<T: FromStr>(name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {val}")))?;
    }
    Ok(())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            env_vars::SCORE_BOUND,
            env_vars::STRICT_MISSING_VALUES,
            env_vars::TARGET_PROTEIN_G,
            env_vars::TARGET_CARBS_G,
            env_vars::TARGET_FATS_G,
            env_vars::TARGET_WEEKLY_SESSIONS,
            env_vars::TARGET_SLEEP_HOURS,
            env_vars::TREND_WEIGHT_THRESHOLD,
            env_vars::TREND_BODY_FAT_THRESHOLD,
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    #[serial]
    fn test_env_overrides_applied() -> Result<(), ConfigError> {
        clear_env();
        env::set_var(env_vars::SCORE_BOUND, "upper_only");
        env::set_var(env_vars::STRICT_MISSING_VALUES, "true");
        env::set_var(env_vars::TARGET_PROTEIN_G, "150");

        let config = IntelligenceConfig::load();
        clear_env();

        let config = config?;
        assert_eq!(config.scoring.bound, ScoreBound::UpperOnly);
        assert_eq!(config.scoring.missing_values, MissingValuePolicy::Strict);
        assert!((config.scoring.targets.protein_g - 150.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_unparsable_override_rejected() {
        clear_env();
        env::set_var(env_vars::TARGET_SLEEP_HOURS, "eight");

        let result = IntelligenceConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_rejects_inverted_rule() {
        let config = IntelligenceConfig {
            measurement_rules: MeasurementRules::default()
                .with_rule("waist", MeasurementRule::new(200.0, 40.0, 5.0)),
            ..IntelligenceConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_validation_rejects_non_finite_rules() {
        for (rule, bounds) in [
            (MeasurementRule::new(f64::NAN, 200.0, 5.0), true),
            (MeasurementRule::new(40.0, f64::INFINITY, 5.0), true),
            (MeasurementRule::new(40.0, 200.0, f64::NAN), false),
        ] {
            let config = IntelligenceConfig {
                measurement_rules: MeasurementRules::default().with_rule("waist", rule),
                ..IntelligenceConfig::default()
            };

            let result = config.validate();
            if bounds {
                assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
            } else {
                assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
            }
        }
    }

    #[test]
    fn test_validation_rejects_template_without_placeholder() {
        let mut config = IntelligenceConfig::default();
        config.recommendations.training_average = "Train hard.".to_owned();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
