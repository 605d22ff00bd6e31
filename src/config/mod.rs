// ABOUTME: Import configuration bundling the intelligence settings with the deployment environment
// ABOUTME: Single place the CLI and service callers build configuration from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for an import run
//!
//! Nothing in the pipeline reads configuration on its own. Callers build an
//! [`ImportConfig`] (usually via [`ImportConfig::from_env`]) and pass it to
//! [`ImportOrchestrator::new`](crate::import::ImportOrchestrator::new).

/// Deployment environment type
pub mod environment;

pub use environment::Environment;

use coachdesk_intelligence::config::{
    ConfigError, IntelligenceConfig, MissingValuePolicy, ScoreBound,
};
use std::env;
use tracing::debug;

/// Everything an import run needs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Validator, scoring, trend and recommendation settings
    pub intelligence: IntelligenceConfig,
}

impl ImportConfig {
    /// Build from `ENVIRONMENT` and the `COACHDESK_*` variables
    ///
    /// # Errors
    ///
    /// Returns an error when an override cannot be parsed or the result fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT")
            .map_or_else(|_| Environment::default(), |v| Environment::from_str_or_default(&v));
        let intelligence = IntelligenceConfig::load()?;

        debug!(
            %environment,
            score_bound = intelligence.scoring.bound.as_str(),
            strict = intelligence.scoring.missing_values.is_strict(),
            "import configuration loaded"
        );

        Ok(Self {
            environment,
            intelligence,
        })
    }

    /// Override the score bounding mode
    #[must_use]
    pub fn with_score_bound(mut self, bound: ScoreBound) -> Self {
        self.intelligence.scoring.bound = bound;
        self
    }

    /// Override the missing-value policy
    #[must_use]
    pub fn with_missing_values(mut self, policy: MissingValuePolicy) -> Self {
        self.intelligence.scoring.missing_values = policy;
        self
    }
}
