// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Validate command for coachdesk-cli
// ABOUTME: Checks one measurement against the configured rule table

use coachdesk::config::ImportConfig;
use coachdesk::errors::AppResult;
use coachdesk::intelligence::MeasurementValidator;

use crate::helpers::output::print_json;

/// Validate one value and print the `ValidationResult`
pub fn run(
    config: &ImportConfig,
    kind: &str,
    value: f64,
    previous: Option<f64>,
    pretty: bool,
) -> AppResult<()> {
    let validator = MeasurementValidator::new(config.intelligence.measurement_rules.clone());
    print_json(&validator.validate(kind, value, previous), pretty)
}
