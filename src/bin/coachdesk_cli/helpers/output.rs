// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for coachdesk-cli
// ABOUTME: Results as JSON on stdout, failures as an ErrorResponse envelope on stderr

use coachdesk::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;

/// Print a result as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print a failure as an `ErrorResponse` envelope on stderr
pub fn print_error(error: AppError) {
    let fallback = error.to_string();
    match serde_json::to_string(&ErrorResponse::from(error)) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{fallback}"),
    }
}
