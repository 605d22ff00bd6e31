// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Input helpers for coachdesk-cli
// ABOUTME: Reads a JSON document from a file or stdin and decodes it

use coachdesk::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;

/// Read and decode a JSON document; `-` reads stdin
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let text = if path.as_os_str() == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
    .map_err(|e| {
        AppError::invalid_input(format!("cannot read {}", path.display())).with_source(e)
    })?;

    serde_json::from_str(&text).map_err(|e| {
        AppError::invalid_input(format!("{} is not a valid check-in document: {e}", path.display()))
            .with_source(e)
    })
}
