// ABOUTME: Error taxonomy for the check-in validation, scoring, and import pipeline
// ABOUTME: Validation errors are recoverable; empty input and malformed rows abort the call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pipeline Error Types
//!
//! - `Validation` - a measurement is out of range; surfaced as a field-level message
//! - `EmptyInput` - an aggregation was asked to run over zero records
//! - `MalformedRow` - a raw row is missing an expected field or has an unusable one; the whole batch fails
//!
//! Conversion into [`AppError`] picks the matching [`ErrorCode`].

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by pipeline components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Measurement value rejected by the validator
    #[error("{field}: {message}")]
    Validation {
        /// Measurement type that failed
        field: String,
        /// Human-readable reason naming the violated bound
        message: String,
    },

    /// Aggregation requested over an empty record set
    #[error("cannot {operation}: no check-in records supplied")]
    EmptyInput {
        /// Operation that needed at least one record
        operation: &'static str,
    },

    /// Raw row is missing or has an unusable field
    #[error("row {row}: {reason} `{field}`")]
    MalformedRow {
        /// Zero-based row index in the import batch
        row: usize,
        /// Dotted path of the offending field (e.g. `nutrition.protein`)
        field: String,
        /// What is wrong with the field
        reason: String,
        /// Whether the field was absent rather than present but unusable
        missing: bool,
    },
}

impl PipelineError {
    /// Create a validation error for a measurement field
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an empty-input error for the named operation
    #[must_use]
    pub const fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create a malformed-row error for a missing field
    #[must_use]
    pub fn missing_field(row: usize, field: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            field: field.into(),
            reason: "missing required field".to_owned(),
            missing: true,
        }
    }

    /// Create a malformed-row error for a field that is present but unusable
    #[must_use]
    pub fn invalid_field(row: usize, field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            field: field.into(),
            reason: reason.into(),
            missing: false,
        }
    }

    /// Standard error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::ValueOutOfRange,
            Self::EmptyInput { .. } => ErrorCode::InvalidInput,
            Self::MalformedRow { missing: true, .. } => ErrorCode::MissingRequiredField,
            Self::MalformedRow { missing: false, .. } => ErrorCode::InvalidFormat,
        }
    }

    /// Whether the caller can keep going after this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<PipelineError> for AppError {
    fn from(error: PipelineError) -> Self {
        let app_error = Self::new(error.code(), error.to_string());
        match &error {
            PipelineError::Validation { field, .. } => app_error.with_resource_id(field.clone()),
            PipelineError::EmptyInput { operation } => {
                app_error.with_details(serde_json::json!({ "operation": operation }))
            }
            PipelineError::MalformedRow { row, field, .. } => app_error
                .with_resource_id(format!("row-{row}"))
                .with_details(serde_json::json!({ "row": row, "field": field })),
        }
    }
}
