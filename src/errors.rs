// ABOUTME: Error types surfaced by the coachdesk library and CLI
// ABOUTME: Re-exports the platform error envelope and the pipeline and configuration taxonomies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Pipeline calls fail with [`PipelineError`] and configuration loading with
//! [`ConfigError`]. Both convert into [`AppError`], whose [`ErrorResponse`] form is
//! what API callers and the CLI emit.

pub use coachdesk_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
    PipelineError,
};
pub use coachdesk_intelligence::config::ConfigError;
