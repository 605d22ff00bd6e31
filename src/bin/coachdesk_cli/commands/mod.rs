// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command modules for coachdesk-cli
// ABOUTME: Import, single-measurement validation, and single-category scoring

pub mod import;
pub mod score;
pub mod validate;
