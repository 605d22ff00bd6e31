// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for coachdesk-cli
// ABOUTME: Input reading and JSON output formatting

pub mod input;
pub mod output;
