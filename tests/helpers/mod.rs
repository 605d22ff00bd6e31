// ABOUTME: Shared test helpers and fixtures for integration tests
// ABOUTME: Exports check-in record and raw row builders used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod fixtures;
