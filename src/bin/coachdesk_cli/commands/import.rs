// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Import command for coachdesk-cli
// ABOUTME: Runs the full pipeline over a row array or a sheet export and prints the ImportResult

use coachdesk::config::ImportConfig;
use coachdesk::errors::AppResult;
use coachdesk::import::{ImportOrchestrator, SheetTable};
use coachdesk::intelligence::config::{MissingValuePolicy, ScoreBound};
use coachdesk::models::RawRow;
use std::path::PathBuf;
use tracing::info;

use crate::helpers::{input::read_json, output::print_json};

/// Options for one import run
pub struct ImportArgs {
    pub input: PathBuf,
    pub sheet: bool,
    pub strict: bool,
    pub unclamped: bool,
}

/// Import a batch and print the result
pub fn run(mut config: ImportConfig, args: &ImportArgs, pretty: bool) -> AppResult<()> {
    if args.strict {
        config = config.with_missing_values(MissingValuePolicy::Strict);
    }
    if args.unclamped {
        config = config.with_score_bound(ScoreBound::UpperOnly);
    }

    let orchestrator = ImportOrchestrator::new(&config);
    let result = if args.sheet {
        let table: SheetTable = read_json(&args.input)?;
        orchestrator.process_sheet(&table)?
    } else {
        let rows: Vec<RawRow> = read_json(&args.input)?;
        orchestrator.process_rows(&rows)?
    };

    info!(
        input = %args.input.display(),
        check_ins = result.check_ins.len(),
        issues = result.validation.len(),
        "import finished"
    );

    print_json(&result, pretty)
}
