// ABOUTME: Coachdesk CLI - runs the check-in pipeline over exported rows from the command line
// ABOUTME: Import a batch, validate one measurement, or compute a single category score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Import a JSON array of raw rows and print the ImportResult
//! coachdesk-cli import --input rows.json --pretty
//!
//! # Import a {headers, rows} sheet export, rejecting rows with absent figures
//! coachdesk-cli import --input sheet.json --sheet --strict
//!
//! # Read rows from stdin
//! cat rows.json | coachdesk-cli import --input -
//!
//! # Validate one measurement against the previous check-in
//! coachdesk-cli validate --kind weight --value 100 --previous 90
//!
//! # Score one category
//! coachdesk-cli score training --sessions 4 --intensity 8
//! ```
//!
//! Results go to stdout as JSON. Failures print an `ErrorResponse` JSON envelope on
//! stderr and exit with a non-zero status.

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use coachdesk::config::ImportConfig;
use coachdesk::errors::AppResult;
use coachdesk::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "coachdesk-cli",
    about = "Coachdesk check-in pipeline CLI",
    long_about = "Validate, score, and import client check-ins exported from a coaching sheet."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Import a batch of check-in rows
    Import {
        /// JSON file to read, or `-` for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Input is a `{headers, rows}` sheet export instead of a row array
        #[arg(long)]
        sheet: bool,

        /// Reject rows with absent figures instead of reading them as 0
        #[arg(long)]
        strict: bool,

        /// Only cap scores at 100; allow negative scores
        #[arg(long)]
        unclamped: bool,
    },

    /// Validate one measurement value
    Validate {
        /// Measurement type (weight, bodyFat, chest, waist, hips, arms, legs, ...)
        #[arg(long)]
        kind: String,

        /// Value to check
        #[arg(long, allow_negative_numbers = true)]
        value: f64,

        /// Value from the previous check-in
        #[arg(long, allow_negative_numbers = true)]
        previous: Option<f64>,
    },

    /// Compute one category score
    Score {
        #[command(subcommand)]
        category: ScoreCommand,

        /// Only cap scores at 100; allow negative scores
        #[arg(long, global = true)]
        unclamped: bool,
    },
}

#[derive(Subcommand)]
enum ScoreCommand {
    /// Nutrition score from daily macros
    Nutrition {
        /// Calories (kcal); reported but not scored
        #[arg(long, default_value = "0")]
        calories: f64,
        /// Protein (g)
        #[arg(long)]
        protein: f64,
        /// Carbohydrates (g)
        #[arg(long)]
        carbs: f64,
        /// Fats (g)
        #[arg(long)]
        fats: f64,
    },

    /// Training score from sessions and intensity
    Training {
        /// Sessions completed
        #[arg(long)]
        sessions: f64,
        /// Intensity (0-10)
        #[arg(long)]
        intensity: f64,
    },

    /// Recovery score from sleep, stress and energy
    Recovery {
        /// Sleep (hours)
        #[arg(long)]
        sleep: f64,
        /// Stress (0-10)
        #[arg(long)]
        stress: f64,
        /// Energy (0-10)
        #[arg(long)]
        energy: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    if let Err(e) = logging.init() {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            helpers::output::print_error(error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = ImportConfig::from_env()?;
    debug!(environment = %config.environment, "coachdesk-cli starting");

    match cli.command {
        Command::Import {
            input,
            sheet,
            strict,
            unclamped,
        } => commands::import::run(
            config,
            &commands::import::ImportArgs {
                input,
                sheet,
                strict,
                unclamped,
            },
            cli.pretty,
        ),
        Command::Validate {
            kind,
            value,
            previous,
        } => commands::validate::run(&config, &kind, value, previous, cli.pretty),
        Command::Score {
            category,
            unclamped,
        } => {
            let input = match category {
                ScoreCommand::Nutrition {
                    calories,
                    protein,
                    carbs,
                    fats,
                } => commands::score::ScoreInput::Nutrition {
                    calories,
                    protein,
                    carbs,
                    fats,
                },
                ScoreCommand::Training {
                    sessions,
                    intensity,
                } => commands::score::ScoreInput::Training {
                    sessions,
                    intensity,
                },
                ScoreCommand::Recovery {
                    sleep,
                    stress,
                    energy,
                } => commands::score::ScoreInput::Recovery {
                    sleep,
                    stress,
                    energy,
                },
            };
            commands::score::run(config, input, unclamped, cli.pretty)
        }
    }
}
