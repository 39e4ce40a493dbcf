// ABOUTME: GeminiFit CLI - generate workout plans, exercise swaps, and exercise photos
// ABOUTME: Merges flags over saved preferences and prints results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a plan from saved preferences, overriding a few fields
//! gemini-fit plan --days 5 --goal "Max Strength & Power" --injuries "bad left knee"
//!
//! # Full-body routine three days a week
//! gemini-fit plan --days 3 --split full-body
//!
//! # Ask for safer alternatives to one exercise
//! gemini-fit alternatives --name "Barbell Back Squat" --muscle-group Quadriceps \
//!     --sets 4 --reps 8-10 --injuries "bad knees"
//!
//! # Resolve an exercise photo through the image cache
//! gemini-fit image "Romanian Deadlift"
//!
//! # Show saved preferences
//! gemini-fit preferences
//! ```

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gemini_fit::config::{AppConfig, LogLevel};
use gemini_fit::constants::preferences::{
    MAX_DAYS_PER_WEEK, MAX_REST_DAYS, MIN_DAYS_PER_WEEK, MIN_REST_DAYS,
};
use gemini_fit::logging::LoggingConfig;
use gemini_fit::models::SplitType;

#[derive(Parser)]
#[command(
    name = "gemini-fit",
    about = "GeminiFit workout routine generator",
    long_about = "Generates weekly gym routines, injury-aware exercise alternatives, and exercise photos with Gemini."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Log level, overriding `RUST_LOG`
    #[arg(long, global = true, value_enum, conflicts_with = "verbose")]
    log_level: Option<LogLevel>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a weekly plan and save the preferences used
    Plan(PlanArgs),

    /// Suggest three alternatives for an exercise
    Alternatives {
        /// Exercise to replace
        #[arg(long)]
        name: String,

        /// Muscle group it targets
        #[arg(long)]
        muscle_group: String,

        /// Current set count
        #[arg(long, default_value = "3")]
        sets: String,

        /// Current rep range
        #[arg(long, default_value = "8-12")]
        reps: String,

        /// Injuries to respect (defaults to the saved preferences)
        #[arg(long)]
        injuries: Option<String>,
    },

    /// Resolve an exercise photo through the image cache
    Image {
        /// Exercise name
        name: String,
    },

    /// Print the saved preferences
    Preferences,
}

/// Preference overrides for plan generation
#[derive(clap::Args)]
struct PlanArgs {
    /// Training days per week
    #[arg(long, value_parser = clap::value_parser!(u8).range(i64::from(MIN_DAYS_PER_WEEK)..=i64::from(MAX_DAYS_PER_WEEK)))]
    days: Option<u8>,

    /// Maximum consecutive rest days
    #[arg(long, value_parser = clap::value_parser!(u8).range(i64::from(MIN_REST_DAYS)..=i64::from(MAX_REST_DAYS)))]
    rest: Option<u8>,

    /// Primary goal (label or key, e.g. "max-strength")
    #[arg(long)]
    goal: Option<String>,

    /// Routine structure: full-body or split
    #[arg(long)]
    split: Option<SplitType>,

    /// Undeveloped body parts to emphasize
    #[arg(long)]
    focus: Option<String>,

    /// Injuries or limitations
    #[arg(long)]
    injuries: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if let Some(level) = cli.verbose.then_some(LogLevel::Debug).or(cli.log_level) {
        logging = logging.with_level(level);
    }
    logging.init().context("failed to initialize logging")?;

    let config = AppConfig::from_env().context("failed to load configuration")?;

    match cli.command {
        Command::Plan(args) => commands::routine::plan(&config, args).await?,
        Command::Alternatives {
            name,
            muscle_group,
            sets,
            reps,
            injuries,
        } => {
            commands::routine::alternatives(&config, name, muscle_group, sets, reps, injuries)
                .await?;
        }
        Command::Image { name } => commands::image::resolve(&config, &name).await?,
        Command::Preferences => commands::routine::show_preferences(&config).await?,
    }

    Ok(())
}
