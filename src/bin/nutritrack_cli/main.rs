// ABOUTME: NutriTrack CLI - prints goals, summaries, reports and streaks for a data snapshot
// ABOUTME: Loads the JSON snapshot into the in-memory store and drives the dashboard service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors
//!
//! Usage:
//! ```bash
//! # Today's goals including today's exercise
//! nutritrack-cli goals
//!
//! # Intake and remaining totals for a specific day
//! nutritrack-cli summary --date 2025-03-14
//!
//! # Seven-day report ending today, with a pinned "today"
//! nutritrack-cli --today 2025-03-14 weekly
//!
//! # Per-day totals for the last two weeks
//! nutritrack-cli history --days 14
//!
//! # Today's points and the calorie streak
//! nutritrack-cli --data ./data/nutritrack.json gamification
//!
//! # Check the stored profile against the accepted ranges
//! nutritrack-cli validate
//! ```

mod commands;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nutritrack::config::AppConfig;
use nutritrack::logging::LoggingConfig;
use nutritrack::services::DashboardService;
use nutritrack::storage::InMemoryStore;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "nutritrack-cli",
    about = "NutriTrack goals, adherence and streak reports",
    long_about = "Computes calorie and macro goals, adherence points and calorie streaks from a NutriTrack JSON snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot path override (default: `NUTRITRACK_DATA_PATH` or ./data/nutritrack.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Date treated as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calorie and macro goals for today
    Goals,

    /// Intake, remaining totals and entries for one day
    Summary {
        /// Day to summarize (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Seven-day report ending on a day
    Weekly {
        /// Last day of the window (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Per-day totals and goals, oldest first
    History {
        /// Number of days (defaults to `NUTRITRACK_HISTORY_DAYS`)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Today's adherence points and the calorie streak
    Gamification,

    /// Check the stored profile against the accepted ranges
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = AppConfig::load().context("invalid configuration")?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(today) = cli.today {
        config.today = Some(today);
    }

    let store = open_store(&config)?;
    let service = DashboardService::new(store);
    let today = config.today();

    match cli.command {
        Command::Goals => commands::dashboard::goals(&service, today),
        Command::Summary { date } => commands::dashboard::summary(&service, date.unwrap_or(today)),
        Command::Weekly { date } => commands::dashboard::weekly(&service, date.unwrap_or(today)),
        Command::History { days } => {
            commands::dashboard::history(&service, today, days.unwrap_or(config.history_days))
        }
        Command::Gamification => commands::dashboard::gamification(&service, today),
        Command::Validate => commands::profile::validate(&config.data_path),
    }
}

/// Load the snapshot, or start empty when the file does not exist yet
fn open_store(config: &AppConfig) -> Result<InMemoryStore> {
    if !config.data_path.exists() {
        warn!(path = %config.data_path.display(), "snapshot not found, starting with an empty store");
        return Ok(InMemoryStore::new());
    }
    info!(path = %config.data_path.display(), "loading snapshot");
    InMemoryStore::load(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))
}
