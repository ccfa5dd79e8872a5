use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};

/// Memento: the year at a glance.
#[derive(Parser)]
#[command(name = "memento", version, about = "The year at a glance, one dot per day")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./memento.toml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the year header, clock, day grid, legend and a reflection.
    Grid(ViewArgs),
    /// Print the year statistics.
    Stats(StatsArgs),
    /// Describe a single day of the year.
    Day(DayArgs),
    /// Print the clock and its drift against a reference time.
    Clock(ClockArgs),
}

/// Year and reference instant shared by the year views.
#[derive(clap::Args)]
pub struct ViewArgs {
    /// Year to show (1900..=2100); overrides the config.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Reference instant as RFC 3339, e.g. 2024-03-01T09:30:00+01:00 (defaults to now).
    #[arg(long)]
    pub now: Option<DateTime<FixedOffset>>,
}

/// Arguments for the `stats` subcommand.
#[derive(clap::Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// 1-based day of the year.
    pub day_number: u16,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the `clock` subcommand.
#[derive(clap::Args)]
pub struct ClockArgs {
    /// Instant to display as RFC 3339 (defaults to now).
    #[arg(long)]
    pub now: Option<DateTime<FixedOffset>>,

    /// Reference time to measure drift against, as RFC 3339.
    #[arg(long)]
    pub reference_time: Option<DateTime<FixedOffset>>,

    /// Behave as if location access was refused.
    #[arg(long)]
    pub deny_location: bool,
}
