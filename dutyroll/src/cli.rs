use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dutyroll::time::Date;

/// Workday duty rotation scheduler.
#[derive(Parser)]
#[command(
    name = "dutyroll",
    version,
    about = "Holiday-aware workday duty rotation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: dutyroll.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the duty schedule for one month.
    Schedule(ScheduleArgs),
    /// Inspect or edit the rotation order.
    #[command(subcommand)]
    Roster(RosterCommand),
    /// Inspect or edit the rotation start.
    #[command(subcommand)]
    Anchor(AnchorCommand),
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args)]
pub struct ScheduleArgs {
    /// Calendar year.
    #[arg(short, long)]
    pub year: u16,

    /// Month of the year, 1-12.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: u8,

    /// Emit the entries as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// `roster` subcommands.
#[derive(Subcommand)]
pub enum RosterCommand {
    /// List employees in rotation order.
    List,
    /// Append an employee to the rotation.
    Add {
        /// Employee name.
        name: String,
    },
    /// Remove an employee from the rotation.
    Remove {
        /// Employee name.
        name: String,
    },
    /// Replace the whole rotation.
    Set {
        /// Employee names, in rotation order.
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Move an employee to a rotation position (0-based).
    Move {
        /// Employee name.
        name: String,
        /// Target position; past the end moves to the end.
        index: usize,
    },
}

/// `anchor` subcommands.
#[derive(Subcommand)]
pub enum AnchorCommand {
    /// Show the current anchor.
    Show,
    /// Set the start date and/or start employee.
    Set(AnchorSetArgs),
    /// Unset the anchor; nobody is assigned until it is set again.
    Clear,
}

/// Arguments for `anchor set`.
#[derive(clap::Args)]
#[command(group(clap::ArgGroup::new("fields").required(true).multiple(true)))]
pub struct AnchorSetArgs {
    /// First day of the rotation (YYYY-MM-DD).
    #[arg(long, group = "fields")]
    pub start_date: Option<Date>,

    /// Employee on duty on the first workday on or after the start date.
    #[arg(long, group = "fields")]
    pub start_employee: Option<String>,
}
