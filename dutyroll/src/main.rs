mod anchor_cmd;
mod cli;
mod logging;
mod roster_cmd;
mod schedule_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;
use dutyroll::DutyrollConfig;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DutyrollConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Schedule(args) => schedule_cmd::run(args, &config),
        Command::Roster(cmd) => roster_cmd::run(cmd, &config),
        Command::Anchor(cmd) => anchor_cmd::run(cmd, &config),
    }
}
