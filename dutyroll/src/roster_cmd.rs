use anyhow::{Context, Result};
use dutyroll::schedule::Roster;
use dutyroll::DutyrollConfig;
use tracing::warn;

use crate::cli::RosterCommand;

pub fn run(cmd: RosterCommand, config: &DutyrollConfig) -> Result<()> {
    let store = config.roster_store();
    let path = store.path().display().to_string();

    let roster = match cmd {
        RosterCommand::List => store
            .load()
            .with_context(|| format!("failed to read roster: {path}"))?,
        RosterCommand::Add { name } => store
            .add(&name)
            .with_context(|| format!("failed to add {name:?}"))?,
        RosterCommand::Remove { name } => {
            let roster = store
                .remove(&name)
                .with_context(|| format!("failed to remove {name:?}"))?;
            warn_if_anchor_dropped(config, &roster)?;
            roster
        }
        RosterCommand::Set { names } => {
            let roster = store.replace(&names).context("failed to replace roster")?;
            warn_if_anchor_dropped(config, &roster)?;
            roster
        }
        RosterCommand::Move { name, index } => store
            .move_to(&name, index)
            .with_context(|| format!("failed to move {name:?}"))?,
    };

    print!("{}", render_list(&roster));
    Ok(())
}

/// The anchor keeps its employee even when that employee leaves the roster;
/// the rotation then starts from position 0.
fn warn_if_anchor_dropped(config: &DutyrollConfig, roster: &Roster) -> Result<()> {
    let anchor = config
        .anchor_store()
        .load()
        .context("failed to read anchor")?;
    if let Some(name) = anchor.unknown_employee(roster) {
        warn!(employee = name, "anchor employee is no longer on the roster, rotation starts at position 0");
    }
    Ok(())
}

fn render_list(roster: &Roster) -> String {
    if roster.is_empty() {
        return "(no employees)\n".to_owned();
    }
    roster
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{i:>3}  {name}\n"))
        .collect()
}
