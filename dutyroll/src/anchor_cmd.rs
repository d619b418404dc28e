use anyhow::{Context, Result};
use dutyroll::schedule::{Roster, ScheduleAnchor};
use dutyroll::DutyrollConfig;
use tracing::warn;

use crate::cli::{AnchorCommand, AnchorSetArgs};

pub fn run(cmd: AnchorCommand, config: &DutyrollConfig) -> Result<()> {
    let store = config.anchor_store();
    let current = store
        .load()
        .with_context(|| format!("failed to read anchor: {}", store.path().display()))?;

    let anchor = match cmd {
        AnchorCommand::Show => current,
        AnchorCommand::Set(args) => {
            let roster_store = config.roster_store();
            let roster = roster_store.load().with_context(|| {
                format!("failed to read roster: {}", roster_store.path().display())
            })?;
            let anchor = merge(current, args, &roster);
            let employee = anchor.start_employee.clone();
            store.update(anchor).with_context(|| match employee {
                Some(name) => format!("failed to update anchor with start employee {name:?}"),
                None => "failed to update anchor".to_owned(),
            })?
        }
        AnchorCommand::Clear => {
            store.clear().context("failed to clear anchor")?;
            ScheduleAnchor::default()
        }
    };

    println!("{}", describe(&anchor));
    Ok(())
}

/// Overlay the fields given on the command line onto the stored anchor.
///
/// A stored start employee that has since left the roster is dropped unless
/// the command line names a new one.
fn merge(mut anchor: ScheduleAnchor, args: AnchorSetArgs, roster: &Roster) -> ScheduleAnchor {
    if let Some(date) = args.start_date {
        anchor.start_date = Some(date);
    }
    match args.start_employee {
        Some(name) => {
            anchor.start_employee = Some(name.trim().to_owned()).filter(|n| !n.is_empty());
        }
        None => {
            if let Some(stale) = anchor.unknown_employee(roster) {
                warn!(employee = stale, "stored start employee is no longer on the roster, dropping it");
                anchor.start_employee = None;
            }
        }
    }
    anchor
}

fn describe(anchor: &ScheduleAnchor) -> String {
    let Some(date) = anchor.start_date else {
        return "anchor not set, no employee is assigned".to_owned();
    };
    match anchor.start_employee.as_deref() {
        Some(name) => format!("rotation starts {date} ({}) with {name}", date.weekday().short_name()),
        None => format!(
            "rotation starts {date} ({}) at roster position 0",
            date.weekday().short_name()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dutyroll::time::Date;

    fn monday() -> Date {
        Date::from_ymd(2024, 1, 1).unwrap()
    }

    fn roster() -> Roster {
        Roster::from_names(["A", "B"]).unwrap()
    }

    #[test]
    fn merge_keeps_unspecified_fields() {
        let stored = ScheduleAnchor::new(monday(), "A");
        let later = Date::from_ymd(2024, 2, 1).unwrap();
        let merged = merge(
            stored,
            AnchorSetArgs {
                start_date: Some(later),
                start_employee: None,
            },
            &roster(),
        );
        assert_eq!(merged, ScheduleAnchor::new(later, "A"));
    }

    #[test]
    fn new_date_drops_an_employee_who_left() {
        let later = Date::from_ymd(2024, 2, 1).unwrap();
        let merged = merge(
            ScheduleAnchor::new(monday(), "Gone"),
            AnchorSetArgs {
                start_date: Some(later),
                start_employee: None,
            },
            &roster(),
        );
        assert_eq!(merged, ScheduleAnchor::starting(later));
        assert_eq!(merged.unknown_employee(&roster()), None);
    }

    #[test]
    fn explicit_employee_is_kept_for_validation() {
        let merged = merge(
            ScheduleAnchor::new(monday(), "Gone"),
            AnchorSetArgs {
                start_date: None,
                start_employee: Some("Other".into()),
            },
            &roster(),
        );
        assert_eq!(merged.unknown_employee(&roster()), Some("Other"));
    }

    #[test]
    fn blank_employee_unsets_it() {
        let merged = merge(
            ScheduleAnchor::new(monday(), "A"),
            AnchorSetArgs {
                start_date: None,
                start_employee: Some("  ".into()),
            },
            &roster(),
        );
        assert_eq!(merged, ScheduleAnchor::starting(monday()));
    }

    #[test]
    fn descriptions() {
        assert_eq!(
            describe(&ScheduleAnchor::default()),
            "anchor not set, no employee is assigned"
        );
        assert_eq!(
            describe(&ScheduleAnchor::new(monday(), "A")),
            "rotation starts 2024-01-01 (Mon) with A"
        );
    }
}
