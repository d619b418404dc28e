use anyhow::{Context, Result};
use dutyroll::schedule::{ScheduleEntry, ScheduleService};
use dutyroll::DutyrollConfig;
use tracing::info_span;

use crate::cli::ScheduleArgs;

pub fn run(args: ScheduleArgs, config: &DutyrollConfig) -> Result<()> {
    let _span = info_span!("schedule", year = args.year, month = args.month).entered();

    let service = ScheduleService::new(
        config.roster_store(),
        config.anchor_store(),
        config.holiday_directory(),
    );
    // The command line counts months from 1, the engine from 0.
    let entries = service
        .generate_schedule(args.year, args.month - 1)
        .with_context(|| format!("failed to generate schedule for {}-{:02}", args.year, args.month))?;

    if args.json {
        let json = serde_json::to_string_pretty(&entries).context("failed to encode schedule")?;
        println!("{json}");
    } else {
        print!("{}", render_table(&entries));
    }
    Ok(())
}

/// One line per day: date, weekday, employee on duty, holiday note.
fn render_table(entries: &[ScheduleEntry]) -> String {
    let width = entries
        .iter()
        .filter_map(|e| e.employee.as_deref())
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("Employee".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<10}  {:<3}  {:<width$}  Note\n",
        "Date", "Day", "Employee"
    ));
    for e in entries {
        let employee = e.employee.as_deref().unwrap_or("-");
        let note = match (&e.holiday_name, e.is_off_day) {
            (Some(name), true) => format!("{name} (off)"),
            (Some(name), false) => format!("{name} (workday)"),
            (None, _) => String::new(),
        };
        let line = format!(
            "{:<10}  {:<3}  {:<width$}  {note}",
            e.date,
            e.date.weekday().short_name(),
            employee
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
