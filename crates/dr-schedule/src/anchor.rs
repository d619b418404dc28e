//! The rotation anchor: where and with whom the rotation starts.

use dr_time::Date;

use crate::roster::Roster;

/// The `(start_date, start_employee)` pair fixing the rotation phase.
///
/// Without a `start_date` no employee is ever assigned.  A `start_employee`
/// that is unset or not on the current roster anchors at position 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScheduleAnchor {
    /// First day of the rotation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start_date: Option<Date>,
    /// Employee on duty at the first workday on or after `start_date`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start_employee: Option<String>,
}

impl ScheduleAnchor {
    /// An anchor at `start_date` with `start_employee`.
    pub fn new(start_date: Date, start_employee: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date),
            start_employee: Some(start_employee.into()),
        }
    }

    /// An anchor at `start_date` starting from roster position 0.
    pub fn starting(start_date: Date) -> Self {
        Self {
            start_date: Some(start_date),
            start_employee: None,
        }
    }

    /// Return `true` if a start date is set.
    pub fn is_set(&self) -> bool {
        self.start_date.is_some()
    }

    /// Roster position the rotation starts from.
    ///
    /// Falls back to 0 when the start employee is unset or not on `roster`.
    pub fn start_index(&self, roster: &Roster) -> usize {
        self.start_employee
            .as_deref()
            .and_then(|name| roster.position(name))
            .unwrap_or(0)
    }

    /// The start employee, when it is set but missing from `roster`.
    pub fn unknown_employee<'a>(&'a self, roster: &Roster) -> Option<&'a str> {
        self.start_employee
            .as_deref()
            .filter(|name| !roster.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::from_names(["A", "B", "C"]).unwrap()
    }

    fn monday() -> Date {
        Date::from_ymd(2024, 1, 1).unwrap()
    }

    #[test]
    fn start_index_follows_roster_position() {
        assert_eq!(ScheduleAnchor::new(monday(), "C").start_index(&roster()), 2);
    }

    #[test]
    fn unknown_or_unset_employee_defaults_to_zero() {
        let unknown = ScheduleAnchor::new(monday(), "Z");
        assert_eq!(unknown.start_index(&roster()), 0);
        assert_eq!(unknown.unknown_employee(&roster()), Some("Z"));

        let unset = ScheduleAnchor::starting(monday());
        assert_eq!(unset.start_index(&roster()), 0);
        assert_eq!(unset.unknown_employee(&roster()), None);
    }

    #[test]
    fn default_anchor_is_unset() {
        assert!(!ScheduleAnchor::default().is_set());
        assert!(ScheduleAnchor::starting(monday()).is_set());
    }
}
