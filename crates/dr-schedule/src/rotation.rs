//! Mapping workday ordinals onto the roster.
//!
//! The employee for workday ordinal `k` (1-based, counted from the anchor
//! date) is `roster[(start_index + k - 1) mod N]`.  Workdays before the
//! anchor date have ordinal 0 and resolve to `roster[(start_index - 1) mod N]`.

use crate::roster::Roster;

/// Resolution was attempted against a roster with no entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot resolve a rotation over an empty roster")]
pub struct EmptyRoster;

/// A roster paired with the position the rotation starts from.
#[derive(Debug, Clone, Copy)]
pub struct Rotation<'a> {
    roster: &'a Roster,
    start_index: usize,
}

impl<'a> Rotation<'a> {
    /// Rotate over `roster` starting at `start_index`.
    pub fn new(roster: &'a Roster, start_index: usize) -> Self {
        Self {
            roster,
            start_index,
        }
    }

    /// Number of positions in one full cycle.
    pub fn period(&self) -> usize {
        self.roster.len()
    }

    /// The employee on duty for workday ordinal `ordinal`.
    pub fn resolve(&self, ordinal: usize) -> Result<&'a str, EmptyRoster> {
        resolve(self.roster, self.start_index, ordinal)
    }
}

/// The employee on duty for workday ordinal `ordinal`.
///
/// # Errors
/// [`EmptyRoster`] when `roster` has no entries.
pub fn resolve(roster: &Roster, start_index: usize, ordinal: usize) -> Result<&str, EmptyRoster> {
    let n = roster.len();
    if n == 0 {
        return Err(EmptyRoster);
    }
    let slot = (start_index % n + ordinal % n + n - 1) % n;
    roster.get(slot).ok_or(EmptyRoster)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Roster {
        Roster::from_names(["A", "B", "C"]).unwrap()
    }

    #[test]
    fn first_ordinal_is_start_employee() {
        let r = abc();
        assert_eq!(resolve(&r, 0, 1), Ok("A"));
        assert_eq!(resolve(&r, 2, 1), Ok("C"));
    }

    #[test]
    fn advances_and_wraps() {
        let r = abc();
        let got: Vec<&str> = (1..=5).map(|k| resolve(&r, 0, k).unwrap()).collect();
        assert_eq!(got, ["A", "B", "C", "A", "B"]);
    }

    #[test]
    fn ordinal_zero_is_the_previous_position() {
        let r = abc();
        assert_eq!(Rotation::new(&r, 0).resolve(0), Ok("C"));
        assert_eq!(Rotation::new(&r, 1).resolve(0), Ok("A"));
        assert_eq!(Rotation::new(&r, 2).resolve(0), Ok("B"));
    }

    #[test]
    fn start_index_past_the_end_wraps() {
        let r = abc();
        assert_eq!(resolve(&r, 4, 1), Ok("B"));
        assert_eq!(resolve(&r, 3, 0), Ok("C"));
    }

    #[test]
    fn empty_roster_fails() {
        assert_eq!(resolve(&Roster::new(), 0, 1), Err(EmptyRoster));
    }
}
