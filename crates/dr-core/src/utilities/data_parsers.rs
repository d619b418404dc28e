//! Data parsing helpers.
//!
//! Dates cross every boundary of the system (holiday files, the anchor
//! record, command-line arguments) as `YYYY-MM-DD` strings.  Parsing is kept
//! strict so that malformed input is rejected before it reaches the engine.

/// Parse a date string in ISO 8601 calendar format (`YYYY-MM-DD`).
///
/// Exactly four year digits, two month digits and two day digits are
/// accepted; surrounding whitespace is ignored.  Range checks (month 1–12,
/// day within month) are left to the date constructor.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return None;
    }
    if !(y.bytes().chain(m.bytes()).chain(d.bytes())).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: u16 = y.parse().ok()?;
    let month: u8 = m.parse().ok()?;
    let day: u8 = d.parse().ok()?;
    Some((year, month, day))
}
