//! The ordered, deduplicated list of employees eligible for duty.

use dr_core::errors::{Error, Result};

/// An ordered roster of unique, non-empty employee names.
///
/// Order is meaningful: it is the rotation sequence.  Every constructor and
/// mutator keeps names unique (first occurrence wins) and rejects blank
/// names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<String>", into = "Vec<String>"))]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from `names`, trimming whitespace and collapsing
    /// duplicates onto their first occurrence.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if any name is blank.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Roster::new();
        for name in names {
            let name = normalize(name.as_ref())?;
            if !roster.contains(name) {
                roster.names.push(name.to_owned());
            }
        }
        Ok(roster)
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return `true` if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at rotation position `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Rotation position of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Return `true` if `name` is on the roster.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate over names in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The names as a slice, in rotation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Append `name` at the end of the rotation.  Adding a name that is
    /// already present leaves the roster unchanged.
    ///
    /// Returns `true` if the roster changed.
    pub fn add(&mut self, name: &str) -> Result<bool> {
        let name = normalize(name)?;
        if self.contains(name) {
            return Ok(false);
        }
        self.names.push(name.to_owned());
        Ok(true)
    }

    /// Remove `name`.  Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name.trim()) {
            Some(i) => {
                self.names.remove(i);
                true
            }
            None => false,
        }
    }

    /// Replace the whole roster, with the same normalisation as
    /// [`Roster::from_names`].  On error the roster is left untouched.
    pub fn replace<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        *self = Roster::from_names(names)?;
        Ok(())
    }

    /// Move `name` to rotation position `index` (clamped to the end).
    ///
    /// # Errors
    /// `Error::Precondition` if `name` is not on the roster.
    pub fn move_to(&mut self, name: &str, index: usize) -> Result<()> {
        let from = self.position(name.trim());
        dr_core::ensure!(from.is_some(), "{name:?} is not on the roster");
        let entry = self.names.remove(from.unwrap_or_default());
        let to = index.min(self.names.len());
        self.names.insert(to, entry);
        Ok(())
    }
}

fn normalize(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument("employee name must not be empty".into()));
    }
    Ok(trimmed)
}

impl TryFrom<Vec<String>> for Roster {
    type Error = Error;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Roster::from_names(names)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.names
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}
