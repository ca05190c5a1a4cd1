//! The read-only department listing.

use std::{fmt, slice};

use serde::Serialize;

use crate::{
  employee::{EmployeeId, EmployeeKey},
  roster::Roster,
};

const BANNER: &str = "--- Department Structure ---";
const FOOTER: &str = "------------------------------";
const EMPTY: &str = "No employees in the department.";

// ─── Rows ────────────────────────────────────────────────────────────────────

/// One line of the listing. Link names are present only when the link is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow<'a> {
  pub id:             EmployeeId,
  pub name:           &'a str,
  pub role:           &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub supervisor:     Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub secondary_boss: Option<&'a str>,
}

impl fmt::Display for ListingRow<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ID:{}, Name:{}, Role:{}", self.id, self.name, self.role)?;
    if let Some(sup) = self.supervisor {
      write!(f, ", Supervisor:{sup}")?;
    }
    if let Some(boss) = self.secondary_boss {
      write!(f, ", SecondaryBoss:{boss}")?;
    }
    Ok(())
  }
}

/// Lazy iterator over [`ListingRow`]s in chain order.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
  roster: &'a Roster,
  keys:   slice::Iter<'a, EmployeeKey>,
}

impl<'a> Iterator for Rows<'a> {
  type Item = ListingRow<'a>;

  fn next(&mut self) -> Option<Self::Item> {
    let key = *self.keys.next()?;
    let employee = self.roster.get(key)?;
    Some(ListingRow {
      id:             employee.id,
      name:           &employee.name,
      role:           &employee.role,
      supervisor:     self.roster.supervisor_of(key).map(|e| e.name.as_str()),
      secondary_boss: self
        .roster
        .secondary_boss_of(key)
        .map(|e| e.name.as_str()),
    })
  }

  fn size_hint(&self) -> (usize, Option<usize>) { self.keys.size_hint() }
}

// ─── Department ──────────────────────────────────────────────────────────────

/// A borrowed view of the roster for display. Each call to [`Self::rows`]
/// starts a fresh pass from the head.
///
/// The `Display` impl renders the full banner-framed listing, including the
/// leading blank line.
#[derive(Debug, Clone, Copy)]
pub struct Department<'a> {
  roster: &'a Roster,
}

impl<'a> Department<'a> {
  pub(crate) fn new(roster: &'a Roster) -> Self { Self { roster } }

  pub fn rows(&self) -> Rows<'a> {
    Rows {
      roster: self.roster,
      keys:   self.roster.chain().iter(),
    }
  }

  pub fn is_empty(&self) -> bool { self.roster.is_empty() }
}

impl<'a> IntoIterator for Department<'a> {
  type Item = ListingRow<'a>;
  type IntoIter = Rows<'a>;

  fn into_iter(self) -> Self::IntoIter { self.rows() }
}

impl fmt::Display for Department<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{BANNER}")?;
    if self.is_empty() {
      return writeln!(f, "{EMPTY}");
    }
    for row in self.rows() {
      writeln!(f, "{row}")?;
    }
    writeln!(f, "{FOOTER}")
  }
}
