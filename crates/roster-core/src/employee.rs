//! Employee records and the handles that link them.
//!
//! Records live in an arena owned by [`crate::Roster`]. Reporting links are
//! [`EmployeeKey`] handles into that arena rather than owning pointers, so the
//! chain order can be rearranged without invalidating any link.

use serde::Serialize;

/// Caller-supplied employee id. Not required to be unique.
pub type EmployeeId = i32;

/// A stable handle to a record inside a [`crate::Roster`].
///
/// Handles are only meaningful for the roster that issued them. Records are
/// never removed, so a handle stays valid for the roster's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EmployeeKey(pub(crate) usize);

/// A single employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
  pub id:             EmployeeId,
  pub name:           String,
  pub role:           String,
  /// Primary reporting link. Settable independently of chain position.
  pub supervisor:     Option<EmployeeKey>,
  /// Matrix reporting link. Never participates in ordering.
  pub secondary_boss: Option<EmployeeKey>,
}

impl Employee {
  pub(crate) fn new(id: EmployeeId, name: String, role: String) -> Self {
    Self {
      id,
      name,
      role,
      supervisor: None,
      secondary_boss: None,
    }
  }

  /// An owned snapshot of the identifying fields.
  pub fn summary(&self) -> Summary {
    Summary {
      id:   self.id,
      name: self.name.clone(),
      role: self.role.clone(),
    }
  }
}

/// Owned copy of an employee's identifying fields, returned in operation
/// outcomes so callers need not hold a borrow on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
  pub id:   EmployeeId,
  pub name: String,
  pub role: String,
}
