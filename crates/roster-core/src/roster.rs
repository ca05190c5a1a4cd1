//! [`Roster`] — the ordered reporting chain and its operations.
//!
//! The roster keeps two structures:
//!
//! - an arena of [`Employee`] records in creation order, addressed by
//!   [`EmployeeKey`];
//! - the chain, a sequence of keys from the department head to the most
//!   junior employee.
//!
//! Promotion only rearranges the chain. Reporting links are keys into the
//! arena, so they survive any reordering.

use tracing::debug;

use crate::{
  Error, Result,
  department::Department,
  employee::{Employee, EmployeeId, EmployeeKey, Summary},
};

// ─── Outcomes ────────────────────────────────────────────────────────────────

/// Returned by [`Roster::add_employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
  pub employee:   Summary,
  /// The previous last element, now the new record's supervisor. `None` when
  /// the new record became the department head.
  pub supervisor: Option<Summary>,
}

impl Added {
  pub fn is_head(&self) -> bool { self.supervisor.is_none() }
}

/// Returned by [`Roster::promote_employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promoted {
  pub employee: Summary,
  /// The former predecessor, who now reports to `employee`.
  pub demoted:  Summary,
}

/// Returned by [`Roster::reassign_employee`] and
/// [`Roster::assign_matrix_supervisor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linked {
  pub employee: Summary,
  pub boss:     Summary,
}

// ─── Roster ──────────────────────────────────────────────────────────────────

/// An in-memory department: one reporting chain plus matrix links.
///
/// Ids are not required to be unique. Every lookup scans the chain from the
/// head and the first match wins.
#[derive(Debug, Clone, Default)]
pub struct Roster {
  records: Vec<Employee>,
  chain:   Vec<EmployeeKey>,
}

impl Roster {
  pub fn new() -> Self { Self::default() }

  // ── Reads ─────────────────────────────────────────────────────────────

  pub fn len(&self) -> usize { self.chain.len() }

  pub fn is_empty(&self) -> bool { self.chain.is_empty() }

  /// The department head, if any.
  pub fn head(&self) -> Option<&Employee> {
    self.chain.first().map(|&key| self.record(key))
  }

  /// Look up a record by handle. Returns `None` for a handle issued by a
  /// different roster that is out of range here.
  pub fn get(&self, key: EmployeeKey) -> Option<&Employee> {
    self.records.get(key.0)
  }

  /// The first employee in chain order whose id is `id`.
  pub fn find(&self, id: EmployeeId) -> Option<EmployeeKey> {
    self.position(id).map(|pos| self.chain[pos])
  }

  /// Employees in chain order, head first.
  pub fn iter(&self) -> impl Iterator<Item = (EmployeeKey, &Employee)> + '_ {
    self.chain.iter().map(|&key| (key, self.record(key)))
  }

  /// Handles in chain order, head first.
  pub fn chain(&self) -> &[EmployeeKey] { &self.chain }

  pub fn supervisor_of(&self, key: EmployeeKey) -> Option<&Employee> {
    self.get(key)?.supervisor.map(|sup| self.record(sup))
  }

  pub fn secondary_boss_of(&self, key: EmployeeKey) -> Option<&Employee> {
    self.get(key)?.secondary_boss.map(|boss| self.record(boss))
  }

  /// A read-only listing of the department in current chain order.
  pub fn department(&self) -> Department<'_> { Department::new(self) }

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Append a new employee at the junior end of the chain.
  ///
  /// The first employee becomes the department head with no supervisor.
  /// Every later one reports to whoever was last before the append.
  pub fn add_employee(
    &mut self,
    id: EmployeeId,
    name: impl Into<String>,
    role: impl Into<String>,
  ) -> Added {
    let mut employee = Employee::new(id, name.into(), role.into());
    let previous_last = self.chain.last().copied();
    employee.supervisor = previous_last;

    let key = EmployeeKey(self.records.len());
    let summary = employee.summary();
    self.records.push(employee);
    self.chain.push(key);

    let supervisor = previous_last.map(|sup| self.record(sup).summary());
    debug!(id, position = self.chain.len() - 1, "employee added");

    Added {
      employee: summary,
      supervisor,
    }
  }

  /// Move an employee one step toward the head.
  ///
  /// The target swaps places with its immediate predecessor, inherits the
  /// predecessor's supervisor, and the predecessor now reports to the target.
  /// No other record is touched.
  pub fn promote_employee(&mut self, id: EmployeeId) -> Result<Promoted> {
    if self.chain.len() < 2 {
      return Err(Error::NothingToPromote);
    }
    let pos = self
      .position(id)
      .filter(|&pos| pos > 0)
      .ok_or(Error::PromotionNotPossible(id))?;

    let target = self.chain[pos];
    let predecessor = self.chain[pos - 1];
    self.chain.swap(pos - 1, pos);

    let inherited = self.record(predecessor).supervisor;
    self.record_mut(target).supervisor = inherited;
    self.record_mut(predecessor).supervisor = Some(target);

    debug!(id, position = pos - 1, "employee promoted");
    Ok(Promoted {
      employee: self.record(target).summary(),
      demoted:  self.record(predecessor).summary(),
    })
  }

  /// Point an employee's primary `supervisor` at another employee.
  ///
  /// No cycle check: an employee may be made their own supervisor.
  pub fn reassign_employee(
    &mut self,
    emp_id: EmployeeId,
    new_sup_id: EmployeeId,
  ) -> Result<Linked> {
    let (employee, boss) =
      self.resolve_pair(emp_id, new_sup_id, Error::SupervisorNotFound)?;
    self.record_mut(employee).supervisor = Some(boss);
    debug!(emp_id, new_sup_id, "supervisor reassigned");
    Ok(self.linked(employee, boss))
  }

  /// Set an employee's matrix (secondary) supervisor.
  pub fn assign_matrix_supervisor(
    &mut self,
    emp_id: EmployeeId,
    boss_id: EmployeeId,
  ) -> Result<Linked> {
    let (employee, boss) = self.resolve_pair(
      emp_id,
      boss_id,
      Error::SecondarySupervisorNotFound,
    )?;
    self.record_mut(employee).secondary_boss = Some(boss);
    debug!(emp_id, boss_id, "matrix supervisor assigned");
    Ok(self.linked(employee, boss))
  }

  // ── Internals ─────────────────────────────────────────────────────────

  fn position(&self, id: EmployeeId) -> Option<usize> {
    self.chain.iter().position(|&key| self.record(key).id == id)
  }

  /// Resolve both ids before any mutation. The employee is reported missing
  /// ahead of the boss.
  fn resolve_pair(
    &self,
    emp_id: EmployeeId,
    boss_id: EmployeeId,
    boss_missing: fn(EmployeeId) -> Error,
  ) -> Result<(EmployeeKey, EmployeeKey)> {
    if self.is_empty() {
      return Err(Error::EmptyRoster);
    }
    let employee = self.find(emp_id);
    let boss = self.find(boss_id);
    let employee = employee.ok_or(Error::EmployeeNotFound(emp_id))?;
    let boss = boss.ok_or_else(|| boss_missing(boss_id))?;
    Ok((employee, boss))
  }

  fn linked(&self, employee: EmployeeKey, boss: EmployeeKey) -> Linked {
    Linked {
      employee: self.record(employee).summary(),
      boss:     self.record(boss).summary(),
    }
  }

  // Keys are only minted by this roster and records are never removed.
  fn record(&self, key: EmployeeKey) -> &Employee { &self.records[key.0] }

  fn record_mut(&mut self, key: EmployeeKey) -> &mut Employee {
    &mut self.records[key.0]
  }
}
