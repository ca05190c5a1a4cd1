//! One-line, human-readable reports for every operation outcome.

use roster_core::{Added, Error, Linked, Promoted};

use crate::prompt::InputError;

pub fn added(added: &Added) -> String {
  let e = &added.employee;
  match &added.supervisor {
    None => format!(
      "Employee {} ({} - {}) added as department head.",
      e.id, e.name, e.role
    ),
    Some(sup) => format!(
      "Employee {} ({} - {}) added under supervisor {} ({}).",
      e.id, e.name, e.role, sup.id, sup.name
    ),
  }
}

pub fn promoted(promoted: &Promoted) -> String {
  let e = &promoted.employee;
  format!("Employee {} ({}) promoted successfully.", e.id, e.name)
}

pub fn reassigned(linked: &Linked) -> String {
  let (e, b) = (&linked.employee, &linked.boss);
  format!(
    "Employee {} ({}) now reports to {} ({}).",
    e.id, e.name, b.id, b.name
  )
}

pub fn matrix_assigned(linked: &Linked) -> String {
  let (e, b) = (&linked.employee, &linked.boss);
  format!(
    "Employee {} ({}) also reports to {} ({}) (matrix structure).",
    e.id, e.name, b.id, b.name
  )
}

pub fn roster_error(err: &Error) -> String {
  match err {
    Error::EmployeeNotFound(id) => format!("Employee with ID {id} not found."),
    Error::SupervisorNotFound(id) => {
      format!("Supervisor with ID {id} not found.")
    }
    Error::SecondarySupervisorNotFound(id) => {
      format!("Secondary Supervisor with ID {id} not found.")
    }
    Error::EmptyRoster => "No employees found.".to_string(),
    Error::NothingToPromote => "No employees to promote.".to_string(),
    Error::PromotionNotPossible(id) => format!(
      "Promotion not possible for ID {id} (not found or already at top)."
    ),
  }
}

/// Report a recoverable input problem. Other variants fall back to their
/// `Display` text.
pub fn input_error(err: &InputError) -> String {
  match err {
    InputError::InvalidSelection(_) => "Invalid choice. Try again.".to_string(),
    InputError::InvalidNumber(token) => format!("Invalid number: {token}."),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use roster_core::Roster;

  use super::*;

  #[test]
  fn add_reports_head_then_supervisor() {
    let mut r = Roster::new();
    assert_eq!(
      added(&r.add_employee(1, "Alice", "Manager")),
      "Employee 1 (Alice - Manager) added as department head."
    );
    assert_eq!(
      added(&r.add_employee(2, "Bob", "Dev")),
      "Employee 2 (Bob - Dev) added under supervisor 1 (Alice)."
    );
  }

  #[test]
  fn link_reports() {
    let mut r = Roster::new();
    r.add_employee(1, "Alice", "Manager");
    r.add_employee(2, "Bob", "Dev");

    assert_eq!(
      reassigned(&r.reassign_employee(1, 2).unwrap()),
      "Employee 1 (Alice) now reports to 2 (Bob)."
    );
    assert_eq!(
      matrix_assigned(&r.assign_matrix_supervisor(2, 1).unwrap()),
      "Employee 2 (Bob) also reports to 1 (Alice) (matrix structure)."
    );
  }

  #[test]
  fn error_reports() {
    assert_eq!(
      roster_error(&Error::EmployeeNotFound(99)),
      "Employee with ID 99 not found."
    );
    assert_eq!(
      roster_error(&Error::PromotionNotPossible(1)),
      "Promotion not possible for ID 1 (not found or already at top)."
    );
    assert_eq!(
      input_error(&InputError::InvalidSelection("9".into())),
      "Invalid choice. Try again."
    );
  }
}
