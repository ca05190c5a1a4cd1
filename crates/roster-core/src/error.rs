//! Error types for `roster-core`.

use thiserror::Error;

use crate::employee::EmployeeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("employee not found: {0}")]
  EmployeeNotFound(EmployeeId),

  #[error("supervisor not found: {0}")]
  SupervisorNotFound(EmployeeId),

  #[error("secondary supervisor not found: {0}")]
  SecondarySupervisorNotFound(EmployeeId),

  #[error("roster is empty")]
  EmptyRoster,

  #[error("fewer than two employees, nothing to promote")]
  NothingToPromote,

  #[error("cannot promote {0}: not found or already at top")]
  PromotionNotPossible(EmployeeId),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// A referenced employee or supervisor id does not exist.
  NotFound,
  /// The roster is not in a state where the operation applies.
  PreconditionFailed,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::EmployeeNotFound(_)
      | Self::SupervisorNotFound(_)
      | Self::SecondarySupervisorNotFound(_)
      | Self::EmptyRoster => ErrorKind::NotFound,
      Self::NothingToPromote | Self::PromotionNotPossible(_) => {
        ErrorKind::PreconditionFailed
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
