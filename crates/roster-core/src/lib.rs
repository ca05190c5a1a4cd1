//! Core types and operations for the department roster.
//!
//! This crate is deliberately free of console I/O. The front-end (`roster-cli`)
//! owns a [`Roster`] and renders the typed outcomes returned by its
//! operations.

pub mod department;
pub mod employee;
pub mod error;
pub mod roster;

pub use department::{Department, ListingRow};
pub use employee::{Employee, EmployeeId, EmployeeKey, Summary};
pub use error::{Error, ErrorKind, Result};
pub use roster::{Added, Linked, Promoted, Roster};
