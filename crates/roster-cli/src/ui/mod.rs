//! Console rendering: the menu banner and the outcome lines.

pub mod report;

/// The numbered menu shown before each choice prompt.
pub const MENU: &str = "\n=== Employee Promotion & Reporting System ===\n\
1. Add Employee\n\
2. Promote Employee\n\
3. Reassign Supervisor\n\
4. Assign Matrix Supervisor\n\
5. Display Department\n\
6. Exit\n";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
