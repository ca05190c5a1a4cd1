//! Menu state and dispatch.

use std::io::{BufRead, Write};

use roster_core::Roster;
use tracing::{info, warn};

use crate::{
  config::Settings,
  prompt::{InputError, Prompter},
  ui::{self, report},
};

// ─── Menu ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
  Add,
  Promote,
  Reassign,
  AssignMatrix,
  Display,
  Exit,
}

impl MenuChoice {
  /// Parse a menu token (`"1"` to `"6"`).
  pub fn parse(token: &str) -> Result<Self, InputError> {
    match token.parse::<i32>() {
      Ok(1) => Ok(Self::Add),
      Ok(2) => Ok(Self::Promote),
      Ok(3) => Ok(Self::Reassign),
      Ok(4) => Ok(Self::AssignMatrix),
      Ok(5) => Ok(Self::Display),
      Ok(6) => Ok(Self::Exit),
      _ => Err(InputError::InvalidSelection(token.to_owned())),
    }
  }
}

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Exit,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level front-end state: the roster plus settings.
pub struct App {
  roster:   Roster,
  settings: Settings,
}

impl App {
  pub fn new(settings: Settings) -> Self {
    Self {
      roster: Roster::new(),
      settings,
    }
  }

  #[cfg(test)]
  pub fn roster(&self) -> &Roster { &self.roster }

  /// Run the menu until the user exits or input runs out.
  pub fn run<R: BufRead, W: Write>(
    &mut self,
    io: &mut Prompter<R, W>,
  ) -> Result<(), InputError> {
    loop {
      match self.step(io) {
        Ok(Flow::Continue) => {}
        Ok(Flow::Exit) => return Ok(()),
        Err(InputError::EndOfInput) => {
          info!("end of input, exiting");
          return Ok(());
        }
        Err(e) => return Err(e),
      }
    }
  }

  /// Show the menu, read one choice, and perform it.
  ///
  /// Bad selections and malformed ids are reported and leave the roster
  /// untouched.
  pub fn step<R: BufRead, W: Write>(
    &mut self,
    io: &mut Prompter<R, W>,
  ) -> Result<Flow, InputError> {
    if self.settings.show_menu {
      io.print(ui::MENU)?;
    }
    let result = io
      .prompt(ui::CHOICE_PROMPT)
      .and_then(|token| MenuChoice::parse(&token))
      .and_then(|choice| self.dispatch(choice, io));

    match result {
      Err(e) if e.is_recoverable() => {
        io.discard_line();
        io.say(report::input_error(&e))?;
        Ok(Flow::Continue)
      }
      other => other,
    }
  }

  fn dispatch<R: BufRead, W: Write>(
    &mut self,
    choice: MenuChoice,
    io: &mut Prompter<R, W>,
  ) -> Result<Flow, InputError> {
    match choice {
      MenuChoice::Add => {
        let id = io.prompt_id("Enter Employee ID: ")?;
        let name = io.prompt("Enter Employee Name: ")?;
        let role = io.prompt("Enter Employee Role: ")?;
        let name = self.clamp("name", name);
        let role = self.clamp("role", role);
        let added = self.roster.add_employee(id, name, role);
        io.say(report::added(&added))?;
      }

      MenuChoice::Promote => {
        let id = io.prompt_id("Enter Employee ID to promote: ")?;
        let line = match self.roster.promote_employee(id) {
          Ok(promoted) => report::promoted(&promoted),
          Err(e) => report::roster_error(&e),
        };
        io.say(line)?;
      }

      MenuChoice::Reassign => {
        let emp_id = io.prompt_id("Enter Employee ID: ")?;
        let sup_id = io.prompt_id("Enter New Supervisor ID: ")?;
        let line = match self.roster.reassign_employee(emp_id, sup_id) {
          Ok(linked) => report::reassigned(&linked),
          Err(e) => report::roster_error(&e),
        };
        io.say(line)?;
      }

      MenuChoice::AssignMatrix => {
        let emp_id = io.prompt_id("Enter Employee ID: ")?;
        let boss_id = io.prompt_id("Enter Secondary Supervisor ID: ")?;
        let line = match self.roster.assign_matrix_supervisor(emp_id, boss_id)
        {
          Ok(linked) => report::matrix_assigned(&linked),
          Err(e) => report::roster_error(&e),
        };
        io.say(line)?;
      }

      MenuChoice::Display => io.print(self.roster.department())?,

      MenuChoice::Exit => {
        io.say("Exiting program.")?;
        return Ok(Flow::Exit);
      }
    }
    Ok(Flow::Continue)
  }

  /// Truncate a name or role to `max_field_len` characters.
  fn clamp(&self, field: &'static str, value: String) -> String {
    let max = self.settings.max_field_len;
    if value.chars().count() <= max {
      return value;
    }
    warn!(field, max, "input truncated");
    value.chars().take(max).collect()
  }
}
