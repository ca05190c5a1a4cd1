//! Token-oriented console input.
//!
//! Input is consumed as whitespace-delimited tokens, so several answers may
//! be typed on one line (`1 7 Alice Manager`) and blank lines are skipped.

use std::{
  collections::VecDeque,
  fmt,
  io::{self, BufRead, Write},
};

use roster_core::EmployeeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
  #[error("invalid menu selection: {0:?}")]
  InvalidSelection(String),

  #[error("invalid number: {0:?}")]
  InvalidNumber(String),

  #[error("end of input")]
  EndOfInput,

  #[error("i/o error: {0}")]
  Io(#[from] io::Error),
}

impl InputError {
  /// Whether the menu loop can report this and carry on.
  pub fn is_recoverable(&self) -> bool {
    matches!(self, Self::InvalidSelection(_) | Self::InvalidNumber(_))
  }
}

/// Prompts on `W` and reads answers from `R`.
pub struct Prompter<R, W> {
  input:   R,
  output:  W,
  pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self {
      input,
      output,
      pending: VecDeque::new(),
    }
  }

  /// Print `text` without a newline and return the next token.
  pub fn prompt(&mut self, text: &str) -> Result<String, InputError> {
    write!(self.output, "{text}")?;
    self.output.flush()?;
    self.next_token()
  }

  /// Like [`Self::prompt`], but the token must be an integer id.
  pub fn prompt_id(&mut self, text: &str) -> Result<EmployeeId, InputError> {
    let token = self.prompt(text)?;
    token.parse().map_err(|_| InputError::InvalidNumber(token))
  }

  /// Write one line of output.
  pub fn say(&mut self, line: impl fmt::Display) -> Result<(), InputError> {
    writeln!(self.output, "{line}")?;
    Ok(())
  }

  /// Write preformatted output verbatim.
  pub fn print(&mut self, text: impl fmt::Display) -> Result<(), InputError> {
    write!(self.output, "{text}")?;
    Ok(())
  }

  /// Drop whatever remains of the current input line.
  pub fn discard_line(&mut self) { self.pending.clear(); }

  fn next_token(&mut self) -> Result<String, InputError> {
    loop {
      if let Some(token) = self.pending.pop_front() {
        return Ok(token);
      }
      // Any bytes are accepted; invalid UTF-8 is replaced, not rejected.
      let mut line = Vec::new();
      if self.input.read_until(b'\n', &mut line)? == 0 {
        return Err(InputError::EndOfInput);
      }
      self.pending.extend(
        String::from_utf8_lossy(&line)
          .split_whitespace()
          .map(str::to_owned),
      );
    }
  }
}
