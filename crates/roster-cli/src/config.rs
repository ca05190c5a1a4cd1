//! Optional TOML configuration for the menu front-end.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Characters kept from each name/role token by default.
pub const DEFAULT_MAX_FIELD_LEN: usize = 49;

/// Resolved front-end settings. Missing keys fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
  /// Names and roles longer than this are truncated.
  pub max_field_len: usize,
  /// Print the numbered menu before each choice prompt.
  pub show_menu:     bool,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      max_field_len: DEFAULT_MAX_FIELD_LEN,
      show_menu:     true,
    }
  }
}

impl Settings {
  /// Read settings from `path`, or return the defaults when no file is given.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let Some(path) = path else {
      return Ok(Self::default());
    };
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    Self::from_toml(&raw)
      .with_context(|| format!("parsing config file {}", path.display()))
  }

  pub fn from_toml(raw: &str) -> Result<Self> {
    let settings: Self = toml::from_str(raw)?;
    if settings.max_field_len == 0 {
      bail!("max_field_len must be at least 1");
    }
    Ok(settings)
  }
}
