//! `roster` — interactive menu for the department roster.
//!
//! # Usage
//!
//! ```
//! roster
//! roster --config ~/.config/roster/config.toml
//! printf '1 1 Alice Manager\n5\n6\n' | roster --quiet-menu
//! ```

mod app;
mod config;
mod prompt;
mod ui;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::Settings;
use prompt::Prompter;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Employee promotion & reporting system")]
struct Args {
  /// Path to a TOML config file (max_field_len, show_menu).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Do not print the menu before each choice.
  #[arg(long)]
  quiet_menu: bool,

  /// Log level used when `RUST_LOG` is not set.
  #[arg(long, value_name = "LEVEL", default_value = "warn")]
  log_level: LevelFilter,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();

  // Diagnostics go to stderr; stdout carries the menu and outcome lines.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(args.log_level.into())
        .from_env_lossy(),
    )
    .init();

  let mut settings = Settings::load(args.config.as_deref())?;
  if args.quiet_menu {
    settings.show_menu = false;
  }
  tracing::debug!(?settings, "settings resolved");

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

  let mut app = App::new(settings);
  app.run(&mut prompter).context("console I/O failed")?;

  Ok(())
}
