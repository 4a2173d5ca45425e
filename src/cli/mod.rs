//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod header;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use header::{HeaderArgs, run_header};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Add or refresh the header of a file
  normheader src/main.py

  # Preview the change without writing it
  normheader --dry-run --show-diff src/main.py

  # Treat a file without extension as Lua
  normheader --language lua scripts/init

  # Override settings from .normheader.toml
  normheader --author-name ana --author-address a@b --project-name X src/index.ts
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub header_args: HeaderArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
