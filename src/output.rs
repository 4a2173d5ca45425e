//! # Output Module
//!
//! User-facing status lines for the normheader tool. Diagnostics go through
//! `tracing`; this module only prints the one-line result of a run.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::processor::HeaderOutcome;

/// Symbols used in output
pub mod symbols {
  /// Header added
  pub const ADDED: &str = "\u{2713}"; // ✓
  /// Header refreshed
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Builds the status line for a finished run, without colors.
///
/// Returns `None` when there is nothing to report.
pub fn outcome_message(outcome: HeaderOutcome, path: &Path, dry_run: bool) -> Option<String> {
  let suffix = if dry_run { " (dry run)" } else { "" };

  match outcome {
    HeaderOutcome::NoActiveDocument => None,
    HeaderOutcome::Inserted => Some(format!("Added header to {}{}", path.display(), suffix)),
    HeaderOutcome::Replaced { created_preserved } => {
      let note = if created_preserved { "" } else { ", creation date reset" };
      Some(format!("Updated header in {}{}{}", path.display(), note, suffix))
    }
  }
}

/// Prints the status line for a finished run (respects quiet mode).
pub fn print_outcome(outcome: HeaderOutcome, path: &Path, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let Some(message) = outcome_message(outcome, path, dry_run) else {
    return;
  };

  let symbol = match outcome {
    HeaderOutcome::Inserted => symbols::ADDED.if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
    _ => symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()).to_string(),
  };

  println!("{} {}", symbol, message);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_outcome_message_inserted() {
    let message = outcome_message(HeaderOutcome::Inserted, Path::new("src/main.py"), false);
    assert_eq!(message.as_deref(), Some("Added header to src/main.py"));
  }

  #[test]
  fn test_outcome_message_replaced() {
    let message = outcome_message(
      HeaderOutcome::Replaced { created_preserved: true },
      Path::new("init.lua"),
      false,
    );
    assert_eq!(message.as_deref(), Some("Updated header in init.lua"));
  }

  #[test]
  fn test_outcome_message_replaced_without_created() {
    let message = outcome_message(
      HeaderOutcome::Replaced {
        created_preserved: false,
      },
      Path::new("init.lua"),
      true,
    );
    assert_eq!(
      message.as_deref(),
      Some("Updated header in init.lua, creation date reset (dry run)")
    );
  }

  #[test]
  fn test_outcome_message_no_document() {
    assert!(outcome_message(HeaderOutcome::NoActiveDocument, Path::new(""), false).is_none());
  }
}
