//! # Diff Module
//!
//! Renders the change a header edit makes to a document, for previewing with
//! `--show-diff` or collecting into a file with `--save-diff`.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Manages diff rendering for header edits.
#[derive(Debug, Default, Clone)]
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,

  /// File that diffs are appended to
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether any diff output was requested.
  pub const fn is_active(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Renders a line diff between `original` and `new`.
  ///
  /// Each line is prefixed with `-`, `+` or a space, under a
  /// `Diff for <path>:` title.
  pub fn render(path: &Path, original: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(original, new);

    let mut rendered = format!("Diff for {}:\n", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      let _ = write!(rendered, "{sign}{change}");
      if change.missing_newline() {
        rendered.push('\n');
      }
    }
    rendered
  }

  /// Prints and/or saves the diff for one document.
  ///
  /// Diffs saved to a file are appended, so repeated runs accumulate in the
  /// same file.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    if !self.is_active() {
      return Ok(());
    }

    let rendered = Self::render(path, original, new);

    if self.show_diff {
      for line in rendered.lines() {
        if line.starts_with('+') {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.green()));
        } else if line.starts_with('-') {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.red()));
        } else {
          eprintln!("{line}");
        }
      }
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      writeln!(file, "{rendered}").with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}
