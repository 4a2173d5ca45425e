//! # Profile Module
//!
//! This module maps editor language identifiers to the comment delimiters and
//! interior column width used when rendering a header block.
//!
//! The module includes:
//! - [`CommentProfile`] describing how a header line is wrapped
//! - [`select_profile`] for looking up the profile of a language
//! - [`language_for_path`] for deriving a language identifier from a file
//!   extension when no host supplies one
//!
//! ## Example
//!
//! ```rust
//! use normheader::profile::{language_for_path, select_profile};
//! use std::path::Path;
//!
//! let language = language_for_path(Path::new("init.lua"));
//! let profile = select_profile(language);
//!
//! assert_eq!(profile.start, "-- ");
//! assert_eq!(profile.width, 75);
//! ```

use std::path::Path;

use crate::verbose_log;

/// Comment delimiters and fixed interior width for one language.
///
/// Every header line is rendered as `start + content + end`, where `content`
/// is exactly `width` columns wide. The widths are chosen so that each line
/// lands on the 80-column mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentProfile {
  /// Opening delimiter placed before each line's content
  pub start: &'static str,

  /// Closing delimiter placed after each line's content
  pub end: &'static str,

  /// Number of interior columns between the delimiters; never zero
  pub width: usize,
}

impl CommentProfile {
  /// Create a profile from its delimiters and width.
  ///
  /// `width` must be non-zero and should stay within a line's worth of
  /// columns: the separator it produces is part of the detection pattern.
  pub const fn new(start: &'static str, end: &'static str, width: usize) -> Self {
    debug_assert!(width > 0, "comment profile width must be non-zero");
    Self { start, end, width }
  }

  /// Wrap a single line of content in this profile's delimiters.
  pub fn wrap(&self, content: &str) -> String {
    format!("{}{}{}", self.start, content, self.end)
  }

  /// The separator content: `width` tildes.
  pub fn separator(&self) -> String {
    "~".repeat(self.width)
  }
}

/// Profile used by Lua files.
pub const LUA: CommentProfile = CommentProfile::new("-- ", "--", 75);

/// Profile used by Python files.
pub const PYTHON: CommentProfile = CommentProfile::new("# ", " #", 76);

/// Profile used by JavaScript files, and the fallback for every unknown
/// language.
pub const JAVASCRIPT: CommentProfile = CommentProfile::new("/* ", " */", 74);

/// Profile used by TypeScript files.
pub const TYPESCRIPT: CommentProfile = CommentProfile::new("/* ", " */", 74);

/// Returns the comment profile registered for a language identifier.
///
/// Only exact matches are recognized (`"lua"`, `"python"`, `"javascript"`,
/// `"typescript"`). Any other identifier, including the empty string, falls
/// back to the JavaScript profile.
pub fn select_profile(language_id: &str) -> CommentProfile {
  match language_id {
    "lua" => LUA,
    "python" => PYTHON,
    "javascript" => JAVASCRIPT,
    "typescript" => TYPESCRIPT,
    other => {
      verbose_log!("No comment profile for language '{}', using javascript", other);
      JAVASCRIPT
    }
  }
}

/// Derives an editor language identifier from a file path.
///
/// The identifiers mirror the ones editors report for the active document, so
/// the result can be passed straight to [`select_profile`]. Files whose type
/// cannot be determined are reported as `"plaintext"`.
pub fn language_for_path(path: &Path) -> &'static str {
  let extension = path
    .extension()
    .and_then(|ext| ext.to_str())
    .unwrap_or("")
    .to_lowercase();

  match extension.as_str() {
    "lua" => "lua",
    "py" | "pyw" | "pyi" => "python",
    "js" | "mjs" | "cjs" => "javascript",
    "jsx" => "javascriptreact",
    "ts" | "mts" | "cts" => "typescript",
    "tsx" => "typescriptreact",
    _ => "plaintext",
  }
}
