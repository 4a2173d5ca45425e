//! # Document Module
//!
//! This module defines the narrow interface between header processing and the
//! host that owns the document: a read-only [`Document`] snapshot, the single
//! [`TextEdit`] a run produces, and the [`Editor`] trait through which the
//! edit is applied.
//!
//! [`InMemoryEditor`] keeps the document in memory. The file-backed editor
//! used by the command-line tool lives in [`crate::processor::FileEditor`].

use std::ops::Range;
use std::path::PathBuf;

/// Snapshot of the active document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
  /// Path of the document; only its base name is rendered
  pub path: PathBuf,

  /// Editor language identifier, e.g. `"python"`
  pub language_id: String,

  /// Full document text
  pub text: String,
}

impl Document {
  pub fn new(path: impl Into<PathBuf>, language_id: impl Into<String>, text: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      language_id: language_id.into(),
      text: text.into(),
    }
  }

  /// Base name of the document path, directories stripped.
  pub fn file_name(&self) -> String {
    self
      .path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_default()
  }
}

/// A single atomic change to a document.
///
/// Offsets are byte offsets into the document text and must fall on
/// character boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
  /// Insert `text` at `offset`, shifting what follows.
  Insert { offset: usize, text: String },

  /// Replace the bytes in `range` with `text`.
  Replace { range: Range<usize>, text: String },
}

impl TextEdit {
  /// The text this edit writes into the document.
  pub fn new_text(&self) -> &str {
    match self {
      Self::Insert { text, .. } | Self::Replace { text, .. } => text,
    }
  }

  pub const fn is_insert(&self) -> bool {
    matches!(self, Self::Insert { .. })
  }

  /// Returns `content` with this edit applied.
  ///
  /// # Errors
  ///
  /// Returns [`EditError::InvalidRange`] if the edit's offsets fall outside
  /// `content` or inside a multi-byte character.
  pub fn apply_to(&self, content: &str) -> Result<String, EditError> {
    let range = match self {
      Self::Insert { offset, .. } => *offset..*offset,
      Self::Replace { range, .. } => range.clone(),
    };

    if range.start > range.end || !content.is_char_boundary(range.start) || !content.is_char_boundary(range.end) {
      return Err(EditError::InvalidRange {
        start: range.start,
        end: range.end,
        len: content.len(),
      });
    }

    let mut result = String::with_capacity(content.len() - range.len() + self.new_text().len());
    result.push_str(&content[..range.start]);
    result.push_str(self.new_text());
    result.push_str(&content[range.end..]);
    Ok(result)
  }
}

/// Reasons a host declines an edit.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
  /// The document cannot be modified.
  #[error("Document is read-only: {}", path.display())]
  ReadOnly { path: PathBuf },

  /// The edit does not fit the current document text.
  #[error("Edit range {start}..{end} is invalid for a document of {len} bytes")]
  InvalidRange { start: usize, end: usize, len: usize },

  /// Writing the document failed.
  #[error("Failed to write document {}: {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },
}

/// Host-side access to the active document.
///
/// Implementations provide the document snapshot and apply edits as a single
/// atomic operation: either the whole edit lands or the document is left
/// untouched.
#[allow(async_fn_in_trait)]
pub trait Editor {
  /// The document the action should operate on, if any.
  fn active_document(&self) -> Option<&Document>;

  /// Applies `edit` to the active document.
  async fn apply_edit(&mut self, edit: TextEdit) -> Result<(), EditError>;
}

/// Editor holding its document in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEditor {
  document: Option<Document>,
  read_only: bool,
}

impl InMemoryEditor {
  /// An editor with no open document.
  pub fn empty() -> Self {
    Self::default()
  }

  pub const fn with_document(document: Document) -> Self {
    Self {
      document: Some(document),
      read_only: false,
    }
  }

  /// Marks the document read-only; later edits are rejected.
  pub const fn set_read_only(&mut self, read_only: bool) {
    self.read_only = read_only;
  }

  /// Current document text, if a document is open.
  pub fn text(&self) -> Option<&str> {
    self.document.as_ref().map(|doc| doc.text.as_str())
  }

  /// Replaces the document text, as an external edit would.
  pub fn set_text(&mut self, text: impl Into<String>) {
    if let Some(doc) = self.document.as_mut() {
      doc.text = text.into();
    }
  }
}

impl Editor for InMemoryEditor {
  fn active_document(&self) -> Option<&Document> {
    self.document.as_ref()
  }

  async fn apply_edit(&mut self, edit: TextEdit) -> Result<(), EditError> {
    let Some(doc) = self.document.as_mut() else {
      return Ok(());
    };

    if self.read_only {
      return Err(EditError::ReadOnly { path: doc.path.clone() });
    }

    doc.text = edit.apply_to(&doc.text)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_file_name_strips_directories() {
    let doc = Document::new("/home/ana/project/src/main.py", "python", "");
    assert_eq!(doc.file_name(), "main.py");
  }

  #[test]
  fn test_file_name_of_bare_name() {
    let doc = Document::new("Untitled-1", "plaintext", "");
    assert_eq!(doc.file_name(), "Untitled-1");
  }

  #[test]
  fn test_insert_at_start() {
    let edit = TextEdit::Insert {
      offset: 0,
      text: "header\n".to_string(),
    };
    assert_eq!(edit.apply_to("body\n").expect("edit should apply"), "header\nbody\n");
  }

  #[test]
  fn test_replace_range() {
    let edit = TextEdit::Replace {
      range: 4..7,
      text: "NEW".to_string(),
    };
    assert_eq!(edit.apply_to("pre-old-post").expect("edit should apply"), "pre-NEW-post");
  }

  #[test]
  fn test_insert_into_empty_document() {
    let edit = TextEdit::Insert {
      offset: 0,
      text: "header".to_string(),
    };
    assert_eq!(edit.apply_to("").expect("edit should apply"), "header");
  }

  #[test]
  fn test_out_of_bounds_range() {
    let edit = TextEdit::Replace {
      range: 2..10,
      text: String::new(),
    };
    assert!(matches!(edit.apply_to("short"), Err(EditError::InvalidRange { .. })));
  }

  #[test]
  fn test_range_inside_multibyte_character() {
    let edit = TextEdit::Insert {
      offset: 1,
      text: "x".to_string(),
    };
    assert!(matches!(edit.apply_to("©"), Err(EditError::InvalidRange { .. })));
  }

  #[test]
  fn test_new_text_and_kind() {
    let insert = TextEdit::Insert {
      offset: 0,
      text: "a".to_string(),
    };
    let replace = TextEdit::Replace {
      range: 0..1,
      text: "b".to_string(),
    };
    assert!(insert.is_insert());
    assert!(!replace.is_insert());
    assert_eq!(insert.new_text(), "a");
    assert_eq!(replace.new_text(), "b");
  }
}
