//! # Processor Module
//!
//! This module contains the header action itself: given an [`Editor`], find
//! the active document, locate any header a previous run left behind, render
//! a fresh header and apply it as a single edit.
//!
//! The module is organized into:
//! - [`HeaderProcessor`] - the action, usable against any [`Editor`]
//! - [`file_editor`] - an [`Editor`] over a file on disk
//!
//! ## Example
//!
//! ```rust
//! use normheader::config::Settings;
//! use normheader::document::{Document, InMemoryEditor};
//! use normheader::processor::{HeaderOutcome, HeaderProcessor};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let mut editor = InMemoryEditor::with_document(Document::new("main.py", "python", "print()\n"));
//! let processor = HeaderProcessor::new(Settings::default());
//!
//! let outcome = processor.run(&mut editor).await?;
//!
//! assert_eq!(outcome, HeaderOutcome::Inserted);
//! assert!(editor.text().is_some_and(|text| text.ends_with("\n\nprint()\n")));
//! # Ok(())
//! # }
//! ```

mod file_editor;

use std::path::PathBuf;

use chrono::NaiveDateTime;
pub use file_editor::FileEditor;
use tracing::{debug, trace};

use crate::config::Settings;
use crate::detection::{ExistingHeader, HeaderDetector};
use crate::document::{Document, EditError, Editor, TextEdit};
use crate::header::render_header_at;
use crate::profile::{CommentProfile, select_profile};

/// What a header run did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOutcome {
  /// There was no active document; nothing happened.
  NoActiveDocument,

  /// No header was found; one was inserted at the start of the document.
  Inserted,

  /// An existing header was replaced.
  Replaced {
    /// Whether the previous Created timestamp was carried over
    created_preserved: bool,
  },
}

/// Error type for header runs.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
  /// The host declined the edit; the document is unchanged.
  #[error("Edit to {} was rejected", path.display())]
  EditRejected {
    path: PathBuf,
    #[source]
    source: EditError,
  },
}

/// The edit a header run would make, before it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPlan {
  /// Profile selected for the document's language
  pub profile: CommentProfile,

  /// Header found in the document, if any
  pub existing: Option<ExistingHeader>,

  /// Replace-or-insert edit carrying the rendered header
  pub edit: TextEdit,
}

impl HeaderPlan {
  pub fn outcome(&self) -> HeaderOutcome {
    match self.existing {
      Some(ref existing) => HeaderOutcome::Replaced {
        created_preserved: existing.created.is_some(),
      },
      None => HeaderOutcome::Inserted,
    }
  }
}

/// Inserts or refreshes the header of the active document.
///
/// Every run is independent: the header is recomputed from the current
/// document text and the processor's settings.
#[derive(Debug, Clone, Default)]
pub struct HeaderProcessor {
  settings: Settings,
}

impl HeaderProcessor {
  pub const fn new(settings: Settings) -> Self {
    Self { settings }
  }

  /// Computes the header edit for `doc`, stamped with the current local time.
  pub fn plan(&self, doc: &Document) -> HeaderPlan {
    self.plan_at(doc, &chrono::Local::now().naive_local())
  }

  /// Computes the header edit for `doc` using `now` as the Updated timestamp.
  pub fn plan_at(&self, doc: &Document, now: &NaiveDateTime) -> HeaderPlan {
    let file_name = doc.file_name();
    let profile = select_profile(&doc.language_id);

    let detector = HeaderDetector::new(&profile);
    trace!("Header pattern: {}", detector.as_str());

    let existing = detector.find(&doc.text);
    match existing {
      Some(ref found) => debug!(
        "Found header in {} at {:?} (created: {:?})",
        file_name, found.span, found.created
      ),
      None => debug!("No header found in {}", file_name),
    }

    let prior_created = existing.as_ref().and_then(|found| found.created.as_deref());
    let header = render_header_at(&file_name, &self.settings, &profile, prior_created, now);

    let edit = match existing {
      Some(ref found) => TextEdit::Replace {
        range: found.span.clone(),
        text: header,
      },
      None => TextEdit::Insert { offset: 0, text: header },
    };

    HeaderPlan {
      profile,
      existing,
      edit,
    }
  }

  /// Runs the header action against `editor`.
  ///
  /// Without an active document this is a silent no-op returning
  /// [`HeaderOutcome::NoActiveDocument`].
  ///
  /// # Errors
  ///
  /// Returns [`HeaderError::EditRejected`] if the editor declines the edit.
  pub async fn run<E: Editor>(&self, editor: &mut E) -> Result<HeaderOutcome, HeaderError> {
    let Some(doc) = editor.active_document() else {
      debug!("No active document, nothing to do");
      return Ok(HeaderOutcome::NoActiveDocument);
    };

    let path = doc.path.clone();
    let plan = self.plan(doc);
    let outcome = plan.outcome();

    editor
      .apply_edit(plan.edit)
      .await
      .map_err(|source| HeaderError::EditRejected { path, source })?;

    Ok(outcome)
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::profile::{JAVASCRIPT, LUA, PYTHON};

  fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
      .and_then(|date| date.and_hms_opt(hour, 0, 0))
      .expect("valid date")
  }

  #[test]
  fn test_plan_inserts_when_no_header() {
    let doc = Document::new("src/app.ts", "typescript", "export {};\n");
    let plan = HeaderProcessor::default().plan_at(&doc, &at(10));

    assert_eq!(plan.profile, JAVASCRIPT);
    assert!(plan.existing.is_none());
    assert_eq!(plan.outcome(), HeaderOutcome::Inserted);
    match plan.edit {
      TextEdit::Insert { offset, ref text } => {
        assert_eq!(offset, 0);
        assert!(text.contains("app.ts"));
        assert!(!text.contains("src/"));
      }
      TextEdit::Replace { .. } => panic!("expected an insert"),
    }
  }

  #[test]
  fn test_plan_replaces_existing_header() {
    let processor = HeaderProcessor::default();
    let original = Document::new("init.lua", "lua", "return {}\n");

    let first = processor.plan_at(&original, &at(10));
    let text = first.edit.apply_to(&original.text).expect("edit should apply");

    let refreshed = Document::new("init.lua", "lua", text);
    let second = processor.plan_at(&refreshed, &at(11));

    assert_eq!(second.profile, LUA);
    assert_eq!(second.outcome(), HeaderOutcome::Replaced { created_preserved: true });
    match second.edit {
      TextEdit::Replace { ref range, ref text } => {
        assert_eq!(range.start, 0);
        assert_eq!(&refreshed.text[range.end..], "return {}\n");
        assert!(text.contains("Created: 2025/06/01 10:00:00"));
        assert!(text.contains("Updated: 2025/06/01 11:00:00"));
      }
      TextEdit::Insert { .. } => panic!("expected a replace"),
    }
  }

  #[test]
  fn test_plan_unknown_language_uses_javascript_profile() {
    let doc = Document::new("notes.txt", "plaintext", "");
    let plan = HeaderProcessor::default().plan_at(&doc, &at(8));
    assert_eq!(plan.profile, JAVASCRIPT);
  }

  #[test]
  fn test_plan_ignores_header_in_other_style() {
    let processor = HeaderProcessor::default();
    let python = Document::new("a.py", "python", "");
    let header = processor.plan_at(&python, &at(8)).edit.new_text().to_string();

    // Same text opened as Lua: the Python header is just content
    let doc = Document::new("a.lua", "lua", header);
    let plan = processor.plan_at(&doc, &at(9));

    assert_eq!(plan.profile, LUA);
    assert!(plan.existing.is_none());
    assert_ne!(plan.profile, PYTHON);
  }

  #[tokio::test]
  async fn test_run_without_document() {
    let mut editor = crate::document::InMemoryEditor::empty();
    let outcome = HeaderProcessor::default().run(&mut editor).await.expect("run should succeed");
    assert_eq!(outcome, HeaderOutcome::NoActiveDocument);
  }
}
