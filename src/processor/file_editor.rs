//! # File Editor Module
//!
//! An [`Editor`] over a single file on disk. The document is read once when
//! the editor is opened; an applied edit is written back in one write, or
//! only previewed in dry-run mode.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::diff::DiffManager;
use crate::document::{Document, EditError, Editor, TextEdit};
use crate::profile::language_for_path;
use crate::verbose_log;

/// Editor backed by a file on disk.
#[derive(Debug, Default)]
pub struct FileEditor {
  /// The opened file, or `None` when no file was given
  document: Option<Document>,

  /// Compute edits without writing them
  dry_run: bool,

  /// Diff output for applied edits
  diff_manager: DiffManager,
}

impl FileEditor {
  /// Opens `path` as the active document.
  ///
  /// The language identifier is `language` when given, otherwise derived from
  /// the file extension.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or is not valid UTF-8.
  pub async fn open(path: &Path, language: Option<&str>) -> Result<Self> {
    let text = tokio::fs::read_to_string(path)
      .await
      .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let language_id = language.unwrap_or_else(|| language_for_path(path));
    debug!("Opened {} as {} ({} bytes)", path.display(), language_id, text.len());

    Ok(Self {
      document: Some(Document::new(path, language_id, text)),
      ..Self::default()
    })
  }

  /// Only preview edits; never write the file.
  pub fn with_dry_run(mut self, dry_run: bool) -> Self {
    self.dry_run = dry_run;
    self
  }

  pub fn with_diff_manager(mut self, diff_manager: DiffManager) -> Self {
    self.diff_manager = diff_manager;
    self
  }

  pub const fn is_dry_run(&self) -> bool {
    self.dry_run
  }

  /// Current text of the document as this editor sees it.
  pub fn text(&self) -> Option<&str> {
    self.document.as_ref().map(|doc| doc.text.as_str())
  }
}

impl Editor for FileEditor {
  fn active_document(&self) -> Option<&Document> {
    self.document.as_ref()
  }

  async fn apply_edit(&mut self, edit: TextEdit) -> Result<(), EditError> {
    let Some(doc) = self.document.as_mut() else {
      return Ok(());
    };

    let new_text = edit.apply_to(&doc.text)?;

    if self.dry_run {
      verbose_log!("Dry run, not writing: {}", doc.path.display());
    } else {
      let io_error = |source| EditError::Io {
        path: doc.path.clone(),
        source,
      };

      let metadata = tokio::fs::metadata(&doc.path).await.map_err(io_error)?;
      if metadata.permissions().readonly() {
        return Err(EditError::ReadOnly { path: doc.path.clone() });
      }

      tokio::fs::write(&doc.path, &new_text).await.map_err(io_error)?;
      verbose_log!("Wrote {} bytes to {}", new_text.len(), doc.path.display());
    }

    // Only edits that were written, or previewed in a dry run, get a diff
    if let Err(e) = self.diff_manager.display_diff(&doc.path, &doc.text, &new_text) {
      warn!("Could not produce diff for {}: {:#}", doc.path.display(), e);
    }

    if !self.dry_run {
      doc.text = new_text;
    }
    Ok(())
  }
}
