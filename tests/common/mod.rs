#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use normheader::config::Settings;

/// Settings with short, distinctive values.
pub fn sample_settings() -> Settings {
  Settings {
    author_name: "ana".to_string(),
    author_address: "a@b".to_string(),
    project_name: "X".to_string(),
    copyright: "C".to_string(),
  }
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Returns the timestamp of the first `<label>: ` line in `text`.
pub fn timestamp_of<'a>(text: &'a str, label: &str) -> Option<&'a str> {
  let marker = format!("{label}: ");
  let start = text.find(&marker)? + marker.len();
  text.get(start..start + "YYYY/MM/DD HH:mm:ss".len())
}

/// Number of header blocks in `text`, counted by their separator lines.
pub fn separator_count(text: &str, width: usize) -> usize {
  let separator = "~".repeat(width);
  text.lines().filter(|line| line.contains(&separator)).count()
}
