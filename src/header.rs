//! # Header Module
//!
//! This module renders the decorative header block: a separator, a small
//! centered pictograph, a project banner, then left-aligned lines recording
//! the file name, author, creation and update timestamps and copyright.
//!
//! Every interior line is exactly `width` columns wide (the project banner
//! excepted, which is never truncated), wrapped in the profile's delimiters.
//!
//! ## Example
//!
//! ```rust
//! use normheader::config::Settings;
//! use normheader::header::render_header;
//! use normheader::profile::select_profile;
//!
//! let header = render_header("main.py", &Settings::default(), &select_profile("python"), None);
//!
//! assert!(header.starts_with("# ~~~~"));
//! assert!(header.ends_with(" #\n\n"));
//! ```

use chrono::NaiveDateTime;

use crate::config::Settings;
use crate::profile::CommentProfile;

/// Format used for the Created and Updated timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Number of lines in a rendered header block, excluding the trailing blank
/// line.
pub const HEADER_LINE_COUNT: usize = 15;

const PICTOGRAPH_TOP: &str = "{   o   }";
const PICTOGRAPH_MIDDLE: &str = "|   ‾‾‾   |";
const PICTOGRAPH_BOTTOM: &str = "/\\+_______+/\\";

// Centering lengths reproduce the established layout; they are not the
// rendered lengths of the pictograph rows.
const PICTOGRAPH_TOP_LEN: usize = 9;
const PICTOGRAPH_MIDDLE_LEN: usize = 9;
const PICTOGRAPH_BOTTOM_LEN: usize = 11;
const BANNER_EXTRA_LEN: usize = 8;

/// Formats a timestamp as `YYYY/MM/DD HH:mm:ss`.
pub fn format_timestamp(time: &NaiveDateTime) -> String {
  time.format(TIMESTAMP_FORMAT).to_string()
}

/// Truncates `content` to at most `width` characters, then right-pads it with
/// spaces to exactly `width` characters.
pub fn normalize(content: &str, width: usize) -> String {
  let truncated: String = content.chars().take(width).collect();
  format!("{truncated:<width$}")
}

/// Centers `content` using a fixed logical length.
///
/// The content is left-padded until it reaches `(width + logical_len) / 2`
/// characters, then right-padded to `width`. Content already longer than
/// either target is left as is.
fn center(content: &str, logical_len: usize, width: usize) -> String {
  let target = (width + logical_len) / 2;
  let shifted = format!("{content:>target$}");
  format!("{shifted:<width$}")
}

/// Renders a header block stamped with the current local time.
///
/// `prior_created` is the Created timestamp recovered from an existing
/// header. When it is absent or empty, the new header's Created timestamp
/// equals its Updated timestamp.
pub fn render_header(
  file_name: &str,
  settings: &Settings,
  profile: &CommentProfile,
  prior_created: Option<&str>,
) -> String {
  let now = chrono::Local::now().naive_local();
  render_header_at(file_name, settings, profile, prior_created, &now)
}

/// Renders a header block using `now` as the Updated timestamp.
pub fn render_header_at(
  file_name: &str,
  settings: &Settings,
  profile: &CommentProfile,
  prior_created: Option<&str>,
  now: &NaiveDateTime,
) -> String {
  let width = profile.width;
  let updated = format_timestamp(now);
  let created = match prior_created {
    Some(created) if !created.is_empty() => created,
    _ => updated.as_str(),
  };

  let author = &settings.author_name;
  let project = &settings.project_name;

  let separator = profile.separator();
  let blank = " ".repeat(width);

  let banner = format!("───   {project}   ───");
  let banner_len = project.chars().count() + BANNER_EXTRA_LEN;

  let lines = [
    separator.clone(),
    center(PICTOGRAPH_TOP, PICTOGRAPH_TOP_LEN, width),
    center(PICTOGRAPH_MIDDLE, PICTOGRAPH_MIDDLE_LEN, width),
    center(PICTOGRAPH_BOTTOM, PICTOGRAPH_BOTTOM_LEN, width),
    center(&banner, banner_len, width),
    blank.clone(),
    normalize(file_name, width),
    blank.clone(),
    normalize(&format!("By: {}", settings.full_author()), width),
    blank.clone(),
    normalize(&format!("Created: {created} by {author}"), width),
    normalize(&format!("Updated: {updated} by {author}"), width),
    blank,
    normalize(&settings.copyright, width),
    separator,
  ];

  let mut header = lines.iter().map(|line| profile.wrap(line)).collect::<Vec<_>>().join("\n");
  header.push_str("\n\n");
  header
}
