//! # Header Detection Module
//!
//! This module locates a previously inserted header block in a document. A
//! header is identified purely by structure: a separator line wrapped in the
//! profile's delimiters, any content, then a second identical separator line.
//! Within a detected block, the original `Created:` timestamp is recovered so
//! that it survives a refresh.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::profile::CommentProfile;

/// Matches the Created line of a previously rendered header.
static CREATED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"Created: (\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2})").expect("created regex must compile")
});

/// A header block found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingHeader {
  /// Byte range of the block, including any whitespace that trails it
  pub span: Range<usize>,

  /// Created timestamp recovered from the block, if it had a well-formed one
  pub created: Option<String>,
}

/// Detector for header blocks rendered with one comment profile.
///
/// The detection pattern is built once from the profile and then used as
/// plain data for a single search.
#[derive(Debug, Clone)]
pub struct HeaderDetector {
  pattern: Regex,
}

impl HeaderDetector {
  /// Builds the detector for `profile`.
  ///
  /// Delimiters are escaped, so profiles whose delimiters contain regular
  /// expression metacharacters (`*`, `+`, `.` and so on) are matched
  /// literally.
  ///
  /// # Panics
  ///
  /// Panics if the profile's width is so large that the pattern exceeds the
  /// regex size limit.
  pub fn new(profile: &CommentProfile) -> Self {
    let fence = format!(
      "{}{}{}",
      regex::escape(profile.start),
      regex::escape(&profile.separator()),
      regex::escape(profile.end)
    );
    let pattern = format!(r"(?s){fence}.*?{fence}\s*");

    Self {
      pattern: Regex::new(&pattern).expect("escaped header pattern must compile"),
    }
  }

  /// The pattern source, mostly useful for logging.
  pub fn as_str(&self) -> &str {
    self.pattern.as_str()
  }

  /// Finds the first header block in `content`.
  pub fn find(&self, content: &str) -> Option<ExistingHeader> {
    let found = self.pattern.find(content)?;

    Some(ExistingHeader {
      span: found.range(),
      created: extract_created(found.as_str()),
    })
  }
}

/// Extracts the Created timestamp from the text of a header block.
///
/// Returns `None` when no line carries a timestamp in the
/// `YYYY/MM/DD HH:mm:ss` format.
pub fn extract_created(header: &str) -> Option<String> {
  CREATED_REGEX
    .captures(header)
    .and_then(|caps| caps.get(1))
    .map(|created| created.as_str().to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::profile::{JAVASCRIPT, LUA, PYTHON};

  fn fence(profile: &CommentProfile) -> String {
    profile.wrap(&profile.separator())
  }

  #[test]
  fn test_find_header_at_start() {
    let content = format!(
      "{f}\n/* Created: 2020/01/02 03:04:05 by ana */\n{f}\n\nconst x = 1;\n",
      f = fence(&JAVASCRIPT)
    );

    let header = HeaderDetector::new(&JAVASCRIPT).find(&content).expect("header should be found");

    assert_eq!(header.span.start, 0);
    assert_eq!(&content[header.span.end..], "const x = 1;\n");
    assert_eq!(header.created.as_deref(), Some("2020/01/02 03:04:05"));
  }

  #[test]
  fn test_find_header_after_content() {
    let content = format!("#!/usr/bin/env python3\n{f}\n# body #\n{f}\nprint()\n", f = fence(&PYTHON));

    let header = HeaderDetector::new(&PYTHON).find(&content).expect("header should be found");

    assert_eq!(header.span.start, "#!/usr/bin/env python3\n".len());
    assert_eq!(&content[header.span.end..], "print()\n");
    assert!(header.created.is_none());
  }

  #[test]
  fn test_find_no_header() {
    let content = "local x = 1\nreturn x\n";
    assert!(HeaderDetector::new(&LUA).find(content).is_none());
  }

  #[test]
  fn test_single_separator_is_not_a_header() {
    let content = format!("{}\nlocal x = 1\n", fence(&LUA));
    assert!(HeaderDetector::new(&LUA).find(&content).is_none());
  }

  #[test]
  fn test_header_of_other_profile_is_ignored() {
    let content = format!("{f}\n{f}\n", f = fence(&PYTHON));
    assert!(HeaderDetector::new(&JAVASCRIPT).find(&content).is_none());
  }

  #[test]
  fn test_separator_width_must_match() {
    let short = format!("/* {} */", "~".repeat(73));
    let content = format!("{short}\n{short}\n");
    assert!(HeaderDetector::new(&JAVASCRIPT).find(&content).is_none());
  }

  #[test]
  fn test_delimiters_are_escaped() {
    let detector = HeaderDetector::new(&JAVASCRIPT);
    assert!(detector.as_str().contains(r"/\* "));
    assert!(detector.as_str().contains(r" \*/"));

    // An unescaped `*` would let "/ ~~~" match
    let content = format!("/ {s} /\n/ {s} /\n", s = "~".repeat(74));
    assert!(detector.find(&content).is_none());
  }

  #[test]
  fn test_match_is_lazy() {
    let f = fence(&LUA);
    let content = format!("{f}\nfirst\n{f}\n\nbody\n{f}\nsecond\n{f}\n");

    let header = HeaderDetector::new(&LUA).find(&content).expect("header should be found");

    assert_eq!(&content[header.span.end..], format!("body\n{f}\nsecond\n{f}\n"));
  }

  #[test]
  fn test_trailing_whitespace_is_consumed() {
    let content = format!("{f}\n{f}\n \n\t\n\nnext", f = fence(&PYTHON));

    let header = HeaderDetector::new(&PYTHON).find(&content).expect("header should be found");

    assert_eq!(&content[header.span.end..], "next");
  }

  #[test]
  fn test_extract_created_rejects_malformed_timestamp() {
    assert_eq!(extract_created("Created: 2020-01-02 03:04:05 by ana"), None);
    assert_eq!(extract_created("Created: 2020/1/2 3:04:05 by ana"), None);
    assert_eq!(extract_created("Created: yesterday"), None);
  }

  #[test]
  fn test_extract_created_takes_first_timestamp() {
    let text = "Created: 2020/01/02 03:04:05 by a\nCreated: 2021/01/02 03:04:05 by b";
    assert_eq!(extract_created(text).as_deref(), Some("2020/01/02 03:04:05"));
  }
}
