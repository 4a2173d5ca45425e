//! # Configuration Module
//!
//! This module provides the settings that fill in a rendered header: the
//! author, the author's address, the project name and the copyright line.
//!
//! Settings can be specified in a `.normheader.toml` file, located via the
//! `NORMHEADER_CONFIG` environment variable, or overridden on the command
//! line. Every setting has a default, so a missing file or a missing key never
//! leaves a value undefined.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".normheader.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "NORMHEADER_CONFIG";

/// Default author name.
pub const DEFAULT_AUTHOR_NAME: &str = "lorem";

/// Default author address.
pub const DEFAULT_AUTHOR_ADDRESS: &str = "github.com/loremipsum";

/// Default project name shown in the banner line.
pub const DEFAULT_PROJECT_NAME: &str = "projectName";

/// Default copyright line.
pub const DEFAULT_COPYRIGHT: &str = "© \"projectName\" - All rights reserved";

/// Values rendered into a header block.
///
/// Keys in the config file use the same camelCase names as editor settings
/// (`authorName`, `authorAddress`, `projectName`, `copyright`). Keys that are
/// absent take their documented default.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
  /// Author shown in the By, Created and Updated lines
  pub author_name: String,

  /// Shown in angle brackets after the author name
  pub author_address: String,

  /// Shown in the centered banner line
  pub project_name: String,

  /// Shown as the final content line
  pub copyright: String,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      author_name: DEFAULT_AUTHOR_NAME.to_string(),
      author_address: DEFAULT_AUTHOR_ADDRESS.to_string(),
      project_name: DEFAULT_PROJECT_NAME.to_string(),
      copyright: DEFAULT_COPYRIGHT.to_string(),
    }
  }
}

/// Setting overrides supplied on the command line.
///
/// Each `Some` value replaces the corresponding setting loaded from file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
  pub author_name: Option<String>,
  pub author_address: Option<String>,
  pub project_name: Option<String>,
  pub copyright: Option<String>,
}

impl CliOverrides {
  pub const fn is_empty(&self) -> bool {
    self.author_name.is_none() && self.author_address.is_none() && self.project_name.is_none() && self.copyright.is_none()
  }
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{}': {source}", path.display())]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{}': {source}", path.display())]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A setting has a value that cannot be rendered into a header.
  #[error("Invalid setting '{key}': {message}")]
  InvalidSetting { key: &'static str, message: String },
}

impl Settings {
  /// Load settings from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  ///
  /// # Returns
  ///
  /// The loaded settings, or an error if the file cannot be read, parsed or
  /// validated.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    settings.validate()?;

    Ok(settings)
  }

  /// Validate the settings.
  ///
  /// Checks that no value contains a line break, which would split a header
  /// line. Empty values are valid and render as empty text.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let fields = [
      ("authorName", &self.author_name),
      ("authorAddress", &self.author_address),
      ("projectName", &self.project_name),
      ("copyright", &self.copyright),
    ];

    for (key, value) in fields {
      if value.contains(['\n', '\r']) {
        return Err(ConfigError::InvalidSetting {
          key,
          message: "value cannot contain line breaks".to_string(),
        });
      }
    }

    Ok(())
  }

  /// Apply command-line overrides on top of the loaded settings.
  pub fn merge_cli_overrides(&mut self, overrides: CliOverrides) {
    if let Some(author_name) = overrides.author_name {
      self.author_name = author_name;
    }
    if let Some(author_address) = overrides.author_address {
      self.author_address = author_address;
    }
    if let Some(project_name) = overrides.project_name {
      self.project_name = project_name;
    }
    if let Some(copyright) = overrides.copyright {
      self.copyright = copyright;
    }
  }

  /// The author as shown in the By line: `name <address>`.
  pub fn full_author(&self) -> String {
    format!("{} <{}>", self.author_name, self.author_address)
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `NORMHEADER_CONFIG` environment variable
/// 3. `.normheader.toml` in `start_dir` or its nearest ancestor
/// 4. `.normheader.toml` in the current directory
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `start_dir` - Directory of the file being processed, if any
///
/// # Returns
///
/// The path to the configuration file, or `None` if no config file is found.
pub fn discover_config_path(explicit_path: Option<&Path>, start_dir: Option<&Path>) -> Option<PathBuf> {
  // 1. Explicit path from CLI takes highest priority
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  // 2. Check environment variable
  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  // 3. Walk up from the file's directory
  if let Some(dir) = start_dir {
    for ancestor in dir.ancestors() {
      let candidate = ancestor.join(DEFAULT_CONFIG_FILENAME);
      if candidate.is_file() {
        verbose_log!("Using config found near file: {}", candidate.display());
        return Some(candidate);
      }
    }
  }

  // 4. Check the current directory
  if let Ok(current_dir) = std::env::current_dir() {
    let candidate = current_dir.join(DEFAULT_CONFIG_FILENAME);
    if candidate.is_file() {
      verbose_log!("Using config from current directory: {}", candidate.display());
      return Some(candidate);
    }
  }

  verbose_log!("No config file found");
  None
}

/// Load settings from the discovered path, or return the defaults.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `start_dir` - Directory of the file being processed, if any
/// * `no_config` - If true, skip config file discovery and use defaults
pub fn load_settings(explicit_path: Option<&Path>, start_dir: Option<&Path>, no_config: bool) -> Result<Settings> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(Settings::default());
  }

  match discover_config_path(explicit_path, start_dir) {
    Some(path) => {
      Settings::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))
    }
    None => Ok(Settings::default()),
  }
}
