//! # Header Command
//!
//! This module implements the add/update header action for one file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use normheader::config::{CliOverrides, load_settings};
use normheader::diff::DiffManager;
use normheader::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use normheader::output::print_outcome;
use normheader::processor::{FileEditor, HeaderProcessor};
use tracing::debug;

/// Arguments for the header command
#[derive(Args, Debug, Default)]
pub struct HeaderArgs {
  /// File to add or update the header in. Without a file there is nothing to
  /// do.
  #[arg(value_name = "FILE")]
  pub file: Option<PathBuf>,

  /// Language identifier selecting the comment style (lua, python,
  /// javascript, typescript); derived from the file extension by default
  #[arg(long, short = 'l', value_name = "ID")]
  pub language: Option<String>,

  /// Path to config file (default: nearest .normheader.toml)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Author shown in the By, Created and Updated lines
  #[arg(long, value_name = "NAME")]
  pub author_name: Option<String>,

  /// Address shown after the author name
  #[arg(long, value_name = "ADDRESS")]
  pub author_address: Option<String>,

  /// Project name shown in the banner
  #[arg(long, value_name = "NAME")]
  pub project_name: Option<String>,

  /// Copyright line
  #[arg(long, value_name = "TEXT")]
  pub copyright: Option<String>,

  /// Compute the header without writing the file
  #[arg(long)]
  pub dry_run: bool,

  /// Print a diff of the change to stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Append a diff of the change to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl HeaderArgs {
  fn overrides(&self) -> CliOverrides {
    CliOverrides {
      author_name: self.author_name.clone(),
      author_address: self.author_address.clone(),
      project_name: self.project_name.clone(),
      copyright: self.copyright.clone(),
    }
  }
}

/// Run the header command with the given arguments
pub async fn run_header(args: HeaderArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let Some(path) = args.file.as_deref() else {
    debug!("No file given, nothing to do");
    return Ok(());
  };

  let mut settings = load_settings(args.config.as_deref(), path.parent(), args.no_config)?;
  let overrides = args.overrides();
  if !overrides.is_empty() {
    debug!("Applying command-line setting overrides");
    settings.merge_cli_overrides(overrides);
    settings.validate().context("Invalid command-line setting")?;
  }

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff.clone());
  let mut editor = FileEditor::open(path, args.language.as_deref())
    .await?
    .with_dry_run(args.dry_run)
    .with_diff_manager(diff_manager);

  let processor = HeaderProcessor::new(settings);
  let outcome = processor
    .run(&mut editor)
    .await
    .with_context(|| format!("Failed to write header to {}", path.display()))?;

  print_outcome(outcome, path, args.dry_run);

  Ok(())
}
