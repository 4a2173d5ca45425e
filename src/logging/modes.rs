use std::sync::atomic::{AtomicU8, Ordering};

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Global output mode shared by the logging macros.
///
/// Starts as [`OutputMode::Normal`] until [`set_verbose`] or [`set_quiet`]
/// is called.
static OUTPUT_MODE: AtomicU8 = AtomicU8::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
  Normal = 0,
  Quiet = 1,
  Verbose = 2,
}

impl OutputMode {
  const fn from_u8(value: u8) -> Self {
    match value {
      1 => OutputMode::Quiet,
      2 => OutputMode::Verbose,
      _ => OutputMode::Normal,
    }
  }

  fn current() -> Self {
    Self::from_u8(OUTPUT_MODE.load(Ordering::SeqCst))
  }
}

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
  /// Use colors when the output stream is a terminal
  #[default]
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Makes this mode the process-wide color setting for `owo-colors`.
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Always => owo_colors::set_override(true),
    }
  }
}

/// Enables verbose output for [`verbose_log!`](crate::verbose_log).
pub fn set_verbose() {
  OUTPUT_MODE.store(OutputMode::Verbose as u8, Ordering::SeqCst);
}

/// Suppresses status output from [`crate::output`].
pub fn set_quiet() {
  OUTPUT_MODE.store(OutputMode::Quiet as u8, Ordering::SeqCst);
}

/// Returns `true` if verbose logging is enabled.
pub fn is_verbose() -> bool {
  OutputMode::current() == OutputMode::Verbose
}

/// Returns `true` if quiet mode is enabled.
pub fn is_quiet() -> bool {
  OutputMode::current() == OutputMode::Quiet
}

/// Maps the CLI verbosity flags to a default tracing filter.
///
/// `-q` shows errors only, no flag shows warnings, and each `-v` raises the
/// level by one step up to `trace`.
pub const fn default_filter(quiet: bool, verbose: u8) -> &'static str {
  if quiet {
    return "error";
  }
  match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the level derived from the flags. Calling
/// this more than once keeps the first subscriber.
pub fn init_tracing(quiet: bool, verbose: u8) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(quiet, verbose)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init();
}
