//! # Logging Module
//!
//! Logging for the normheader tool:
//! - `tracing` events for diagnostics, enabled with `-v` or `RUST_LOG`
//! - [`verbose_log!`](crate::verbose_log) for extra detail on stderr
//!
//! User-facing status lines are printed by [`crate::output`].
//!
//! ## Example
//!
//! ```rust
//! use normheader::logging::{ColorMode, set_verbose};
//! use normheader::verbose_log;
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! // Goes to stderr
//! verbose_log!("Processing file: {}", "main.py");
//! ```

mod modes;

pub use modes::{ColorMode, default_filter, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
