//! # normheader
//!
//! A tool that inserts or refreshes a fixed-width decorative header comment at
//! the top of a source file. The header records the file name, author,
//! creation and update timestamps and copyright, styled for the file's
//! language.
//!
//! Running it again on the same file replaces the previous header in place
//! and keeps its original creation timestamp.
//!
//! ## Features
//!
//! * Comment styles for Lua, Python, JavaScript and TypeScript, every line
//!   ending on the 80-column mark
//! * Structural detection of a previously inserted header, no hidden markers
//! * Settings from `.normheader.toml` or the command line
//! * Dry-run mode with diff preview
//!
//! ## Usage as a Library
//!
//! ```rust
//! use normheader::config::Settings;
//! use normheader::header::render_header;
//! use normheader::profile::select_profile;
//!
//! let settings = Settings {
//!   author_name: "ana".to_string(),
//!   author_address: "a@b".to_string(),
//!   ..Settings::default()
//! };
//!
//! let header = render_header("main.py", &settings, &select_profile("python"), None);
//! assert!(header.contains("By: ana <a@b>"));
//! ```
//!
//! To update a document held by a host, implement [`document::Editor`] and
//! pass it to [`processor::HeaderProcessor::run`].
//!
//! ## Modules
//!
//! * [`profile`] - Language to comment style mapping
//! * [`header`] - Header rendering
//! * [`detection`] - Locating a previously inserted header
//! * [`processor`] - The add/update action
//! * [`document`] - Document snapshot, edits and the host interface
//! * [`config`] - Settings and config file discovery

pub mod config;
pub mod detection;
pub mod diff;
pub mod document;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
pub mod profile;
