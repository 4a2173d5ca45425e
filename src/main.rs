//! # normheader
//!
//! Adds or refreshes a decorative header comment at the top of a source file.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, run_header};

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_header(cli.header_args).await
}
