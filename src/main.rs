//! # ramanplate
//!
//! Command-line front end for Raman multiwell plate screening.
//!
//! ## Usage
//!
//! ```bash
//! # Split a multiwell export into one file per well
//! ramanplate demux analyse/plate2_60mgml_multiwell.txt
//!
//! # Show the canonical order and labels of a folder
//! ramanplate order analyse
//!
//! # Check the folder, then build the PCA input tables
//! ramanplate check analyse
//! ramanplate tabulate analyse -o pca_output
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
