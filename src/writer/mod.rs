//! # Well File Writer
//!
//! Serializes demultiplexed spectra back into the file-per-well convention
//! the rest of the pipeline reads:
//!
//! ```text
//! plate2_60mgml_A1.txt
//! 100.000000	5.000000
//! 101.000000	6.000000
//! ```
//!
//! Values always carry 6 decimals. With [`Delimiter::Comma`] the pairs are
//! comma-separated under a `RamanShift(cm-1),Intensity` header.
//!
//! Files are written to a temporary file in the destination directory and
//! renamed into place, so an interrupted run never leaves a truncated well
//! file behind.

mod config;
mod error;
mod name;
mod stats;
mod writer_impl;


pub use config::{Delimiter, WriterConfig};
pub use error::WriterError;
pub use name::WellFileName;
pub use stats::WriterStats;
pub use writer_impl::WellFileWriter;
