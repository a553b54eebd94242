//! # Multiwell Export Demultiplexing
//!
//! A LabRAM stage scan writes every well of a plate into one text file:
//!
//! ```text
//! #Acq. time (s)=5          <- header lines, kept verbatim
//! 100.0 101.0 102.0         <- shared Raman shift axis
//! 1 1 5.0 6.0 7.0           <- <instrument col> <instrument row> intensities...
//! 1 2 5.5 6.5 7.5
//! ```
//!
//! [`MultiwellExport`] parses such a file, checks every spectrum against the
//! axis, and translates each record into plate space with
//! [`crate::geometry::translate`] as soon as it is read.

mod error;
mod name;
mod parser;


pub use error::MultiwellError;
pub use name::{is_multiwell_name, PlateTag, MULTIWELL_SUFFIX};
pub use parser::{DemuxedWell, MultiwellExport, RawWellRecord};
