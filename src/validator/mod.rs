//! # Plate Folder Check
//!
//! Consistency report for a folder of plate spectra, run before tabulation.
//!
//! ## Checklist
//!
//! 1. **Structure**: the folder exists and every file classifies as a well
//!    file, a multiwell export or the glass reference
//! 2. **Exports**: multiwell exports parse and carry a plate tag
//! 3. **Identities**: every well file resolves against the catalog
//! 4. **Axes**: spectra of one plate share an axis length, and the largest
//!    shift difference between plates stays within 0.1 cm-1
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ramanplate::catalog::PlateCatalog;
//! use ramanplate::validator::check_folder;
//! use std::path::Path;
//!
//! let report = check_folder(Path::new("analyse"), &PlateCatalog::builtin()).unwrap();
//! println!("{}", report);
//! ```

use std::path::Path;

use anyhow::Result;

use crate::catalog::PlateCatalog;

pub use report::{CheckStage, CheckStatus, ValidationCheck, ValidationReport, Verdict};

mod axes;
mod identity;
mod report;
mod structure;


/// Errors that stop a check before a report can be completed
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The folder is missing or not a directory
    #[error("Structure error: {0}")]
    StructureError(String),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Check a folder of plate spectra.
///
/// Problems with individual files are recorded in the report; only a
/// missing or unreadable folder is an error.
pub fn check_folder(dir: &Path, catalog: &PlateCatalog) -> Result<ValidationReport> {
    let mut report = ValidationReport::new(dir.display().to_string());

    report.enter(CheckStage::Structure);
    let ordered = structure::check_structure(dir, &mut report)?;

    report.enter(CheckStage::Exports);
    structure::check_exports(&ordered, &mut report);

    report.enter(CheckStage::Identities);
    let samples = identity::check_identities(&ordered, catalog, &mut report);

    report.enter(CheckStage::Axes);
    axes::check_axes(&samples, &mut report);

    Ok(report)
}
