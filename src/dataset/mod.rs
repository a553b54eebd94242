//! # Tabulation
//!
//! Assembles ordered, annotated single-well spectra into the samples x shifts
//! matrix consumed by the external PCA engine.
//!
//! ```text
//! <output>/
//! ├── spectra.csv     # sample,<shift>,<shift>,...  one row per sample
//! ├── samples.csv     # plate, well, polymer, loadings, appearance, ...
//! ├── labels.txt      # legend labels in row order
//! └── manifest.json   # settings, timestamp and tabulated files
//! ```
//!
//! Rows follow the order samples are pushed in, so callers feed them from
//! [`crate::ordering::order_files`].

mod builder;
mod error;
mod filter;
mod preprocess;
mod stats;
mod table;

#[cfg(test)]
mod tests;

pub use builder::{max_difference, DatasetBuilder, DatasetSettings, DEFAULT_AXIS_TOLERANCE};
pub use error::DatasetError;
pub use filter::SampleFilter;
pub use preprocess::{snv, Preprocessing, SavGol};
pub use stats::DatasetStats;
pub use table::{
    DatasetManifest, SpectralTable, LABELS_FILE, MANIFEST_FILE, SAMPLES_FILE, SPECTRA_FILE,
};
