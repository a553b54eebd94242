use crate::sample::IdentityError;
use crate::spectrum::SpectrumError;

/// Errors that can occur while assembling or exporting a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the CSV encoder
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error serializing the manifest
    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// A sample could not be loaded or resolved
    #[error("Sample error: {0}")]
    Identity(#[from] IdentityError),

    /// A spectrum could not be cropped
    #[error("Spectrum error in {file}: {source}")]
    Spectrum {
        /// File the spectrum came from
        file: String,
        /// Underlying error
        #[source]
        source: SpectrumError,
    },

    /// A spectrum has a different number of points than the reference axis
    #[error("Axis length mismatch in {file}: expected {expected} points, found {actual}")]
    AxisLength {
        /// File the spectrum came from
        file: String,
        /// Reference axis length
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// A spectrum's axis drifts too far from the reference axis
    #[error("Axis of {file} differs from the reference by {difference:.4} cm-1 (tolerance {tolerance} cm-1)")]
    AxisMismatch {
        /// File the spectrum came from
        file: String,
        /// Largest absolute shift difference
        difference: f64,
        /// Configured tolerance
        tolerance: f64,
    },

    /// Preprocessing parameters or data are unusable
    #[error("Preprocessing error: {0}")]
    Preprocessing(String),

    /// Every sample was filtered out
    #[error("No samples left to tabulate")]
    Empty,
}
