/// Errors that can occur while loading a single-well spectrum
#[derive(Debug, thiserror::Error)]
pub enum SpectrumError {
    /// I/O error reading the spectrum file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// Missing required column in a comma-separated spectrum
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A value could not be parsed as a number
    #[error("Invalid number {value:?} on record {record}")]
    InvalidNumber {
        /// 1-based data record number
        record: usize,
        /// Offending text
        value: String,
    },

    /// Axis and intensity arrays differ in length
    #[error("Axis length {axis} does not match intensity length {intensities}")]
    LengthMismatch {
        /// Number of wavenumber values
        axis: usize,
        /// Number of intensity values
        intensities: usize,
    },

    /// The file contains no data points
    #[error("Spectrum contains no data points")]
    Empty,
}
