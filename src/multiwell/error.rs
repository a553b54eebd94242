use crate::geometry::GeometryError;

/// Errors that can occur while demultiplexing a multiwell export
#[derive(Debug, thiserror::Error)]
pub enum MultiwellError {
    /// I/O error reading the export
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The export has no axis line or no spectrum lines
    #[error("No spectral data found: expected an axis line and at least one spectrum, found {data_lines} data line(s)")]
    Structural {
        /// Number of non-header lines that were found
        data_lines: usize,
    },

    /// A spectrum has a different number of points than the shared axis
    #[error("Length mismatch at file Col={instrument_col}, Row={instrument_row}: expected {expected} intensities, found {actual}")]
    LengthMismatch {
        /// Instrument column index of the offending record
        instrument_col: u32,
        /// Instrument row index of the offending record
        instrument_row: u32,
        /// Axis length
        expected: usize,
        /// Intensity count of the record
        actual: usize,
    },

    /// A spectrum line lacks its column/row prefix
    #[error("Line {line}: missing instrument column/row indices")]
    MissingCoordinates {
        /// 1-based line number in the export
        line: usize,
    },

    /// A token could not be parsed as a number
    #[error("Line {line}: invalid number {token:?}")]
    InvalidNumber {
        /// 1-based line number in the export
        line: usize,
        /// Offending token
        token: String,
    },

    /// The translated coordinate cannot be rendered as a well
    #[error("Line {line}: {source}")]
    Geometry {
        /// 1-based line number in the export
        line: usize,
        /// Underlying geometry error
        #[source]
        source: GeometryError,
    },

    /// The export file name does not follow `plate<N>_<C>mgml_multiwell.txt`
    #[error("Invalid multiwell file name: {0}")]
    InvalidFileName(String),
}
