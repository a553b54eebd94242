/// Errors that can occur while writing well files
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the CSV encoder
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A well could not be labelled
    #[error("Cannot label well at {coordinate}: {source}")]
    Geometry {
        /// Plate coordinate of the well
        coordinate: crate::geometry::PlateCoordinate,
        /// Underlying error
        #[source]
        source: crate::geometry::GeometryError,
    },

    /// Two records of one export map to the same well
    #[error("Duplicate well {0} in export")]
    DuplicateWell(String),

    /// Axis and intensity vectors differ in length
    #[error("Length mismatch for {well}: axis has {axis} points, intensities have {intensities}")]
    LengthMismatch {
        /// Well label
        well: String,
        /// Axis length
        axis: usize,
        /// Intensity vector length
        intensities: usize,
    },
}
