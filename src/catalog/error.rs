/// Errors raised by plate catalog lookups and catalog loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No layout is registered for the plate
    #[error("Plate {0} is not listed in the plate catalog")]
    UnknownPlate(u32),

    /// The plate is known but has no entry for the row or column
    #[error("Plate {plate} has no catalog entry for {what}")]
    UnknownEntry {
        /// Plate number
        plate: u32,
        /// Description of the missing key, e.g. `column 13`
        what: String,
    },

    /// A catalog file entry is malformed
    #[error("Invalid catalog table: {0}")]
    InvalidTable(String),

    /// I/O error reading a catalog file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}
