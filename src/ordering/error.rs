/// Errors that can occur while ordering a working file set
#[derive(Debug, thiserror::Error)]
pub enum OrderingError {
    /// The file is neither a well file, a multiwell export nor the glass reference
    #[error("Cannot classify {0}: expected plate<N>_..._<Well>.txt, plate<N>_..._multiwell.txt or glass_reference.txt")]
    Ambiguous(String),

    /// A well or multiwell file without a plate<N> tag
    #[error("Plate number not found in {0}")]
    MissingPlate(String),

    /// The plate tag does not fit in a plate number
    #[error("Invalid plate number in {0}")]
    InvalidPlate(String),

    /// I/O error listing a directory
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
