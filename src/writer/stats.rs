use std::fmt;
use std::path::PathBuf;

/// Statistics from a completed demultiplexing write
#[derive(Debug, Clone, Default)]
pub struct WriterStats {
    /// Number of well files written
    pub files_written: usize,
    /// Total number of (wavenumber, intensity) pairs written
    pub points_written: usize,
    /// Paths of the written files, in write order
    pub paths: Vec<PathBuf>,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} well files ({} points)",
            self.files_written, self.points_written
        )
    }
}
