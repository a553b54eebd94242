use std::fmt;
use std::path::PathBuf;

/// Statistics from a completed dataset export
#[derive(Debug, Clone)]
pub struct DatasetStats {
    /// Number of samples (matrix rows)
    pub samples: usize,
    /// Number of Raman shifts (matrix columns)
    pub points: usize,
    /// Samples dropped by the filter
    pub excluded: usize,
    /// Files written
    pub files: Vec<PathBuf>,
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dataset: {} samples x {} shifts ({} excluded), {} files",
            self.samples,
            self.points,
            self.excluded,
            self.files.len()
        )
    }
}
