use std::fmt;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::MultiwellError;

/// Suffix that marks a multiwell export.
pub const MULTIWELL_SUFFIX: &str = "_multiwell.txt";

lazy_static! {
    static ref MULTIWELL_NAME: Regex =
        Regex::new(r"^plate(\d+)(?:_(\d+)mgml)?_multiwell\.txt$").expect("valid multiwell pattern");
}

/// Plate number and concentration carried by an export's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlateTag {
    /// Plate number
    pub plate: u32,
    /// Drug concentration in mg/mL, when present in the name
    pub concentration: Option<u32>,
}

impl PlateTag {
    /// Create a tag.
    pub fn new(plate: u32, concentration: Option<u32>) -> Self {
        Self {
            plate,
            concentration,
        }
    }

    /// Parse `plate<N>_<C>mgml_multiwell.txt` (the concentration part is optional).
    pub fn from_multiwell_name(name: &str) -> Result<Self, MultiwellError> {
        let caps = MULTIWELL_NAME
            .captures(name)
            .ok_or_else(|| MultiwellError::InvalidFileName(name.to_string()))?;

        let plate = caps[1]
            .parse()
            .map_err(|_| MultiwellError::InvalidFileName(name.to_string()))?;
        let concentration = caps
            .get(2)
            .map(|m| m.as_str().parse())
            .transpose()
            .map_err(|_| MultiwellError::InvalidFileName(name.to_string()))?;

        Ok(Self {
            plate,
            concentration,
        })
    }

    /// Parse the file name component of a path.
    pub fn from_path(path: &Path) -> Result<Self, MultiwellError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| MultiwellError::InvalidFileName(path.display().to_string()))?;
        Self::from_multiwell_name(name)
    }

    /// File-name prefix shared by every well of this plate, e.g. `plate2_60mgml`.
    pub fn prefix(&self) -> String {
        match self.concentration {
            Some(c) => format!("plate{}_{}mgml", self.plate, c),
            None => format!("plate{}", self.plate),
        }
    }
}

impl fmt::Display for PlateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Whether a file name looks like a multiwell export.
pub fn is_multiwell_name(name: &str) -> bool {
    name.ends_with(MULTIWELL_SUFFIX)
}
