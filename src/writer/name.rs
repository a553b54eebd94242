use std::fmt;

use crate::multiwell::PlateTag;
use crate::sample::Position;

/// Name of a single-well spectrum file.
///
/// Renders as `plate<N>_<C>mgml_<Well>.txt`, dropping the concentration when
/// it is unknown and appending `_edge` for edge captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellFileName {
    /// Plate number and concentration
    pub tag: PlateTag,
    /// Well label
    pub well: String,
    /// Capture position
    pub position: Position,
}

impl WellFileName {
    /// Centre capture of `well` on the tagged plate.
    pub fn new(tag: PlateTag, well: impl Into<String>) -> Self {
        Self {
            tag,
            well: well.into(),
            position: Position::Centre,
        }
    }

    /// Same well, different capture position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

impl fmt::Display for WellFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.tag.prefix(), self.well)?;
        if self.position == Position::Edge {
            f.write_str("_edge")?;
        }
        f.write_str(".txt")
    }
}
