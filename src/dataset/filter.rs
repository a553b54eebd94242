use serde::{Deserialize, Serialize};

use crate::catalog::Appearance;
use crate::sample::SampleIdentity;

/// Exclusion lists applied before tabulation.
///
/// A sample is dropped when any one rule matches. Plate 0 is the glass
/// reference; row, column and appearance rules never drop it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleFilter {
    /// Plates to drop
    pub plates: Vec<u32>,
    /// Row letters to drop
    pub rows: Vec<char>,
    /// Columns to drop
    pub columns: Vec<u32>,
    /// Drop samples with this appearance
    pub appearance: Option<Appearance>,
}

impl SampleFilter {
    /// Filter that keeps everything.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether the filter drops this sample.
    pub fn excludes(&self, identity: &SampleIdentity) -> bool {
        if self.plates.contains(&identity.plate()) {
            return true;
        }
        if identity.is_glass_reference() {
            return false;
        }
        identity.row().map_or(false, |row| self.rows.contains(&row))
            || self.columns.contains(&identity.column())
            || self.appearance == Some(identity.appearance())
    }

    /// Whether no rule is set.
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
            && self.rows.is_empty()
            && self.columns.is_empty()
            && self.appearance.is_none()
    }
}
