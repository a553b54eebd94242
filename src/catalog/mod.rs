//! # Plate Metadata Catalog
//!
//! Static, per-plate experimental design tables: which polymer fills each
//! column, the drug loading of each row, and the wells that were visually
//! crystalline after preparation.
//!
//! A [`PlateCatalog`] is built once at start-up (built-in plates 1–4,
//! optionally extended from a TOML file) and then only read. Lookups that miss
//! the tables either fail ([`CatalogPolicy::Strict`], the default) or fall back
//! to the historical defaults of polymer `"N/A"` and loading `0`
//! ([`CatalogPolicy::Lenient`]).
//!
//! ## Catalog files
//!
//! ```toml
//! [plates.5.polymer]
//! 1 = "PLS"
//! 2 = "PLS"
//!
//! [plates.5.drug_loading]
//! A = 100
//! B = 95
//!
//! [plates.5]
//! crystalline_wells = ["A2", "B1"]
//! ```

mod error;
mod plates;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use error::CatalogError;

/// Polymer name reported when a lenient lookup misses.
pub const UNKNOWN_POLYMER: &str = "N/A";

/// Visual state of a well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Clear film (the default)
    #[default]
    Amorphous,
    /// Visible crystals
    Crystalline,
}

impl Appearance {
    /// Lowercase name as used in tables and labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Amorphous => "amorphous",
            Appearance::Crystalline => "crystalline",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How lookups that miss the tables are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogPolicy {
    /// Missing plates, rows or columns are errors
    #[default]
    Strict,
    /// Missing entries resolve to polymer "N/A" and loading 0
    Lenient,
}

/// Design table of a single plate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlateLayout {
    polymer_by_column: BTreeMap<u32, String>,
    drug_loading_by_row: BTreeMap<char, u32>,
    crystalline_wells: BTreeSet<String>,
}

impl PlateLayout {
    /// Build a layout from its three tables.
    ///
    /// Drug loadings above 100 are accepted here and rejected when a well on
    /// that row is resolved.
    pub fn new(
        polymers: impl IntoIterator<Item = (u32, String)>,
        drug_loadings: impl IntoIterator<Item = (char, u32)>,
        crystalline_wells: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            polymer_by_column: polymers.into_iter().collect(),
            drug_loading_by_row: drug_loadings.into_iter().collect(),
            crystalline_wells: crystalline_wells
                .into_iter()
                .map(|w| normalize_well(&w).unwrap_or(w))
                .collect(),
        }
    }

    /// Polymer in a column.
    pub fn polymer(&self, column: u32) -> Option<&str> {
        self.polymer_by_column.get(&column).map(String::as_str)
    }

    /// Drug loading (percent) of a row.
    pub fn drug_loading(&self, row: char) -> Option<u32> {
        self.drug_loading_by_row.get(&row).copied()
    }

    /// Whether a well was recorded as crystalline.
    pub fn is_crystalline(&self, well: &str) -> bool {
        let well = normalize_well(well).unwrap_or_else(|| well.to_string());
        self.crystalline_wells.contains(&well)
    }
}

/// Everything the catalog knows about one well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Polymer name
    pub polymer: String,
    /// Drug loading in percent
    pub drug_loading: u32,
    /// Polymer loading in percent, `100 - drug_loading` when the loading is known
    pub polymer_loading: u32,
    /// Visual appearance
    pub appearance: Appearance,
}

/// Immutable collection of plate layouts with a miss policy.
#[derive(Debug, Clone)]
pub struct PlateCatalog {
    plates: BTreeMap<u32, PlateLayout>,
    policy: CatalogPolicy,
}

impl Default for PlateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PlateCatalog {
    /// Catalog of the built-in plates 1–4 with the strict policy.
    pub fn builtin() -> Self {
        Self {
            plates: plates::builtin_layouts().into_iter().collect(),
            policy: CatalogPolicy::Strict,
        }
    }

    /// Catalog with no plates.
    pub fn empty() -> Self {
        Self {
            plates: BTreeMap::new(),
            policy: CatalogPolicy::Strict,
        }
    }

    /// Same tables with a different miss policy.
    pub fn with_policy(mut self, policy: CatalogPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add or replace a plate layout.
    pub fn with_plate(mut self, plate: u32, layout: PlateLayout) -> Self {
        if self.plates.insert(plate, layout).is_some() {
            debug!("Replacing catalog layout for plate {}", plate);
        }
        self
    }

    /// Extend the catalog with the plates of a TOML catalog file.
    pub fn merge_file<P: AsRef<Path>>(self, path: P) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        self.merge_toml_str(&content)
    }

    /// Extend the catalog with the plates of TOML catalog text.
    pub fn merge_toml_str(mut self, content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        for (key, table) in file.plates {
            let plate: u32 = key
                .parse()
                .map_err(|_| CatalogError::InvalidTable(format!("plate key {key:?}")))?;
            self = self.with_plate(plate, table.into_layout(plate)?);
        }
        Ok(self)
    }

    /// Active miss policy.
    pub fn policy(&self) -> CatalogPolicy {
        self.policy
    }

    /// Plate numbers with a layout, ascending.
    pub fn plates(&self) -> impl Iterator<Item = u32> + '_ {
        self.plates.keys().copied()
    }

    /// Layout of a plate, if registered.
    pub fn layout(&self, plate: u32) -> Option<&PlateLayout> {
        self.plates.get(&plate)
    }

    /// Polymer filling `column` on `plate`.
    pub fn polymer_for(&self, plate: u32, column: u32) -> Result<String, CatalogError> {
        let found = self.layout(plate).and_then(|l| l.polymer(column));
        match (found, self.policy) {
            (Some(polymer), _) => Ok(polymer.to_string()),
            (None, CatalogPolicy::Lenient) => {
                warn!("No polymer for plate {} column {}; using {}", plate, column, UNKNOWN_POLYMER);
                Ok(UNKNOWN_POLYMER.to_string())
            }
            (None, CatalogPolicy::Strict) => Err(self.miss(plate, format!("column {column}"))),
        }
    }

    /// Drug loading (percent) of `row` on `plate`.
    pub fn drug_loading_for(&self, plate: u32, row: char) -> Result<u32, CatalogError> {
        self.lookup_loading(plate, row).map(|loading| loading.unwrap_or(0))
    }

    /// Whether `well` on `plate` was recorded as crystalline.
    ///
    /// Plates without a crystalline list are entirely amorphous.
    pub fn is_crystalline(&self, plate: u32, well: &str) -> bool {
        self.layout(plate).map_or(false, |l| l.is_crystalline(well))
    }

    /// Resolve every catalog field for one well.
    pub fn resolve(
        &self,
        plate: u32,
        row: char,
        column: u32,
        well: &str,
    ) -> Result<CatalogEntry, CatalogError> {
        let polymer = self.polymer_for(plate, column)?;
        let loading = self.lookup_loading(plate, row)?;

        let (drug_loading, polymer_loading) = match loading {
            Some(drug) => {
                let polymer = 100u32.checked_sub(drug).ok_or_else(|| {
                    CatalogError::InvalidTable(format!(
                        "plate {plate}: row {row} loading {drug} exceeds 100"
                    ))
                })?;
                (drug, polymer)
            }
            None => (0, 0),
        };

        let appearance = if self.is_crystalline(plate, well) {
            Appearance::Crystalline
        } else {
            Appearance::Amorphous
        };

        Ok(CatalogEntry {
            polymer,
            drug_loading,
            polymer_loading,
            appearance,
        })
    }

    fn lookup_loading(&self, plate: u32, row: char) -> Result<Option<u32>, CatalogError> {
        let found = self.layout(plate).and_then(|l| l.drug_loading(row));
        match (found, self.policy) {
            (Some(loading), _) => Ok(Some(loading)),
            (None, CatalogPolicy::Lenient) => {
                warn!("No drug loading for plate {} row {}; using 0", plate, row);
                Ok(None)
            }
            (None, CatalogPolicy::Strict) => Err(self.miss(plate, format!("row {row}"))),
        }
    }

    fn miss(&self, plate: u32, what: String) -> CatalogError {
        if self.plates.contains_key(&plate) {
            CatalogError::UnknownEntry { plate, what }
        } else {
            CatalogError::UnknownPlate(plate)
        }
    }
}

/// Canonical unpadded form of a well label (`A01` -> `A1`).
pub fn normalize_well(label: &str) -> Option<String> {
    let mut chars = label.chars();
    let letter = chars.next().filter(char::is_ascii_uppercase)?;
    let column: u32 = chars.as_str().parse().ok()?;
    Some(format!("{letter}{column}"))
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    plates: BTreeMap<String, PlateLayoutFile>,
}

#[derive(Debug, Deserialize)]
struct PlateLayoutFile {
    #[serde(default)]
    polymer: BTreeMap<String, String>,
    #[serde(default)]
    drug_loading: BTreeMap<String, u32>,
    #[serde(default)]
    crystalline_wells: Vec<String>,
}

impl PlateLayoutFile {
    fn into_layout(self, plate: u32) -> Result<PlateLayout, CatalogError> {
        let polymers = self
            .polymer
            .into_iter()
            .map(|(column, polymer)| {
                column
                    .parse::<u32>()
                    .map(|c| (c, polymer))
                    .map_err(|_| CatalogError::InvalidTable(format!("plate {plate}: column {column:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let loadings = self
            .drug_loading
            .into_iter()
            .map(|(row, loading)| {
                let mut chars = row.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if letter.is_ascii_uppercase() && loading <= 100 => {
                        Ok((letter, loading))
                    }
                    _ => Err(CatalogError::InvalidTable(format!(
                        "plate {plate}: row {row:?} loading {loading}"
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlateLayout::new(polymers, loadings, self.crystalline_wells))
    }
}
