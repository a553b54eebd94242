use std::fmt;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{Appearance, PlateCatalog, UNKNOWN_POLYMER};
use crate::geometry::{self, LabelStyle, PlateCoordinate};

use super::tokens::Token;
use super::IdentityError;

/// Stem of the glass reference spectrum file.
pub const GLASS_REFERENCE_STEM: &str = "glass_reference";

/// Well label given to the glass reference.
pub const GLASS_WELL: &str = "Glass";

/// Drug screened on every plate.
pub const DRUG: &str = "PCM";

/// Where in the well the spectrum was captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Centre of the well (the default)
    #[default]
    Centre,
    /// Near the well wall
    Edge,
}

impl Position {
    /// Lowercase name used in labels and tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Centre => "centre",
            Position::Edge => "edge",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Experimental identity of one spectrum.
///
/// All derived fields are computed by [`SampleResolver::resolve`]; the record
/// is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleIdentity {
    file: String,
    plate: u32,
    well: String,
    row: Option<char>,
    column: u32,
    concentration: u32,
    drug: String,
    drug_loading: u32,
    polymer: String,
    polymer_loading: u32,
    position: Position,
    appearance: Appearance,
}

impl SampleIdentity {
    /// Identity of the glass reference spectrum.
    pub fn glass_reference(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            plate: 0,
            well: GLASS_WELL.to_string(),
            row: None,
            column: 0,
            concentration: 0,
            drug: "N/A".to_string(),
            drug_loading: 0,
            polymer: UNKNOWN_POLYMER.to_string(),
            polymer_loading: 0,
            position: Position::Centre,
            appearance: Appearance::Amorphous,
        }
    }

    /// File name the identity was parsed from
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Plate number (0 for the glass reference)
    pub fn plate(&self) -> u32 {
        self.plate
    }

    /// Well label, or `Glass`
    pub fn well(&self) -> &str {
        &self.well
    }

    /// Row letter
    pub fn row(&self) -> Option<char> {
        self.row
    }

    /// Column number
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Concentration in mg/mL (0 when not given)
    pub fn concentration(&self) -> u32 {
        self.concentration
    }

    /// Drug name
    pub fn drug(&self) -> &str {
        &self.drug
    }

    /// Drug loading in percent
    pub fn drug_loading(&self) -> u32 {
        self.drug_loading
    }

    /// Polymer name
    pub fn polymer(&self) -> &str {
        &self.polymer
    }

    /// Polymer loading in percent
    pub fn polymer_loading(&self) -> u32 {
        self.polymer_loading
    }

    /// Capture position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Visual appearance
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Whether this is the glass reference.
    pub fn is_glass_reference(&self) -> bool {
        self.well == GLASS_WELL
    }

    /// Label used in spectra plot legends, e.g. `A12 (centre) (crystalline) (plate 2)`.
    pub fn legend_label(&self) -> String {
        if self.is_glass_reference() {
            return "glass reference".to_string();
        }
        format!(
            "{} ({}) ({}) (plate {})",
            self.well, self.position, self.appearance, self.plate
        )
    }
}

impl fmt::Display for SampleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_glass_reference() {
            return write!(f, "Glass reference");
        }
        write!(
            f,
            "Sample {} ({}) on plate #{} at concentration {} mg/mL {}/{} {}%/{}% {}",
            self.well,
            self.position,
            self.plate,
            self.concentration,
            self.drug,
            self.polymer,
            self.drug_loading,
            self.polymer_loading,
            self.appearance
        )
    }
}

/// Resolves file names into [`SampleIdentity`] records against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct SampleResolver<'a> {
    catalog: &'a PlateCatalog,
    style: LabelStyle,
}

impl<'a> SampleResolver<'a> {
    /// Resolver using unpadded well labels.
    pub fn new(catalog: &'a PlateCatalog) -> Self {
        Self {
            catalog,
            style: LabelStyle::default(),
        }
    }

    /// Use a different well label style for resolved identities.
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    /// Catalog used for lookups.
    pub fn catalog(&self) -> &'a PlateCatalog {
        self.catalog
    }

    /// Resolve a well-file name (directory prefix and `.txt` are ignored).
    pub fn resolve(&self, file_name: &str) -> Result<SampleIdentity, IdentityError> {
        let name = Path::new(file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file_name);
        let stem = name.strip_suffix(".txt").unwrap_or(name);

        if stem == GLASS_REFERENCE_STEM {
            return Ok(SampleIdentity::glass_reference(name));
        }

        let mut plate = None;
        let mut well = None;
        let mut concentration = 0;
        let mut position = Position::Centre;

        for part in stem.split('_').filter(|p| !p.is_empty()) {
            let token = Token::classify(part).map_err(|token| IdentityError::InvalidToken {
                file: name.to_string(),
                token,
            })?;
            match token {
                Token::Well { row, column } => well = Some((row, column)),
                Token::Plate(n) => plate = Some(n),
                Token::Concentration(c) => concentration = c,
                Token::Edge => position = Position::Edge,
                Token::Other => debug!("{}: ignoring token {:?}", name, part),
            }
        }

        let (row, column) = well.ok_or_else(|| IdentityError::MissingWell {
            file: name.to_string(),
        })?;
        let plate = plate.ok_or_else(|| IdentityError::MissingPlate {
            file: name.to_string(),
        })?;

        let row_index = geometry::row_index(row).map_err(|_| IdentityError::InvalidToken {
            file: name.to_string(),
            token: row.to_string(),
        })?;
        let label = geometry::well_label(PlateCoordinate::new(row_index, column), self.style)
            .map_err(|_| IdentityError::InvalidToken {
                file: name.to_string(),
                token: row.to_string(),
            })?;

        let entry = self
            .catalog
            .resolve(plate, row, column, &label)
            .map_err(|source| IdentityError::Catalog {
                file: name.to_string(),
                source,
            })?;

        Ok(SampleIdentity {
            file: name.to_string(),
            plate,
            well: label,
            row: Some(row),
            column,
            concentration,
            drug: DRUG.to_string(),
            drug_loading: entry.drug_loading,
            polymer: entry.polymer,
            polymer_loading: entry.polymer_loading,
            position,
            appearance: entry.appearance,
        })
    }

    /// Resolve a demultiplexed well directly from its plate tag and coordinate.
    pub fn resolve_well(
        &self,
        plate: u32,
        concentration: Option<u32>,
        coordinate: PlateCoordinate,
    ) -> Result<SampleIdentity, IdentityError> {
        let label = geometry::well_label(coordinate, self.style).map_err(|e| {
            IdentityError::InvalidToken {
                file: format!("plate{plate}"),
                token: e.to_string(),
            }
        })?;
        let file = match concentration {
            Some(c) => format!("plate{plate}_{c}mgml_{label}.txt"),
            None => format!("plate{plate}_{label}.txt"),
        };
        self.resolve(&file)
    }
}
