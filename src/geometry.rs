//! # Plate Geometry
//!
//! Mapping between the Raman stage's acquisition indices and the logical
//! address space of a 96-well plate (rows `A`–`H`, columns `1`–`12`).
//!
//! The LabRAM multiwell export writes each spectrum as
//! `<column index> <row index> ...`, but for the plates scanned with this
//! stage the *instrument column* runs down the plate rows and the
//! *instrument row* runs across the plate columns:
//!
//! ```text
//! instrument column 1..=8   ->  plate row    A..=H
//! instrument row    1..=12  ->  plate column 1..=12
//! ```
//!
//! Every historical dataset was written under this convention, so
//! [`translate`] is the only place where the swap happens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of letter rows on a standard 96-well plate.
pub const PLATE_ROWS: u32 = 8;

/// Number of numbered columns on a standard 96-well plate.
pub const PLATE_COLUMNS: u32 = 12;

/// Highest row index that can be rendered as a single letter.
pub const MAX_ROW: u32 = 26;

/// Errors raised while rendering plate coordinates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// Row index cannot be rendered as a letter `A`–`Z`
    #[error("Row out of range: {0} (expected 1..=26)")]
    RowOutOfRange(u32),

    /// Row letter is not an uppercase ASCII letter
    #[error("Invalid row letter: {0:?}")]
    InvalidRowLetter(char),
}

/// A well position in logical plate space (1-based row and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlateCoordinate {
    /// Plate row, 1 = `A`
    pub row: u32,
    /// Plate column, 1-based
    pub column: u32,
}

impl PlateCoordinate {
    /// Create a coordinate from a plate row and column.
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Row letter of this coordinate.
    pub fn row_letter(&self) -> Result<char, GeometryError> {
        row_letter(self.row)
    }
}

impl fmt::Display for PlateCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.column)
    }
}

/// Well label naming convention.
///
/// Both conventions exist in historical exports; the unpadded form is what
/// the demultiplexer has always written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// `A1`, `B12`
    #[default]
    Unpadded,
    /// `A01`, `B12`
    ZeroPadded,
}

impl LabelStyle {
    /// Pick a style from a `zero_pad` flag.
    pub fn from_zero_pad(zero_pad: bool) -> Self {
        if zero_pad {
            LabelStyle::ZeroPadded
        } else {
            LabelStyle::Unpadded
        }
    }
}

/// Translate an instrument acquisition index into a plate coordinate.
///
/// The instrument column becomes the plate row and the instrument row becomes
/// the plate column. Do not "fix" this: it is the stage's export convention.
pub fn translate(instrument_col: u32, instrument_row: u32) -> PlateCoordinate {
    PlateCoordinate {
        row: instrument_col,
        column: instrument_row,
    }
}

/// Letter for a 1-based row index (`1` -> `A`).
pub fn row_letter(row: u32) -> Result<char, GeometryError> {
    if !(1..=MAX_ROW).contains(&row) {
        return Err(GeometryError::RowOutOfRange(row));
    }
    // 64 + row is in 'A'..='Z' after the range check
    Ok(char::from(b'@' + row as u8))
}

/// 1-based row index for a row letter (`A` -> `1`).
pub fn row_index(letter: char) -> Result<u32, GeometryError> {
    if letter.is_ascii_uppercase() {
        Ok(letter as u32 - 64)
    } else {
        Err(GeometryError::InvalidRowLetter(letter))
    }
}

/// Render a plate coordinate as a well label such as `A1` or `A01`.
pub fn well_label(coordinate: PlateCoordinate, style: LabelStyle) -> Result<String, GeometryError> {
    let letter = row_letter(coordinate.row)?;
    Ok(match style {
        LabelStyle::Unpadded => format!("{}{}", letter, coordinate.column),
        LabelStyle::ZeroPadded => format!("{}{:02}", letter, coordinate.column),
    })
}
