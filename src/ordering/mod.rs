//! # File Ordering
//!
//! Canonical order of the working file set. The spectral matrix rows, the
//! sample table and the plot legends are all built by walking this order, so
//! it must depend on nothing but the file names:
//!
//! 1. plate number, ascending
//! 2. the plate's multiwell export before any of its wells
//! 3. row letter, then column number
//! 4. centre capture before edge capture
//!
//! `glass_reference.txt` is always last.

mod error;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use serde::Serialize;

use crate::geometry::LabelStyle;
use crate::sample::Position;

pub use error::OrderingError;

/// File name of the glass reference spectrum.
pub const GLASS_REFERENCE_FILE: &str = "glass_reference.txt";

/// Label given to the glass reference.
pub const GLASS_REFERENCE_LABEL: &str = "glass reference";

/// Label given to multiwell exports.
pub const MULTIWELL_LABEL: &str = "multiwell";

lazy_static! {
    static ref PLATE_PATTERN: Regex = Regex::new(r"plate(\d+)").expect("valid plate pattern");
    static ref WELL_PATTERN: Regex =
        Regex::new(r"_([A-Z])(\d+)(?:_[^.]+)?\.txt$").expect("valid well pattern");
    static ref EDGE_PATTERN: Regex = Regex::new(r"_edge\.txt$").expect("valid edge pattern");
    static ref MULTIWELL_PATTERN: Regex =
        Regex::new(r"_multiwell\.txt$").expect("valid multiwell pattern");
}

/// What a file in the working set is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileKind {
    /// Combined export of a whole plate
    Multiwell {
        /// Plate number
        plate: u32,
    },
    /// Spectrum of a single well
    Well {
        /// Plate number
        plate: u32,
        /// Row letter
        row: char,
        /// Column number
        column: u32,
        /// Capture position
        position: Position,
    },
    /// Substrate reference spectrum
    GlassReference,
}

impl FileKind {
    /// Classify a file by its name (any directory prefix is ignored).
    pub fn classify(file: &str) -> Result<Self, OrderingError> {
        let name = file_name(file);

        if name == GLASS_REFERENCE_FILE {
            return Ok(FileKind::GlassReference);
        }

        let is_multiwell = MULTIWELL_PATTERN.is_match(name);
        let well = WELL_PATTERN.captures(name);
        if !is_multiwell && well.is_none() {
            return Err(OrderingError::Ambiguous(file.to_string()));
        }

        let plate = PLATE_PATTERN
            .captures(name)
            .ok_or_else(|| OrderingError::MissingPlate(file.to_string()))?[1]
            .parse()
            .map_err(|_| OrderingError::InvalidPlate(file.to_string()))?;

        if is_multiwell {
            return Ok(FileKind::Multiwell { plate });
        }

        let caps = well.ok_or_else(|| OrderingError::Ambiguous(file.to_string()))?;
        let row = caps[1]
            .chars()
            .next()
            .ok_or_else(|| OrderingError::Ambiguous(file.to_string()))?;
        let column = caps[2]
            .parse()
            .map_err(|_| OrderingError::Ambiguous(file.to_string()))?;
        let position = if EDGE_PATTERN.is_match(name) {
            Position::Edge
        } else {
            Position::Centre
        };

        Ok(FileKind::Well {
            plate,
            row,
            column,
            position,
        })
    }

    /// Sort key: plate, multiwell sentinel, row code, column, position rank.
    fn sort_key(&self) -> (i64, i64, i64, i64) {
        match *self {
            FileKind::Multiwell { plate } => (i64::from(plate), -1, -1, -1),
            FileKind::Well {
                plate,
                row,
                column,
                position,
            } => (
                i64::from(plate),
                i64::from(u32::from(row)),
                i64::from(column),
                match position {
                    Position::Centre => 0,
                    Position::Edge => 1,
                },
            ),
            // Appended separately, never sorted
            FileKind::GlassReference => (i64::MAX, i64::MAX, i64::MAX, i64::MAX),
        }
    }
}

/// How sample labels are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelOptions {
    /// Append ` (centre)` / ` (edge)` to well labels
    pub positions: bool,
    /// Well label padding
    pub style: LabelStyle,
}

/// One file of the ordered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderedFile {
    /// File as given by the caller
    pub file: String,
    /// Classification
    pub kind: FileKind,
    /// Sample label
    pub label: String,
}

/// Working file set in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderedFiles {
    /// Entries in order
    pub entries: Vec<OrderedFile>,
}

impl OrderedFiles {
    /// Files in order.
    pub fn files(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.file.as_str()).collect()
    }

    /// Labels, parallel to [`OrderedFiles::files`].
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Only the single-well files and the glass reference.
    pub fn spectra(&self) -> impl Iterator<Item = &OrderedFile> {
        self.entries
            .iter()
            .filter(|e| !matches!(e.kind, FileKind::Multiwell { .. }))
    }

    /// Only the multiwell exports.
    pub fn multiwell_exports(&self) -> impl Iterator<Item = &OrderedFile> {
        self.entries
            .iter()
            .filter(|e| matches!(e.kind, FileKind::Multiwell { .. }))
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn file_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file)
}

fn label_for(kind: &FileKind, options: &LabelOptions) -> String {
    match *kind {
        FileKind::Multiwell { .. } => MULTIWELL_LABEL.to_string(),
        FileKind::GlassReference => GLASS_REFERENCE_LABEL.to_string(),
        FileKind::Well {
            row,
            column,
            position,
            ..
        } => {
            let well = match options.style {
                LabelStyle::Unpadded => format!("{row}{column}"),
                LabelStyle::ZeroPadded => format!("{row}{column:02}"),
            };
            if options.positions {
                format!("{well} ({position})")
            } else {
                well
            }
        }
    }
}

/// Order a set of file names.
///
/// Every file must classify; an unrecognized name is an error rather than
/// being dropped, so the sample count always matches the folder.
pub fn order_files<S: AsRef<str>>(
    files: &[S],
    options: LabelOptions,
) -> Result<OrderedFiles, OrderingError> {
    let mut glass = Vec::new();
    let mut keyed = Vec::with_capacity(files.len());

    for file in files {
        let file = file.as_ref();
        match FileKind::classify(file)? {
            FileKind::GlassReference => glass.push(file.to_string()),
            kind => keyed.push((kind, file.to_string())),
        }
    }

    // File text breaks ties so the result never depends on input order
    keyed.sort_by(|(a, fa), (b, fb)| match a.sort_key().cmp(&b.sort_key()) {
        Ordering::Equal => fa.cmp(fb),
        other => other,
    });
    glass.sort();

    let entries = keyed
        .into_iter()
        .chain(glass.into_iter().map(|f| (FileKind::GlassReference, f)))
        .map(|(kind, file)| OrderedFile {
            label: label_for(&kind, &options),
            file,
            kind,
        })
        .collect();

    Ok(OrderedFiles { entries })
}

/// List a folder and order its files.
///
/// Hidden files (names starting with `.`) are skipped; everything else must
/// classify.
pub fn discover<P: AsRef<Path>>(dir: P, options: LabelOptions) -> Result<OrderedFiles, OrderingError> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            debug!("Skipping hidden file {}", name);
            continue;
        }
        files.push(dir.join(&name).to_string_lossy().into_owned());
    }

    let ordered = order_files(&files, options)?;
    info!("Discovered {} files in {}", ordered.len(), dir.display());
    Ok(ordered)
}
