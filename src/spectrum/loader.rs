use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::{Spectrum, SpectrumError};

/// Header of the shift column in comma-separated exports.
pub const SHIFT_COLUMN: &str = "RamanShift(cm-1)";

/// Header of the intensity column in comma-separated exports.
pub const INTENSITY_COLUMN: &str = "Intensity";

/// Layout of a single-well spectrum file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellFileFormat {
    /// `wavenumber\tintensity` per line, no header
    Tab,
    /// `RamanShift(cm-1),Intensity` header followed by comma-separated pairs
    Comma,
}

impl WellFileFormat {
    /// Guess the layout from the first non-comment line.
    pub fn detect(text: &str) -> Self {
        let first = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'));

        match first {
            Some(line) if line.contains(SHIFT_COLUMN) || line.contains(',') => WellFileFormat::Comma,
            _ => WellFileFormat::Tab,
        }
    }
}

impl Spectrum {
    /// Load a spectrum from a well file, detecting its layout.
    ///
    /// Undecodable bytes are replaced rather than rejected.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SpectrumError> {
        let bytes = fs::read(path.as_ref())?;
        let text = String::from_utf8_lossy(&bytes);
        debug!("Loading spectrum from {}", path.as_ref().display());
        Self::from_text(&text)
    }

    /// Load a spectrum from any reader, detecting its layout.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SpectrumError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_text(&String::from_utf8_lossy(&bytes))
    }

    /// Parse spectrum text in either supported layout.
    pub fn from_text(text: &str) -> Result<Self, SpectrumError> {
        match WellFileFormat::detect(text) {
            WellFileFormat::Tab => parse_tab(text),
            WellFileFormat::Comma => parse_comma(text),
        }
    }
}

fn csv_builder(delimiter: u8, has_headers: bool) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(delimiter)
        .has_headers(has_headers)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true);
    builder
}

fn parse_value(record: usize, value: &str) -> Result<f64, SpectrumError> {
    value.parse().map_err(|_| SpectrumError::InvalidNumber {
        record,
        value: value.to_string(),
    })
}

fn parse_tab(text: &str) -> Result<Spectrum, SpectrumError> {
    let mut reader = csv_builder(b'\t', false).from_reader(text.as_bytes());

    let mut axis = Vec::new();
    let mut intensities = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let values: Vec<&str> = record.iter().filter(|v| !v.is_empty()).collect();
        if values.is_empty() {
            continue;
        }
        if values.len() < 2 {
            return Err(SpectrumError::InvalidNumber {
                record: i + 1,
                value: values.join("\t"),
            });
        }
        axis.push(parse_value(i + 1, values[0])?);
        intensities.push(parse_value(i + 1, values[1])?);
    }

    Spectrum::new(axis, intensities)
}

fn parse_comma(text: &str) -> Result<Spectrum, SpectrumError> {
    let mut reader = csv_builder(b',', true).from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let shift_idx = headers
        .iter()
        .position(|h| h == SHIFT_COLUMN)
        .ok_or_else(|| SpectrumError::MissingColumn(SHIFT_COLUMN.to_string()))?;
    let intensity_idx = headers
        .iter()
        .position(|h| h == INTENSITY_COLUMN)
        .ok_or_else(|| SpectrumError::MissingColumn(INTENSITY_COLUMN.to_string()))?;

    let mut axis = Vec::new();
    let mut intensities = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let shift = record.get(shift_idx).unwrap_or_default();
        let intensity = record.get(intensity_idx).unwrap_or_default();
        if shift.is_empty() && intensity.is_empty() {
            continue;
        }
        axis.push(parse_value(i + 1, shift)?);
        intensities.push(parse_value(i + 1, intensity)?);
    }

    Spectrum::new(axis, intensities)
}
