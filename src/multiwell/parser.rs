use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::geometry::{self, PlateCoordinate};
use crate::spectrum::{Spectrum, SpectrumError, WavenumberRange};

use super::MultiwellError;

/// One spectrum line of an export before geometry translation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWellRecord {
    /// Instrument column index (first field)
    pub instrument_col: u32,
    /// Instrument row index (second field)
    pub instrument_row: u32,
    /// Intensities on the shared axis
    pub intensities: Vec<f64>,
}

/// A demultiplexed well: plate position plus its intensities.
///
/// Render its label with [`geometry::well_label`].
#[derive(Debug, Clone, PartialEq)]
pub struct DemuxedWell {
    /// Position on the plate after axis translation
    pub coordinate: PlateCoordinate,
    /// Intensities on the export's shared axis
    pub intensities: Vec<f64>,
}

/// A parsed multiwell export: header lines, shared axis and per-well spectra.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiwellExport {
    /// `#` header lines, verbatim
    pub header: Vec<String>,
    /// Raman shift axis shared by every well
    pub axis: Vec<f64>,
    /// Wells in file order
    pub wells: Vec<DemuxedWell>,
}

impl MultiwellExport {
    /// Parse an export file.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of
    /// failing the file; run [`crate::encoding::normalize_file`] first to keep
    /// Latin-1 header text intact.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MultiwellError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let export = Self::from_reader(BufReader::new(file))?;
        info!(
            "Parsed {} wells ({} points each) from {}",
            export.wells.len(),
            export.axis.len(),
            path.display()
        );
        Ok(export)
    }

    /// Parse export text.
    pub fn parse_str(text: &str) -> Result<Self, MultiwellError> {
        Self::from_reader(text.as_bytes())
    }

    /// Parse an export from a buffered reader.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, MultiwellError> {
        let mut header = Vec::new();
        let mut data_lines: Vec<(usize, String)> = Vec::new();

        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                header.push(line.to_string());
            } else {
                data_lines.push((line_no, line.to_string()));
            }
        }

        if data_lines.len() < 2 {
            return Err(MultiwellError::Structural {
                data_lines: data_lines.len(),
            });
        }

        let (axis_line_no, axis_line) = &data_lines[0];
        let axis = axis_line
            .split_whitespace()
            .map(|token| parse_f64(*axis_line_no, token))
            .collect::<Result<Vec<_>, _>>()?;

        let mut wells = Vec::with_capacity(data_lines.len() - 1);
        for (line_no, line) in &data_lines[1..] {
            let record = parse_record(*line_no, line)?;
            wells.push(demux_record(*line_no, record, axis.len())?);
        }

        debug!("Header lines: {}", header.len());

        Ok(Self {
            header,
            axis,
            wells,
        })
    }

    /// Number of wells in the export.
    pub fn well_count(&self) -> usize {
        self.wells.len()
    }

    /// Restrict the axis and every well to `range`.
    pub fn crop(&self, range: &WavenumberRange) -> Self {
        if range.is_full() {
            return self.clone();
        }
        let keep: Vec<bool> = self.axis.iter().map(|s| range.contains(*s)).collect();
        let select = |values: &[f64]| -> Vec<f64> {
            values
                .iter()
                .zip(&keep)
                .filter(|(_, k)| **k)
                .map(|(v, _)| *v)
                .collect()
        };

        Self {
            header: self.header.clone(),
            axis: select(&self.axis),
            wells: self
                .wells
                .iter()
                .map(|well| DemuxedWell {
                    coordinate: well.coordinate,
                    intensities: select(&well.intensities),
                })
                .collect(),
        }
    }

    /// Spectrum of one well on the shared axis.
    pub fn spectrum(&self, well: &DemuxedWell) -> Result<Spectrum, SpectrumError> {
        Spectrum::new(self.axis.clone(), well.intensities.clone())
    }
}

fn parse_f64(line: usize, token: &str) -> Result<f64, MultiwellError> {
    token.parse().map_err(|_| MultiwellError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_index(line: usize, token: &str) -> Result<u32, MultiwellError> {
    token.parse().map_err(|_| MultiwellError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Split a spectrum line into its instrument indices and intensities.
fn parse_record(line_no: usize, line: &str) -> Result<RawWellRecord, MultiwellError> {
    let mut parts = line.split_whitespace();

    let (Some(col), Some(row)) = (parts.next(), parts.next()) else {
        return Err(MultiwellError::MissingCoordinates { line: line_no });
    };

    // LabRAM export order: column index first, then row index
    let instrument_col = parse_index(line_no, col)?;
    let instrument_row = parse_index(line_no, row)?;

    let intensities = parts
        .map(|token| parse_f64(line_no, token))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawWellRecord {
        instrument_col,
        instrument_row,
        intensities,
    })
}

/// Check a record against the axis and move it into plate space.
fn demux_record(
    line_no: usize,
    record: RawWellRecord,
    axis_len: usize,
) -> Result<DemuxedWell, MultiwellError> {
    if record.intensities.len() != axis_len {
        return Err(MultiwellError::LengthMismatch {
            instrument_col: record.instrument_col,
            instrument_row: record.instrument_row,
            expected: axis_len,
            actual: record.intensities.len(),
        });
    }

    let coordinate = geometry::translate(record.instrument_col, record.instrument_row);
    // Rows past Z cannot be labelled
    coordinate
        .row_letter()
        .map_err(|source| MultiwellError::Geometry {
            line: line_no,
            source,
        })?;

    Ok(DemuxedWell {
        coordinate,
        intensities: record.intensities,
    })
}
