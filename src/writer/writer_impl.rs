use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::multiwell::{MultiwellExport, PlateTag};
use crate::spectrum::{INTENSITY_COLUMN, SHIFT_COLUMN};

use super::config::WriterConfig;
use super::error::WriterError;
use super::name::WellFileName;
use super::stats::WriterStats;

/// Writes demultiplexed spectra as one file per well.
pub struct WellFileWriter {
    out_dir: PathBuf,
    config: WriterConfig,
}

impl WellFileWriter {
    /// Create a writer targeting `out_dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(out_dir: P, config: WriterConfig) -> Result<Self, WriterError> {
        let out_dir = out_dir.as_ref().to_path_buf();
        fs::create_dir_all(&out_dir)?;
        Ok(Self { out_dir, config })
    }

    /// Destination directory
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Active configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Write every well of an export.
    ///
    /// Wells are written in export order. Two records naming the same well
    /// fail the export instead of overwriting each other.
    pub fn write_export(
        &self,
        export: &MultiwellExport,
        tag: &PlateTag,
    ) -> Result<WriterStats, WriterError> {
        let mut stats = WriterStats::default();
        let mut seen = HashSet::with_capacity(export.wells.len());

        for well in &export.wells {
            let label = crate::geometry::well_label(well.coordinate, self.config.style).map_err(
                |source| WriterError::Geometry {
                    coordinate: well.coordinate,
                    source,
                },
            )?;
            if !seen.insert(label.clone()) {
                return Err(WriterError::DuplicateWell(label));
            }

            let name = WellFileName::new(*tag, label);
            let path = self.write_spectrum(&name, &export.axis, &well.intensities)?;

            stats.files_written += 1;
            stats.points_written += export.axis.len();
            stats.paths.push(path);
        }

        info!("{}: {}", tag, stats);
        Ok(stats)
    }

    /// Write one spectrum under its well file name, returning the final path.
    ///
    /// The content goes to a temporary file in the destination directory that
    /// is renamed into place once complete.
    pub fn write_spectrum(
        &self,
        name: &WellFileName,
        axis: &[f64],
        intensities: &[f64],
    ) -> Result<PathBuf, WriterError> {
        if axis.len() != intensities.len() {
            return Err(WriterError::LengthMismatch {
                well: name.well.clone(),
                axis: axis.len(),
                intensities: intensities.len(),
            });
        }

        let path = self.out_dir.join(name.to_string());
        let mut tmp = NamedTempFile::new_in(&self.out_dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(self.config.delimiter.as_byte())
                .has_headers(false)
                .from_writer(tmp.as_file_mut());

            if self.config.delimiter.has_header() {
                writer.write_record([SHIFT_COLUMN, INTENSITY_COLUMN])?;
            }
            for (shift, intensity) in axis.iter().zip(intensities) {
                writer.write_record([format!("{shift:.6}"), format!("{intensity:.6}")])?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| WriterError::IoError(e.error))?;

        debug!("Wrote {} ({} points)", path.display(), axis.len());
        Ok(path)
    }
}
