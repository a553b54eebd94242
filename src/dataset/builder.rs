use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::ordering::OrderedFiles;
use crate::sample::{Sample, SampleIdentity, SampleResolver};
use crate::spectrum::WavenumberRange;

use super::filter::SampleFilter;
use super::preprocess::Preprocessing;
use super::table::SpectralTable;
use super::DatasetError;

/// Largest shift difference (cm-1) tolerated between a spectrum and the
/// reference axis.
pub const DEFAULT_AXIS_TOLERANCE: f64 = 0.1;

/// Settings a table was built with, recorded in its manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Exclusion lists
    pub filter: SampleFilter,
    /// Crop window
    pub wavenumber_range: WavenumberRange,
    /// Preprocessing steps
    pub preprocessing: Preprocessing,
    /// Axis alignment tolerance in cm-1
    pub axis_tolerance: f64,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            filter: SampleFilter::default(),
            wavenumber_range: WavenumberRange::full(),
            preprocessing: Preprocessing::default(),
            axis_tolerance: DEFAULT_AXIS_TOLERANCE,
        }
    }
}

/// Accumulates samples, in ordering order, into a spectral matrix.
///
/// The first accepted spectrum fixes the reference axis. Later spectra must
/// have the same number of points and lie within the axis tolerance; their
/// intensities are then placed on the reference axis.
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    settings: DatasetSettings,
    axis: Option<Vec<f64>>,
    samples: Vec<SampleIdentity>,
    rows: Vec<Vec<f64>>,
    excluded: usize,
    max_drift: f64,
}

impl DatasetBuilder {
    /// Builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with explicit settings.
    pub fn with_settings(settings: DatasetSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Set the exclusion lists.
    pub fn with_filter(mut self, filter: SampleFilter) -> Self {
        self.settings.filter = filter;
        self
    }

    /// Set the crop window.
    pub fn with_range(mut self, range: WavenumberRange) -> Self {
        self.settings.wavenumber_range = range;
        self
    }

    /// Set the preprocessing steps.
    pub fn with_preprocessing(mut self, preprocessing: Preprocessing) -> Self {
        self.settings.preprocessing = preprocessing;
        self
    }

    /// Set the axis alignment tolerance (cm-1).
    pub fn with_axis_tolerance(mut self, tolerance: f64) -> Self {
        self.settings.axis_tolerance = tolerance;
        self
    }

    /// Current settings
    pub fn settings(&self) -> &DatasetSettings {
        &self.settings
    }

    /// Number of samples accepted so far
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been accepted
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples dropped by the filter
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Add a sample. Returns `false` when the filter drops it.
    pub fn push(&mut self, sample: Sample) -> Result<bool, DatasetError> {
        let (identity, spectrum) = sample.into_parts();

        if self.settings.filter.excludes(&identity) {
            debug!("Excluding {}", identity.file());
            self.excluded += 1;
            return Ok(false);
        }

        let cropped = spectrum
            .crop(&self.settings.wavenumber_range)
            .map_err(|source| DatasetError::Spectrum {
                file: identity.file().to_string(),
                source,
            })?;
        let (axis, intensities) = cropped.into_parts();

        match &self.axis {
            None => self.axis = Some(axis),
            Some(reference) => {
                if reference.len() != axis.len() {
                    return Err(DatasetError::AxisLength {
                        file: identity.file().to_string(),
                        expected: reference.len(),
                        actual: axis.len(),
                    });
                }
                let drift = max_difference(reference, &axis);
                if drift > self.settings.axis_tolerance {
                    return Err(DatasetError::AxisMismatch {
                        file: identity.file().to_string(),
                        difference: drift,
                        tolerance: self.settings.axis_tolerance,
                    });
                }
                if drift > 0.0 {
                    debug!(
                        "Aligning {} onto the reference axis ({:.4} cm-1)",
                        identity.file(),
                        drift
                    );
                }
                self.max_drift = self.max_drift.max(drift);
            }
        }

        self.samples.push(identity);
        self.rows.push(intensities);
        Ok(true)
    }

    /// Load and add every single-well file and the glass reference of an
    /// ordered set. Multiwell exports are skipped.
    pub fn load_ordered(
        &mut self,
        files: &OrderedFiles,
        resolver: &SampleResolver<'_>,
    ) -> Result<usize, DatasetError> {
        let skipped = files.multiwell_exports().count();
        if skipped > 0 {
            warn!("Skipping {} multiwell export(s); demultiplex them first", skipped);
        }

        let mut accepted = 0;
        for entry in files.spectra() {
            let sample = Sample::load(&entry.file, resolver)?;
            if self.push(sample)? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Apply preprocessing and produce the table.
    pub fn build(self) -> Result<SpectralTable, DatasetError> {
        let reference = match self.axis {
            Some(axis) if !self.samples.is_empty() => axis,
            _ => return Err(DatasetError::Empty),
        };

        let mut rows = self.rows;
        let axis = self.settings.preprocessing.apply(&reference, &mut rows)?;

        if self.max_drift > 0.0 {
            info!(
                "Spectra aligned onto the first axis (largest drift {:.4} cm-1)",
                self.max_drift
            );
        }
        info!(
            "Tabulated {} samples x {} shifts ({} excluded)",
            self.samples.len(),
            axis.len(),
            self.excluded
        );

        Ok(SpectralTable::new(
            axis,
            self.samples,
            rows,
            self.excluded,
            self.settings,
        ))
    }
}

/// Largest absolute difference between two equally long axes.
pub fn max_difference(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
