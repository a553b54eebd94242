use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::sample::SampleIdentity;

use super::builder::DatasetSettings;
use super::stats::DatasetStats;
use super::DatasetError;

/// Spectral matrix file name
pub const SPECTRA_FILE: &str = "spectra.csv";
/// Sample metadata file name
pub const SAMPLES_FILE: &str = "samples.csv";
/// Legend label file name
pub const LABELS_FILE: &str = "labels.txt";
/// Run manifest file name
pub const MANIFEST_FILE: &str = "manifest.json";

/// Samples x Raman shifts matrix with its metadata.
#[derive(Debug, Clone)]
pub struct SpectralTable {
    axis: Vec<f64>,
    samples: Vec<SampleIdentity>,
    rows: Vec<Vec<f64>>,
    excluded: usize,
    settings: DatasetSettings,
}

/// Contents of `manifest.json`.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetManifest<'a> {
    /// RFC 3339 creation time
    pub created: String,
    /// Program that wrote the dataset
    pub generator: String,
    /// Number of samples
    pub sample_count: usize,
    /// Number of Raman shifts
    pub shift_count: usize,
    /// Samples dropped by the filter
    pub excluded_count: usize,
    /// Files tabulated, in order
    pub files: Vec<&'a str>,
    /// Settings the table was built with
    pub settings: &'a DatasetSettings,
}

#[derive(Serialize)]
struct SampleRecord<'a> {
    sample: &'a str,
    plate: u32,
    well: &'a str,
    row: String,
    column: u32,
    concentration: u32,
    drug: &'a str,
    drug_loading: u32,
    polymer: &'a str,
    polymer_loading: u32,
    position: &'a str,
    appearance: &'a str,
    label: String,
}

impl<'a> From<&'a SampleIdentity> for SampleRecord<'a> {
    fn from(identity: &'a SampleIdentity) -> Self {
        Self {
            sample: identity.file(),
            plate: identity.plate(),
            well: identity.well(),
            row: identity.row().map(String::from).unwrap_or_default(),
            column: identity.column(),
            concentration: identity.concentration(),
            drug: identity.drug(),
            drug_loading: identity.drug_loading(),
            polymer: identity.polymer(),
            polymer_loading: identity.polymer_loading(),
            position: identity.position().as_str(),
            appearance: identity.appearance().as_str(),
            label: identity.legend_label(),
        }
    }
}

impl SpectralTable {
    pub(crate) fn new(
        axis: Vec<f64>,
        samples: Vec<SampleIdentity>,
        rows: Vec<Vec<f64>>,
        excluded: usize,
        settings: DatasetSettings,
    ) -> Self {
        Self {
            axis,
            samples,
            rows,
            excluded,
            settings,
        }
    }

    /// Shared Raman shift axis
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// Sample identities, one per row
    pub fn samples(&self) -> &[SampleIdentity] {
        &self.samples
    }

    /// Matrix rows
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Settings used to build the table
    pub fn settings(&self) -> &DatasetSettings {
        &self.settings
    }

    /// Legend labels, one per row.
    pub fn labels(&self) -> Vec<String> {
        self.samples.iter().map(SampleIdentity::legend_label).collect()
    }

    /// Manifest describing this table.
    pub fn manifest(&self) -> DatasetManifest<'_> {
        DatasetManifest {
            created: chrono::Utc::now().to_rfc3339(),
            generator: format!("ramanplate v{}", env!("CARGO_PKG_VERSION")),
            sample_count: self.samples.len(),
            shift_count: self.axis.len(),
            excluded_count: self.excluded,
            files: self.samples.iter().map(SampleIdentity::file).collect(),
            settings: &self.settings,
        }
    }

    /// Write `spectra.csv`, `samples.csv`, `labels.txt` and `manifest.json`
    /// into `dir`, creating it if needed.
    pub fn write_csv<P: AsRef<Path>>(&self, dir: P) -> Result<DatasetStats, DatasetError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let spectra_path = dir.join(SPECTRA_FILE);
        self.write_spectra(&spectra_path)?;

        let samples_path = dir.join(SAMPLES_FILE);
        let mut writer = csv::Writer::from_path(&samples_path)?;
        for identity in &self.samples {
            writer.serialize(SampleRecord::from(identity))?;
        }
        writer.flush()?;

        let labels_path = dir.join(LABELS_FILE);
        let mut labels = fs::File::create(&labels_path)?;
        for label in self.labels() {
            writeln!(labels, "{label}")?;
        }

        let manifest_path = dir.join(MANIFEST_FILE);
        fs::write(&manifest_path, serde_json::to_string_pretty(&self.manifest())?)?;

        let stats = DatasetStats {
            samples: self.samples.len(),
            points: self.axis.len(),
            excluded: self.excluded,
            files: vec![spectra_path, samples_path, labels_path, manifest_path],
        };
        info!("{} in {}", stats, dir.display());
        Ok(stats)
    }

    fn write_spectra(&self, path: &Path) -> Result<(), DatasetError> {
        let mut writer = csv::Writer::from_path(path)?;

        let mut header = Vec::with_capacity(self.axis.len() + 1);
        header.push("sample".to_string());
        header.extend(self.axis.iter().map(f64::to_string));
        writer.write_record(&header)?;

        for (identity, row) in self.samples.iter().zip(&self.rows) {
            let mut record = Vec::with_capacity(row.len() + 1);
            record.push(identity.file().to_string());
            record.extend(row.iter().map(f64::to_string));
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
