//! TOML configuration file support.
//!
//! Every setting has a default; a config file only needs the sections it
//! changes:
//!
//! ```toml
//! # ramanplate.toml
//! [paths]
//! analysis_folder = "analyse"
//! output_folder = "pca_output"
//!
//! [naming]
//! zero_pad = false
//! delimiter = "tab"
//! label_positions = false
//!
//! [catalog]
//! policy = "strict"
//! file = "plates.toml"
//!
//! [filters]
//! plates = [1]
//! rows = ["H"]
//! columns = [5]
//! appearance = "crystalline"
//!
//! [spectra]
//! wavenumber_range = { lower = 200.0, upper = 1800.0 }
//!
//! [preprocessing]
//! snv = true
//! savgol = { window = 7, polynomial = 3, derivative = 0 }
//! ```
//!
//! `RAMANPLATE_ANALYSIS_FOLDER` and `RAMANPLATE_OUTPUT_FOLDER` override the
//! `[paths]` section.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use ramanplate::catalog::{CatalogPolicy, PlateCatalog};
use ramanplate::dataset::{DatasetSettings, Preprocessing, SampleFilter, DEFAULT_AXIS_TOLERANCE};
use ramanplate::geometry::LabelStyle;
use ramanplate::ordering::LabelOptions;
use ramanplate::spectrum::WavenumberRange;
use ramanplate::writer::{Delimiter, WriterConfig};

use super::{CatalogArgs, NamingArgs};

/// Environment variable overriding `paths.analysis_folder`.
pub const ANALYSIS_FOLDER_ENV: &str = "RAMANPLATE_ANALYSIS_FOLDER";

/// Environment variable overriding `paths.output_folder`.
pub const OUTPUT_FOLDER_ENV: &str = "RAMANPLATE_OUTPUT_FOLDER";

/// Root configuration structure for ramanplate.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output folders.
    pub paths: PathsConfig,
    /// Well label and file naming.
    pub naming: NamingConfig,
    /// Plate catalog source and miss policy.
    pub catalog: CatalogConfig,
    /// Samples excluded from tabulation.
    pub filters: SampleFilter,
    /// Spectrum cropping.
    pub spectra: SpectraConfig,
    /// Preprocessing before export.
    pub preprocessing: Preprocessing,
}

/// Input and output folders.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Folder holding well files and multiwell exports.
    pub analysis_folder: PathBuf,
    /// Folder receiving tabulated output.
    pub output_folder: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            analysis_folder: PathBuf::from("analyse"),
            output_folder: PathBuf::from("pca_output"),
        }
    }
}

/// Well label and file naming.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Zero-pad well labels (A01).
    pub zero_pad: bool,
    /// Column separator of written well files.
    pub delimiter: Delimiter,
    /// Append the capture position to sample labels.
    pub label_positions: bool,
}

/// Plate catalog source and miss policy.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Strict or lenient lookups.
    pub policy: CatalogPolicy,
    /// Extra plate tables merged over the built-ins.
    pub file: Option<PathBuf>,
}

/// Spectrum cropping.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SpectraConfig {
    /// Inclusive crop window.
    pub wavenumber_range: WavenumberRange,
    /// Largest tolerated shift difference between plates (cm-1).
    pub axis_tolerance: Option<f64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the config file if given (defaults otherwise), then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override folders from environment variables looked up through `var`.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(folder) = var(ANALYSIS_FOLDER_ENV).filter(|v| !v.is_empty()) {
            self.paths.analysis_folder = PathBuf::from(folder);
        }
        if let Some(folder) = var(OUTPUT_FOLDER_ENV).filter(|v| !v.is_empty()) {
            self.paths.output_folder = PathBuf::from(folder);
        }
    }

    /// Merge naming flags from the command line.
    pub fn apply_naming(&mut self, args: NamingArgs) {
        self.naming.zero_pad |= args.zero_pad;
        self.naming.label_positions |= args.positions;
    }

    /// Merge catalog flags from the command line.
    pub fn apply_catalog(&mut self, args: CatalogArgs) {
        if args.catalog.is_some() {
            self.catalog.file = args.catalog;
        }
        if args.lenient {
            self.catalog.policy = CatalogPolicy::Lenient;
        }
    }

    /// Well label style.
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle::from_zero_pad(self.naming.zero_pad)
    }

    /// Label options for file ordering.
    pub fn label_options(&self) -> LabelOptions {
        LabelOptions {
            positions: self.naming.label_positions,
            style: self.label_style(),
        }
    }

    /// Well file writer configuration.
    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig::default()
            .with_delimiter(self.naming.delimiter)
            .with_label_style(self.label_style())
    }

    /// Build the plate catalog: built-ins, extra tables, policy.
    pub fn build_catalog(&self) -> Result<PlateCatalog> {
        let mut catalog = PlateCatalog::builtin();
        if let Some(file) = &self.catalog.file {
            catalog = catalog
                .merge_file(file)
                .with_context(|| format!("Failed to load catalog file: {}", file.display()))?;
        }
        Ok(catalog.with_policy(self.catalog.policy))
    }

    /// Tabulation settings.
    pub fn dataset_settings(&self) -> DatasetSettings {
        DatasetSettings {
            filter: self.filters.clone(),
            wavenumber_range: self.spectra.wavenumber_range,
            preprocessing: self.preprocessing,
            axis_tolerance: self.spectra.axis_tolerance.unwrap_or(DEFAULT_AXIS_TOLERANCE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramanplate::catalog::Appearance;
    use ramanplate::dataset::SavGol;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [paths]
            analysis_folder = "data/analyse"

            [naming]
            zero_pad = true
            delimiter = "comma"

            [catalog]
            policy = "lenient"

            [filters]
            plates = [1]
            rows = ["H"]
            columns = [5, 6]
            appearance = "crystalline"

            [spectra]
            wavenumber_range = { lower = 200.0, upper = 1800.0 }

            [preprocessing]
            snv = true
            savgol = { window = 7, polynomial = 3, derivative = 1 }
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.paths.analysis_folder, PathBuf::from("data/analyse"));
        assert_eq!(config.paths.output_folder, PathBuf::from("pca_output"));
        assert_eq!(config.label_style(), LabelStyle::ZeroPadded);
        assert_eq!(config.naming.delimiter, Delimiter::Comma);
        assert_eq!(config.catalog.policy, CatalogPolicy::Lenient);
        assert_eq!(config.filters.rows, vec!['H']);
        assert_eq!(config.filters.columns, vec![5, 6]);
        assert_eq!(config.filters.appearance, Some(Appearance::Crystalline));
        assert_eq!(
            config.spectra.wavenumber_range,
            WavenumberRange::between(200.0, 1800.0)
        );
        assert!(config.preprocessing.snv);
        assert_eq!(
            config.preprocessing.savgol,
            Some(SavGol {
                window: 7,
                polynomial: 3,
                derivative: 1
            })
        );
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [spectra]
            wavenumber_range = { upper = 1800.0 }
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.spectra.wavenumber_range.lower, None);
        assert_eq!(config.spectra.wavenumber_range.upper, Some(1800.0));
        assert_eq!(config.catalog.policy, CatalogPolicy::Strict);
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.paths.analysis_folder, PathBuf::from("analyse"));
        assert_eq!(config.label_style(), LabelStyle::Unpadded);
        assert_eq!(config.dataset_settings().axis_tolerance, 0.1);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[naming]\ndelimiter = \"semicolon\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(|key| match key {
            ANALYSIS_FOLDER_ENV => Some("/data/in".to_string()),
            OUTPUT_FOLDER_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.paths.analysis_folder, PathBuf::from("/data/in"));
        assert_eq!(config.paths.output_folder, PathBuf::from("pca_output"));
    }

    #[test]
    fn test_cli_flags_override() {
        let mut config = Config::default();
        config.apply_catalog(CatalogArgs {
            catalog: Some(PathBuf::from("extra.toml")),
            lenient: true,
        });
        assert_eq!(config.catalog.policy, CatalogPolicy::Lenient);
        assert_eq!(config.catalog.file, Some(PathBuf::from("extra.toml")));
        assert!(config.build_catalog().is_err());
    }
}
