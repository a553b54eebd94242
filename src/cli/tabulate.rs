use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use ramanplate::dataset::DatasetBuilder;
use ramanplate::ordering::discover;
use ramanplate::sample::SampleResolver;

use super::demux::demux_export;
use super::Config;

/// Build the spectral matrix and sample table
pub fn run(folder: Option<PathBuf>, output: Option<PathBuf>, config: &Config, demux: bool) -> Result<()> {
    let folder = folder.unwrap_or_else(|| config.paths.analysis_folder.clone());
    let output = output.unwrap_or_else(|| config.paths.output_folder.clone());
    let catalog = config.build_catalog()?;
    let resolver = SampleResolver::new(&catalog).with_label_style(config.label_style());

    let mut ordered = discover(&folder, config.label_options())
        .with_context(|| format!("Failed to order files in {}", folder.display()))?;

    if demux {
        let exports: Vec<PathBuf> = ordered
            .multiwell_exports()
            .map(|e| PathBuf::from(&e.file))
            .collect();
        if !exports.is_empty() {
            for export in &exports {
                let stats = demux_export(export, &folder, config, true)?;
                info!("{}: {}", export.display(), stats);
            }
            ordered = discover(&folder, config.label_options())
                .with_context(|| format!("Failed to order files in {}", folder.display()))?;
        }
    }

    let mut builder = DatasetBuilder::with_settings(config.dataset_settings());
    builder
        .load_ordered(&ordered, &resolver)
        .with_context(|| format!("Failed to load spectra from {}", folder.display()))?;

    let (lower, upper) = config.spectra.wavenumber_range.display_bounds();
    let table = builder.build().context("Failed to build dataset")?;
    let stats = table
        .write_csv(&output)
        .with_context(|| format!("Failed to write dataset to {}", output.display()))?;

    println!("{}", stats);
    println!("Shifts between {} and {} cm-1", lower, upper);
    println!("Output written to {}", output.display());
    Ok(())
}
