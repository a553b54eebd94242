use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use ramanplate::encoding::normalize_file;
use ramanplate::multiwell::{MultiwellExport, PlateTag};
use ramanplate::writer::{WellFileWriter, WriterStats};

use super::Config;

/// Demultiplex one export into `out_dir`.
pub fn demux_export(
    export_path: &Path,
    out_dir: &Path,
    config: &Config,
    normalize: bool,
) -> Result<WriterStats> {
    let tag = PlateTag::from_path(export_path)
        .with_context(|| format!("Cannot read plate tag from {}", export_path.display()))?;

    if normalize {
        normalize_file(export_path)
            .with_context(|| format!("Failed to normalize {}", export_path.display()))?;
    }

    let export = MultiwellExport::from_file(export_path)
        .with_context(|| format!("Failed to parse {}", export_path.display()))?;

    let writer = WellFileWriter::new(out_dir, config.writer_config())
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let stats = writer
        .write_export(&export, &tag)
        .with_context(|| format!("Failed to write wells of {}", export_path.display()))?;

    Ok(stats)
}

/// Demultiplex multiwell exports
pub fn run(exports: Vec<PathBuf>, output: Option<PathBuf>, config: &Config, normalize: bool) -> Result<()> {
    let mut files = 0;
    let mut points = 0;

    for export_path in &exports {
        let out_dir = match &output {
            Some(dir) => dir.clone(),
            None => export_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };

        info!("Demultiplexing {} into {}", export_path.display(), out_dir.display());
        let stats = demux_export(export_path, &out_dir, config, normalize)?;
        println!("{}: {}", export_path.display(), stats);

        files += stats.files_written;
        points += stats.points_written;
    }

    if exports.len() > 1 {
        println!(
            "Total: {} well files ({} points) from {} exports",
            files,
            points,
            exports.len()
        );
    }
    Ok(())
}
