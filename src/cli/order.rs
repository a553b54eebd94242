use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use ramanplate::ordering::discover;

use super::Config;

/// Print the canonical order of a folder's files
pub fn run(folder: Option<PathBuf>, config: &Config, json: bool) -> Result<()> {
    let folder = folder.unwrap_or_else(|| config.paths.analysis_folder.clone());
    let ordered = discover(&folder, config.label_options())
        .with_context(|| format!("Failed to order files in {}", folder.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ordered)?);
        return Ok(());
    }

    for (index, entry) in ordered.entries.iter().enumerate() {
        let name = Path::new(&entry.file)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| entry.file.clone());
        println!("{:4}  {:<20}  {}", index, entry.label, name);
    }
    Ok(())
}
