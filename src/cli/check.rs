use anyhow::Result;
use log::info;
use std::path::PathBuf;

use ramanplate::validator::check_folder;

use super::Config;

/// Check a folder of plate spectra
pub fn run(folder: Option<PathBuf>, config: &Config) -> Result<()> {
    let folder = folder.unwrap_or_else(|| config.paths.analysis_folder.clone());
    let catalog = config.build_catalog()?;

    info!("Checking {}", folder.display());

    match check_folder(&folder, &catalog) {
        Ok(report) => {
            // Use colorized output if available
            #[cfg(feature = "colorized_output")]
            {
                println!("{}", report.format_colored());
            }

            #[cfg(not(feature = "colorized_output"))]
            {
                println!("{}", report);
            }

            // Exit with error code if any check failed
            if report.has_failures() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Check error: {}", e);
            std::process::exit(1);
        }
    }
}
