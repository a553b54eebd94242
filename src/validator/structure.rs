use std::fs;
use std::path::Path;

use anyhow::Result;
use log::debug;

use crate::multiwell::{MultiwellExport, PlateTag};
use crate::ordering::{order_files, FileKind, LabelOptions, OrderedFiles};

use super::{ValidationCheck, ValidationError, ValidationReport};

/// Step 1: folder and file classification
pub(crate) fn check_structure(dir: &Path, report: &mut ValidationReport) -> Result<OrderedFiles> {
    if !dir.is_dir() {
        report.add_check(ValidationCheck::failed(
            "Folder exists",
            format!("Not a directory: {}", dir.display()),
        ));
        anyhow::bail!(ValidationError::StructureError(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }
    report.add_check(ValidationCheck::ok("Folder exists"));

    let mut classified = Vec::new();
    let mut unclassified = Vec::new();
    for entry in fs::read_dir(dir).map_err(ValidationError::from)? {
        let entry = entry.map_err(ValidationError::from)?;
        if !entry.file_type().map_err(ValidationError::from)?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = dir.join(&name).to_string_lossy().into_owned();
        match FileKind::classify(&path) {
            Ok(_) => classified.push(path),
            Err(e) => {
                debug!("{}", e);
                unclassified.push(name);
            }
        }
    }

    if unclassified.is_empty() {
        report.add_check(ValidationCheck::ok(format!(
            "File classification ({} files)",
            classified.len()
        )));
    } else {
        unclassified.sort();
        report.add_check(ValidationCheck::failed(
            "File classification",
            format!("Unrecognized file names: {}", unclassified.join(", ")),
        ));
    }

    let ordered = order_files(&classified, LabelOptions::default())?;

    if ordered
        .entries
        .iter()
        .any(|e| e.kind == FileKind::GlassReference)
    {
        report.add_check(ValidationCheck::ok("Glass reference present"));
    } else {
        report.add_check(ValidationCheck::warning(
            "Glass reference present",
            "No glass_reference.txt in folder",
        ));
    }

    Ok(ordered)
}

/// Step 2: every multiwell export parses
pub(crate) fn check_exports(ordered: &OrderedFiles, report: &mut ValidationReport) {
    for entry in ordered.multiwell_exports() {
        let path = Path::new(&entry.file);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| entry.file.clone());
        let check_name = format!("Export {name}");

        if let Err(e) = PlateTag::from_path(path) {
            report.add_check(ValidationCheck::failed(check_name, e.to_string()));
            continue;
        }

        match MultiwellExport::from_file(path) {
            Ok(export) => report.add_check(ValidationCheck::ok(format!(
                "{} ({} wells, {} points)",
                check_name,
                export.well_count(),
                export.axis.len()
            ))),
            Err(e) => report.add_check(ValidationCheck::failed(check_name, e.to_string())),
        }
    }
}
