use std::collections::BTreeMap;

use crate::dataset::{max_difference, DEFAULT_AXIS_TOLERANCE};
use crate::sample::SampleIdentity;
use crate::spectrum::Spectrum;

use super::{ValidationCheck, ValidationReport};

fn plate_name(plate: u32) -> String {
    if plate == 0 {
        "Glass reference".to_string()
    } else {
        format!("Plate {plate}")
    }
}

/// Step 4: axis lengths within plates and shift drift between plates
pub(crate) fn check_axes(samples: &[(String, SampleIdentity)], report: &mut ValidationReport) {
    let mut by_plate: BTreeMap<u32, Vec<(String, Vec<f64>)>> = BTreeMap::new();
    let mut failures = Vec::new();

    for (path, identity) in samples {
        match Spectrum::from_file(path) {
            Ok(spectrum) => {
                let (axis, _) = spectrum.into_parts();
                by_plate
                    .entry(identity.plate())
                    .or_default()
                    .push((identity.file().to_string(), axis));
            }
            Err(e) => failures.push(format!("{}: {}", identity.file(), e)),
        }
    }

    if failures.is_empty() {
        report.add_check(ValidationCheck::ok("Spectra load"));
    } else {
        report.add_check(ValidationCheck::failed("Spectra load", failures.join("; ")));
    }

    for (plate, spectra) in &by_plate {
        let name = format!("{} axis length", plate_name(*plate));
        let expected = spectra[0].1.len();
        let odd: Vec<String> = spectra
            .iter()
            .filter(|(_, axis)| axis.len() != expected)
            .map(|(file, axis)| format!("{} ({} points)", file, axis.len()))
            .collect();
        if odd.is_empty() {
            report.add_check(ValidationCheck::ok(format!("{name} ({expected} points)")));
        } else {
            report.add_check(ValidationCheck::failed(
                name,
                format!("expected {} points: {}", expected, odd.join(", ")),
            ));
        }
    }

    // Lowest numbered plate is the reference; the glass reference only when alone
    let reference = by_plate
        .iter()
        .find(|(plate, _)| **plate != 0)
        .or_else(|| by_plate.iter().next());
    let Some((&reference_plate, reference_spectra)) = reference else {
        return;
    };
    let reference_axis = &reference_spectra[0].1;

    for (plate, spectra) in &by_plate {
        if *plate == reference_plate {
            continue;
        }
        let name = format!(
            "{} shifts vs {}",
            plate_name(*plate),
            plate_name(reference_plate).to_lowercase()
        );
        let axis = &spectra[0].1;
        if axis.len() != reference_axis.len() {
            report.add_check(ValidationCheck::failed(
                name,
                format!(
                    "{} points vs {} points",
                    axis.len(),
                    reference_axis.len()
                ),
            ));
            continue;
        }

        let drift = max_difference(reference_axis, axis);
        if drift > DEFAULT_AXIS_TOLERANCE {
            report.add_check(ValidationCheck::warning(
                name,
                format!(
                    "max shift difference {:.4} cm-1 exceeds {} cm-1",
                    drift, DEFAULT_AXIS_TOLERANCE
                ),
            ));
        } else {
            report.add_check(ValidationCheck::ok(format!("{name} (max {drift:.4} cm-1)")));
        }
    }
}
