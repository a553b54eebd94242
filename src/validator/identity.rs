use crate::catalog::PlateCatalog;
use crate::ordering::OrderedFiles;
use crate::sample::{SampleIdentity, SampleResolver};

use super::{ValidationCheck, ValidationReport};

/// Step 3: every well file resolves an identity
pub(crate) fn check_identities(
    ordered: &OrderedFiles,
    catalog: &PlateCatalog,
    report: &mut ValidationReport,
) -> Vec<(String, SampleIdentity)> {
    let resolver = SampleResolver::new(catalog);
    let mut resolved = Vec::new();
    let mut failures = Vec::new();

    for entry in ordered.spectra() {
        match resolver.resolve(&entry.file) {
            Ok(identity) => resolved.push((entry.file.clone(), identity)),
            Err(e) => failures.push(e.to_string()),
        }
    }

    if failures.is_empty() {
        report.add_check(ValidationCheck::ok(format!(
            "Sample identities ({} resolved)",
            resolved.len()
        )));
    } else {
        report.add_check(ValidationCheck::failed(
            "Sample identities",
            failures.join("; "),
        ));
    }

    resolved
}
