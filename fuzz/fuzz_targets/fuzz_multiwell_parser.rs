#![no_main]

use libfuzzer_sys::fuzz_target;
use ramanplate::geometry::{well_label, LabelStyle};
use ramanplate::multiwell::MultiwellExport;
use ramanplate::spectrum::Spectrum;

fuzz_target!(|data: &[u8]| {
    // Malformed exports must fail with an error, never panic
    if let Ok(export) = MultiwellExport::from_reader(data) {
        for well in &export.wells {
            let _ = well_label(well.coordinate, LabelStyle::Unpadded);
            let _ = export.spectrum(well);
        }
    }

    let _ = Spectrum::from_reader(data);

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = ramanplate::ordering::FileKind::classify(text);
    }
});
