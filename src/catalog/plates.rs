//! Experimental design of the screened plates.
//!
//! Columns come in triplicate per polymer; rows step the drug loading down
//! from the top of the plate. Row H of plates 2–4 holds drug-free polymer
//! controls.

use super::PlateLayout;

const PLATE1_POLYMERS: [&str; 12] = [
    "PLS", "PLS", "PLS", "SOL", "SOL", "SOL", "AFF", "AFF", "AFF", "HPMCAS", "HPMCAS", "HPMCAS",
];

const PLATE2_POLYMERS: [&str; 12] = [
    "PLS", "PLS", "PLS", "AFF", "AFF", "AFF", "PLS", "PLS", "PLS", "AFF", "AFF", "AFF",
];

const PLATE3_POLYMERS: [&str; 12] = [
    "PLS", "PLS", "PLS", "AFF", "AFF", "AFF", "HPMCAS", "HPMCAS", "HPMCAS", "SOL", "SOL", "SOL",
];

const PLATE1_LOADINGS: [u32; 8] = [95, 90, 85, 80, 75, 70, 60, 50];

const PLATE2_LOADINGS: [u32; 8] = [100, 95, 90, 85, 80, 75, 70, 0];

const PLATE2_CRYSTALLINE: &[&str] = &[
    "A3", "A10", "A11", "A12", "B1", "B4", "B5", "B6", "B7", "B9", "B10", "B11", "C4", "C5", "C6",
    "C7", "C9", "C10", "C11", "C12", "D4", "D5", "D6", "D10", "D12", "E9", "E10", "E11", "E12",
];

const PLATE3_CRYSTALLINE: &[&str] = &[
    "A2", "A3", "A4", "A6", "A7", "A8", "A9", "A10", "A11", "A12", "B1", "B2", "B3", "B5", "B6",
    "B7", "B8", "B9", "B10", "B11", "B12", "C1", "C3", "C6", "C7", "C8", "C9", "C10", "C11", "C12",
    "D1", "D3", "D4", "D6", "D7", "D8", "D9", "D10", "D11", "D12", "E1", "E2", "E3", "E7", "E8",
    "E9", "E10", "E12", "F3", "F7", "F8", "F9", "F10", "F11", "F12", "G10", "G11",
];

const PLATE4_CRYSTALLINE: &[&str] = &[
    "A1", "A4", "A5", "A6", "A8", "A10", "B1", "B2", "B3", "B5", "B6", "B8", "B9", "B10", "B12",
    "C1", "C2", "C4", "C5", "C6", "C8", "C10", "C12", "D2", "D6", "D7", "D12", "E2", "E4", "E5",
    "E6", "E7", "E8", "E10", "F4", "F5", "F6", "F9", "F10", "F12", "G1", "G4", "G5", "G6", "G9",
    "G10", "G11",
];

fn layout(polymers: &[&str; 12], loadings: &[u32; 8], crystalline: &[&str]) -> PlateLayout {
    PlateLayout::new(
        polymers
            .iter()
            .enumerate()
            .map(|(i, p)| (i as u32 + 1, p.to_string())),
        loadings
            .iter()
            .enumerate()
            .map(|(i, l)| (char::from(b'A' + i as u8), *l)),
        crystalline.iter().map(|w| w.to_string()),
    )
}

/// Layouts of plates 1–4, keyed by plate number.
pub(super) fn builtin_layouts() -> Vec<(u32, PlateLayout)> {
    vec![
        (1, layout(&PLATE1_POLYMERS, &PLATE1_LOADINGS, &[])),
        (2, layout(&PLATE2_POLYMERS, &PLATE2_LOADINGS, PLATE2_CRYSTALLINE)),
        (3, layout(&PLATE3_POLYMERS, &PLATE2_LOADINGS, PLATE3_CRYSTALLINE)),
        // plate 4 repeats the plate 3 design
        (4, layout(&PLATE3_POLYMERS, &PLATE2_LOADINGS, PLATE4_CRYSTALLINE)),
    ]
}
