//! Property tests for file ordering and well geometry

use proptest::prelude::*;
use ramanplate::geometry::{row_index, row_letter, well_label, LabelStyle, PlateCoordinate};
use ramanplate::ordering::{order_files, FileKind, LabelOptions};
use ramanplate::sample::Position;

fn well_name(plate: u32, row: u32, column: u32, edge: bool) -> String {
    let letter = row_letter(row).unwrap();
    if edge {
        format!("plate{plate}_60mgml_{letter}{column}_edge.txt")
    } else {
        format!("plate{plate}_60mgml_{letter}{column}.txt")
    }
}

/// A distinct set of well file names plus the glass reference
fn file_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set((1u32..6, 1u32..9, 1u32..13, any::<bool>()), 1..60).prop_map(
        |wells| {
            let mut files: Vec<String> = wells
                .into_iter()
                .map(|(plate, row, column, edge)| well_name(plate, row, column, edge))
                .collect();
            files.push("analyse/glass_reference.txt".to_string());
            files
        },
    )
}

fn key(kind: &FileKind) -> Option<(u32, char, u32, Position)> {
    match *kind {
        FileKind::Well {
            plate,
            row,
            column,
            position,
        } => Some((plate, row, column, position)),
        _ => None,
    }
}

proptest! {
    /// Any permutation of the input gives the same order
    #[test]
    fn test_order_is_permutation_invariant(
        (files, shuffled) in file_set().prop_flat_map(|files| {
            let shuffled = Just(files.clone()).prop_shuffle();
            (Just(files), shuffled)
        })
    ) {
        let a = order_files(&files, LabelOptions::default()).unwrap();
        let b = order_files(&shuffled, LabelOptions::default()).unwrap();
        prop_assert_eq!(a.files(), b.files());
        prop_assert_eq!(a.labels(), b.labels());
    }

    /// Wells sort by plate, row, column and centre before edge; glass is last
    #[test]
    fn test_order_is_sorted_with_glass_last(files in file_set()) {
        let ordered = order_files(&files, LabelOptions::default()).unwrap();
        prop_assert_eq!(ordered.len(), files.len());

        let labels = ordered.labels();
        prop_assert_eq!(labels.last().copied(), Some("glass reference"));

        let keys: Vec<_> = ordered.entries.iter().filter_map(|e| key(&e.kind)).collect();
        prop_assert_eq!(keys.len(), files.len() - 1);
        for pair in keys.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    /// Labels render and parse back to the same coordinate
    #[test]
    fn test_label_roundtrip(row in 1u32..=26, column in 1u32..=99, padded in any::<bool>()) {
        let style = LabelStyle::from_zero_pad(padded);
        let label = well_label(PlateCoordinate::new(row, column), style).unwrap();

        let letter = label.chars().next().unwrap();
        prop_assert_eq!(row_index(letter).unwrap(), row);
        prop_assert_eq!(label[1..].parse::<u32>().unwrap(), column);
        if padded {
            prop_assert!(label.len() >= 3);
        }
    }

    /// Multiwell exports sort ahead of every well on their plate
    #[test]
    fn test_multiwell_leads_plate(plate in 1u32..6, mut files in file_set()) {
        files.push(format!("plate{plate}_60mgml_multiwell.txt"));
        let ordered = order_files(&files, LabelOptions::default()).unwrap();

        let index = ordered
            .entries
            .iter()
            .position(|e| e.kind == FileKind::Multiwell { plate })
            .unwrap();
        let first_well = ordered
            .entries
            .iter()
            .position(|e| matches!(e.kind, FileKind::Well { plate: p, .. } if p == plate));
        if let Some(first_well) = first_well {
            prop_assert!(index < first_well);
        }
    }
}
