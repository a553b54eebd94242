use super::*;
use tempfile::tempdir;

#[test]
fn test_canonical_order_and_labels() {
    let files = [
        "plate2_60mgml_B3.txt",
        "plate2_60mgml_A12.txt",
        "plate2_60mgml_multiwell.txt",
        "glass_reference.txt",
    ];

    let ordered = order_files(&files, LabelOptions::default()).unwrap();
    assert_eq!(
        ordered.files(),
        vec![
            "plate2_60mgml_multiwell.txt",
            "plate2_60mgml_A12.txt",
            "plate2_60mgml_B3.txt",
            "glass_reference.txt",
        ]
    );
    assert_eq!(ordered.labels(), vec!["multiwell", "A12", "B3", "glass reference"]);
}

#[test]
fn test_order_across_plates() {
    let files = [
        "plate10_A1.txt",
        "glass_reference.txt",
        "plate2_60mgml_A2.txt",
        "plate1_40mgml_H12.txt",
        "plate2_60mgml_A10.txt",
        "plate1_40mgml_multiwell.txt",
    ];

    let ordered = order_files(&files, LabelOptions::default()).unwrap();
    assert_eq!(
        ordered.files(),
        vec![
            "plate1_40mgml_multiwell.txt",
            "plate1_40mgml_H12.txt",
            "plate2_60mgml_A2.txt",
            "plate2_60mgml_A10.txt",
            "plate10_A1.txt",
            "glass_reference.txt",
        ]
    );
}

#[test]
fn test_centre_before_edge() {
    let files = ["plate3_C5_edge.txt", "plate3_C5.txt", "plate3_C4_edge.txt"];
    let options = LabelOptions {
        positions: true,
        ..LabelOptions::default()
    };

    let ordered = order_files(&files, options).unwrap();
    assert_eq!(
        ordered.files(),
        vec!["plate3_C4_edge.txt", "plate3_C5.txt", "plate3_C5_edge.txt"]
    );
    assert_eq!(
        ordered.labels(),
        vec!["C4 (edge)", "C5 (centre)", "C5 (edge)"]
    );
}

#[test]
fn test_order_independent_of_input_order() {
    let mut files = vec![
        "plate1_B2.txt",
        "glass_reference.txt",
        "plate1_A1.txt",
        "plate1_multiwell.txt",
        "plate1_A1_edge.txt",
    ];
    let first = order_files(&files, LabelOptions::default()).unwrap();
    files.reverse();
    let second = order_files(&files, LabelOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_padded_labels() {
    let options = LabelOptions {
        style: LabelStyle::ZeroPadded,
        ..LabelOptions::default()
    };
    let ordered = order_files(&["plate1_A1.txt", "plate1_A01_edge.txt"], options).unwrap();
    assert_eq!(ordered.labels(), vec!["A01", "A01"]);
    assert_eq!(ordered.files(), vec!["plate1_A1.txt", "plate1_A01_edge.txt"]);
}

#[test]
fn test_classification() {
    assert_eq!(
        FileKind::classify("out/glass_reference.txt").unwrap(),
        FileKind::GlassReference
    );
    assert_eq!(
        FileKind::classify("plate4_20mgml_multiwell.txt").unwrap(),
        FileKind::Multiwell { plate: 4 }
    );
    assert_eq!(
        FileKind::classify("plate4_20mgml_G11_edge.txt").unwrap(),
        FileKind::Well {
            plate: 4,
            row: 'G',
            column: 11,
            position: Position::Edge,
        }
    );
}

#[test]
fn test_unclassifiable_file_is_an_error() {
    let err = order_files(&["plate1_A1.txt", "random_notes.txt"], LabelOptions::default())
        .unwrap_err();
    assert!(matches!(err, OrderingError::Ambiguous(ref f) if f == "random_notes.txt"));
}

#[test]
fn test_missing_plate_is_an_error() {
    let err = order_files(&["sample_A1.txt"], LabelOptions::default()).unwrap_err();
    assert!(matches!(err, OrderingError::MissingPlate(_)));

    let err = order_files(&["run_multiwell.txt"], LabelOptions::default()).unwrap_err();
    assert!(matches!(err, OrderingError::MissingPlate(_)));
}

#[test]
fn test_empty_input() {
    let ordered = order_files::<&str>(&[], LabelOptions::default()).unwrap();
    assert!(ordered.is_empty());
}

#[test]
fn test_spectra_and_exports_split() {
    let ordered = order_files(
        &["plate1_multiwell.txt", "plate1_A1.txt", "glass_reference.txt"],
        LabelOptions::default(),
    )
    .unwrap();
    assert_eq!(ordered.multiwell_exports().count(), 1);
    assert_eq!(ordered.spectra().count(), 2);
}

#[test]
fn test_discover_folder() {
    let dir = tempdir().unwrap();
    for name in ["plate1_B1.txt", "plate1_A1.txt", "glass_reference.txt", ".DS_Store"] {
        std::fs::write(dir.path().join(name), "100\t1.0\n").unwrap();
    }
    std::fs::create_dir(dir.path().join("subfolder")).unwrap();

    let ordered = discover(dir.path(), LabelOptions::default()).unwrap();
    assert_eq!(ordered.labels(), vec!["A1", "B1", "glass reference"]);
    assert!(ordered.files()[0].ends_with("plate1_A1.txt"));
}
