use super::*;
use crate::catalog::{Appearance, PlateCatalog};
use crate::ordering::{order_files, LabelOptions};
use crate::sample::{Sample, SampleIdentity, SampleResolver};
use crate::spectrum::{Spectrum, WavenumberRange};
use tempfile::tempdir;

fn axis(offset: f64) -> Vec<f64> {
    (0..20).map(|i| 100.0 + i as f64 + offset).collect()
}

fn sample(catalog: &PlateCatalog, file: &str, axis: Vec<f64>, scale: f64) -> Sample {
    let identity = if file == "glass_reference.txt" {
        SampleIdentity::glass_reference(file)
    } else {
        SampleResolver::new(catalog).resolve(file).unwrap()
    };
    let intensities = axis.iter().enumerate().map(|(i, _)| scale * (i as f64 + 1.0)).collect();
    Sample::new(identity, Spectrum::new(axis, intensities).unwrap())
}

#[test]
fn test_rows_follow_push_order() {
    let catalog = PlateCatalog::builtin();
    let mut builder = DatasetBuilder::new();
    builder.push(sample(&catalog, "plate2_60mgml_A1.txt", axis(0.0), 1.0)).unwrap();
    builder.push(sample(&catalog, "plate2_60mgml_A2.txt", axis(0.0), 2.0)).unwrap();
    builder.push(sample(&catalog, "glass_reference.txt", axis(0.0), 3.0)).unwrap();

    let table = builder.build().unwrap();
    assert_eq!(table.samples().len(), 3);
    assert_eq!(table.samples()[0].well(), "A1");
    assert_eq!(table.samples()[2].well(), "Glass");
    assert_eq!(table.rows()[1][0], 2.0);
    assert_eq!(table.axis().len(), 20);
    assert_eq!(table.labels()[2], "glass reference");
}

#[test]
fn test_filter_rules() {
    let catalog = PlateCatalog::builtin();
    let filter = SampleFilter {
        plates: vec![3],
        rows: vec!['B'],
        columns: vec![5],
        appearance: Some(Appearance::Crystalline),
    };
    let mut builder = DatasetBuilder::new().with_filter(filter);

    // A3 on plate 2 is crystalline
    for (file, kept) in [
        ("plate2_60mgml_A1.txt", true),
        ("plate2_60mgml_A3.txt", false),
        ("plate2_60mgml_B2.txt", false),
        ("plate2_60mgml_C5.txt", false),
        ("plate3_40mgml_A1.txt", false),
        ("glass_reference.txt", true),
    ] {
        let accepted = builder.push(sample(&catalog, file, axis(0.0), 1.0)).unwrap();
        assert_eq!(accepted, kept, "{file}");
    }
    assert_eq!(builder.len(), 2);
    assert_eq!(builder.excluded(), 4);
}

#[test]
fn test_glass_dropped_only_by_plate_zero() {
    let glass = SampleIdentity::glass_reference("glass_reference.txt");
    let filter = SampleFilter {
        appearance: Some(Appearance::Amorphous),
        columns: vec![0],
        ..SampleFilter::default()
    };
    assert!(!filter.excludes(&glass));

    let filter = SampleFilter {
        plates: vec![0],
        ..SampleFilter::default()
    };
    assert!(filter.excludes(&glass));
    assert!(SampleFilter::none().is_empty());
}

#[test]
fn test_axes_aligned_within_tolerance() {
    let catalog = PlateCatalog::builtin();
    let mut builder = DatasetBuilder::new();
    builder.push(sample(&catalog, "plate2_A1.txt", axis(0.0), 1.0)).unwrap();
    builder.push(sample(&catalog, "plate3_A1.txt", axis(0.07), 1.0)).unwrap();

    let table = builder.build().unwrap();
    assert_eq!(table.axis(), axis(0.0).as_slice());
}

#[test]
fn test_axis_drift_rejected() {
    let catalog = PlateCatalog::builtin();
    let mut builder = DatasetBuilder::new();
    builder.push(sample(&catalog, "plate2_A1.txt", axis(0.0), 1.0)).unwrap();

    let err = builder
        .push(sample(&catalog, "plate3_A1.txt", axis(0.5), 1.0))
        .unwrap_err();
    assert!(matches!(err, DatasetError::AxisMismatch { ref file, .. } if file == "plate3_A1.txt"));

    let short: Vec<f64> = axis(0.0).into_iter().take(10).collect();
    let err = builder
        .push(sample(&catalog, "plate3_A2.txt", short, 1.0))
        .unwrap_err();
    assert!(matches!(
        err,
        DatasetError::AxisLength {
            expected: 20,
            actual: 10,
            ..
        }
    ));
}

#[test]
fn test_crop_before_alignment() {
    let catalog = PlateCatalog::builtin();
    let mut builder = DatasetBuilder::new().with_range(WavenumberRange::between(105.0, 110.0));
    builder.push(sample(&catalog, "plate2_A1.txt", axis(0.0), 1.0)).unwrap();

    let table = builder.build().unwrap();
    assert_eq!(table.axis(), &[105.0, 106.0, 107.0, 108.0, 109.0, 110.0]);
    assert_eq!(table.rows()[0][0], 6.0);
}

#[test]
fn test_empty_dataset() {
    assert!(matches!(DatasetBuilder::new().build(), Err(DatasetError::Empty)));

    let catalog = PlateCatalog::builtin();
    let mut builder = DatasetBuilder::new().with_filter(SampleFilter {
        plates: vec![2],
        ..SampleFilter::default()
    });
    builder.push(sample(&catalog, "plate2_A1.txt", axis(0.0), 1.0)).unwrap();
    assert!(matches!(builder.build(), Err(DatasetError::Empty)));
}

#[test]
fn test_snv() {
    let out = snv(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    let mean: f64 = out.iter().sum::<f64>() / out.len() as f64;
    let var: f64 = out.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (out.len() - 1) as f64;
    assert!(mean.abs() < 1e-12);
    assert!((var - 1.0).abs() < 1e-12);

    assert!(snv(&[2.0, 2.0, 2.0]).is_err());
}

#[test]
fn test_savgol_preserves_cubic() {
    let savgol = SavGol {
        window: 3,
        polynomial: 3,
        derivative: 0,
    };
    let coefficients = savgol.coefficients().unwrap();
    assert_eq!(coefficients.len(), 7);
    assert!((coefficients.iter().sum::<f64>() - 1.0).abs() < 1e-9);

    let values: Vec<f64> = (0..30)
        .map(|i| {
            let x = i as f64;
            0.01 * x.powi(3) - 2.0 * x + 1.0
        })
        .collect();
    let filtered = savgol.apply(&coefficients, &values).unwrap();
    assert_eq!(filtered.len(), 24);
    for (i, value) in filtered.iter().enumerate() {
        assert!((value - values[i + 3]).abs() < 1e-6, "point {i}");
    }
}

#[test]
fn test_savgol_first_derivative() {
    let savgol = SavGol {
        window: 2,
        polynomial: 2,
        derivative: 1,
    };
    let coefficients = savgol.coefficients().unwrap();
    let values: Vec<f64> = (0..10).map(|i| (i as f64).powi(2)).collect();
    let filtered = savgol.apply(&coefficients, &values).unwrap();
    for (i, value) in filtered.iter().enumerate() {
        let x = (i + 2) as f64;
        assert!((value - 2.0 * x).abs() < 1e-9);
    }
}

#[test]
fn test_savgol_matches_reference_weights() {
    let smooth = SavGol {
        window: 2,
        polynomial: 2,
        derivative: 0,
    }
    .coefficients()
    .unwrap();
    let expected = [-3.0, 12.0, 17.0, 12.0, -3.0].map(|c| c / 35.0);
    for (c, e) in smooth.iter().zip(expected) {
        assert!((c - e).abs() < 1e-9, "{smooth:?}");
    }

    // First derivative weights rise from left to right
    let slope = SavGol {
        window: 2,
        polynomial: 2,
        derivative: 1,
    }
    .coefficients()
    .unwrap();
    let expected = [-0.2, -0.1, 0.0, 0.1, 0.2];
    for (c, e) in slope.iter().zip(expected) {
        assert!((c - e).abs() < 1e-9, "{slope:?}");
    }
}

#[test]
fn test_savgol_rejects_bad_parameters() {
    let too_high = SavGol {
        window: 1,
        polynomial: 3,
        derivative: 0,
    };
    assert!(too_high.coefficients().is_err());

    let derivative = SavGol {
        window: 3,
        polynomial: 2,
        derivative: 3,
    };
    assert!(derivative.coefficients().is_err());
}

#[test]
fn test_preprocessing_trims_axis() {
    let catalog = PlateCatalog::builtin();
    let preprocessing = Preprocessing {
        snv: true,
        savgol: Some(SavGol {
            window: 2,
            polynomial: 2,
            derivative: 0,
        }),
    };
    let mut builder = DatasetBuilder::new().with_preprocessing(preprocessing);
    builder.push(sample(&catalog, "plate2_A1.txt", axis(0.0), 1.0)).unwrap();

    let table = builder.build().unwrap();
    assert_eq!(table.axis().len(), 16);
    assert_eq!(table.axis()[0], 102.0);
    assert_eq!(table.rows()[0].len(), 16);
}

#[test]
fn test_write_csv() {
    let catalog = PlateCatalog::builtin();
    let mut builder = DatasetBuilder::new();
    builder.push(sample(&catalog, "plate2_60mgml_A12.txt", axis(0.0), 1.0)).unwrap();
    builder.push(sample(&catalog, "glass_reference.txt", axis(0.0), 1.0)).unwrap();
    let table = builder.build().unwrap();

    let dir = tempdir().unwrap();
    let stats = table.write_csv(dir.path().join("pca_output")).unwrap();
    assert_eq!(stats.samples, 2);
    assert_eq!(stats.points, 20);
    assert_eq!(stats.files.len(), 4);

    let out = dir.path().join("pca_output");
    let spectra = std::fs::read_to_string(out.join(SPECTRA_FILE)).unwrap();
    let mut lines = spectra.lines();
    assert!(lines.next().unwrap().starts_with("sample,100,101,"));
    assert!(lines.next().unwrap().starts_with("plate2_60mgml_A12.txt,1,2,"));

    let samples = std::fs::read_to_string(out.join(SAMPLES_FILE)).unwrap();
    assert!(samples.starts_with("sample,plate,well,row,column,"));
    assert!(samples.contains("plate2_60mgml_A12.txt,2,A12,A,12,60,PCM,100,AFF,0,centre,crystalline,"));

    let labels = std::fs::read_to_string(out.join(LABELS_FILE)).unwrap();
    assert_eq!(
        labels,
        "A12 (centre) (crystalline) (plate 2)\nglass reference\n"
    );

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join(MANIFEST_FILE)).unwrap()).unwrap();
    assert_eq!(manifest["sample_count"], 2);
    assert_eq!(manifest["files"][1], "glass_reference.txt");
    assert_eq!(manifest["settings"]["axis_tolerance"], 0.1);
}

#[test]
fn test_load_ordered() {
    let dir = tempdir().unwrap();
    let body: String = (0..5).map(|i| format!("{}\t{}\n", 100 + i, i + 1)).collect();
    for name in ["plate2_B1.txt", "plate2_A1.txt", "glass_reference.txt"] {
        std::fs::write(dir.path().join(name), &body).unwrap();
    }
    let files: Vec<String> = ["plate2_B1.txt", "plate2_A1.txt", "glass_reference.txt", "plate2_multiwell.txt"]
        .iter()
        .map(|n| dir.path().join(n).display().to_string())
        .collect();
    let ordered = order_files(&files, LabelOptions::default()).unwrap();

    let catalog = PlateCatalog::builtin();
    let resolver = SampleResolver::new(&catalog);
    let mut builder = DatasetBuilder::new();
    assert_eq!(builder.load_ordered(&ordered, &resolver).unwrap(), 3);

    let table = builder.build().unwrap();
    let wells: Vec<&str> = table.samples().iter().map(|s| s.well()).collect();
    assert_eq!(wells, vec!["A1", "B1", "Glass"]);
}
