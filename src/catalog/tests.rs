use super::*;

const EXTRA_PLATE: &str = r#"
[plates.5]
crystalline_wells = ["A02", "B1"]

[plates.5.polymer]
1 = "PVP"
2 = "PVP"

[plates.5.drug_loading]
A = 40
B = 30
"#;

#[test]
fn test_builtin_lookups() {
    let catalog = PlateCatalog::builtin();

    assert_eq!(catalog.polymer_for(1, 4).unwrap(), "SOL");
    assert_eq!(catalog.polymer_for(2, 12).unwrap(), "AFF");
    assert_eq!(catalog.polymer_for(3, 7).unwrap(), "HPMCAS");
    assert_eq!(catalog.drug_loading_for(1, 'H').unwrap(), 50);
    assert_eq!(catalog.drug_loading_for(2, 'A').unwrap(), 100);
    assert_eq!(catalog.drug_loading_for(4, 'H').unwrap(), 0);

    assert!(catalog.is_crystalline(2, "A12"));
    assert!(!catalog.is_crystalline(2, "A1"));
    assert!(catalog.is_crystalline(4, "A01"));
    assert!(!catalog.is_crystalline(1, "A3"));
}

#[test]
fn test_resolve_derives_polymer_loading() {
    let catalog = PlateCatalog::builtin();

    for plate in catalog.plates().collect::<Vec<_>>() {
        for row in 'A'..='H' {
            for column in 1..=12 {
                let well = format!("{row}{column}");
                let entry = catalog.resolve(plate, row, column, &well).unwrap();
                assert_eq!(entry.drug_loading + entry.polymer_loading, 100);
            }
        }
    }

    let entry = catalog.resolve(3, 'F', 3, "F3").unwrap();
    assert_eq!(entry.polymer, "PLS");
    assert_eq!(entry.drug_loading, 75);
    assert_eq!(entry.polymer_loading, 25);
    assert_eq!(entry.appearance, Appearance::Crystalline);
}

#[test]
fn test_strict_misses() {
    let catalog = PlateCatalog::builtin();

    assert!(matches!(
        catalog.polymer_for(2, 13),
        Err(CatalogError::UnknownEntry { plate: 2, .. })
    ));
    assert!(matches!(
        catalog.drug_loading_for(2, 'J'),
        Err(CatalogError::UnknownEntry { plate: 2, .. })
    ));
    assert!(matches!(
        catalog.resolve(9, 'A', 1, "A1"),
        Err(CatalogError::UnknownPlate(9))
    ));
}

#[test]
fn test_lenient_misses() {
    let catalog = PlateCatalog::builtin().with_policy(CatalogPolicy::Lenient);

    assert_eq!(catalog.polymer_for(2, 13).unwrap(), UNKNOWN_POLYMER);
    assert_eq!(catalog.drug_loading_for(9, 'A').unwrap(), 0);

    let entry = catalog.resolve(9, 'A', 1, "A1").unwrap();
    assert_eq!(entry.polymer, "N/A");
    assert_eq!(entry.drug_loading, 0);
    assert_eq!(entry.polymer_loading, 0);
    assert_eq!(entry.appearance, Appearance::Amorphous);

    // Known rows still resolve normally in lenient mode
    let entry = catalog.resolve(2, 'B', 13, "B13").unwrap();
    assert_eq!(entry.polymer, "N/A");
    assert_eq!(entry.drug_loading, 95);
    assert_eq!(entry.polymer_loading, 5);
}

#[test]
fn test_merge_toml() {
    let catalog = PlateCatalog::builtin().merge_toml_str(EXTRA_PLATE).unwrap();

    assert_eq!(catalog.plates().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(catalog.polymer_for(5, 2).unwrap(), "PVP");
    assert_eq!(catalog.drug_loading_for(5, 'B').unwrap(), 30);
    assert!(catalog.is_crystalline(5, "A2"));
    assert!(catalog.is_crystalline(5, "B01"));
    assert!(matches!(
        catalog.polymer_for(5, 3),
        Err(CatalogError::UnknownEntry { plate: 5, .. })
    ));
}

#[test]
fn test_merge_rejects_bad_tables() {
    let bad_loading = "[plates.6.drug_loading]\nA = 120\n";
    assert!(matches!(
        PlateCatalog::empty().merge_toml_str(bad_loading),
        Err(CatalogError::InvalidTable(_))
    ));

    let bad_column = "[plates.6.polymer]\nfirst = \"PLS\"\n";
    assert!(matches!(
        PlateCatalog::empty().merge_toml_str(bad_column),
        Err(CatalogError::InvalidTable(_))
    ));
}

#[test]
fn test_resolve_rejects_loading_over_hundred() {
    let layout = PlateLayout::new(
        [(1, "PLS".to_string())],
        [('A', 150), ('B', 100)],
        Vec::<String>::new(),
    );
    let catalog = PlateCatalog::empty().with_plate(9, layout);

    assert!(matches!(
        catalog.resolve(9, 'A', 1, "A1"),
        Err(CatalogError::InvalidTable(_))
    ));

    let entry = catalog.resolve(9, 'B', 1, "B1").unwrap();
    assert_eq!(entry.drug_loading, 100);
    assert_eq!(entry.polymer_loading, 0);
}

#[test]
fn test_normalize_well() {
    assert_eq!(normalize_well("A01").as_deref(), Some("A1"));
    assert_eq!(normalize_well("H12").as_deref(), Some("H12"));
    assert_eq!(normalize_well("Glass"), None);
}
