use drude_core::common::constants::SPEED_OF_LIGHT;
use drude_core::domain::{DispersionError, DispersionErrorCategory};
use drude_core::modules::material::{load_sample_set, parse_optical_table};
use std::fs;
use tempfile::TempDir;

const AG_VISIBLE_TABLE: &str = "\
# Silver, visible range (Palik-style excerpt)
400.0, 0.05, 2.40
450.0, 0.04, 2.66
500.0, 0.05, 3.00
550.0, 0.06, 3.32
600.0, 0.05, 3.60
";

#[test]
fn fixture_table_loads_with_aligned_derivations() {
    let temp = TempDir::new().expect("tempdir should be created");
    let table = temp.path().join("Ag_visible.txt");
    fs::write(&table, AG_VISIBLE_TABLE).expect("fixture should write");

    let set = load_sample_set(&table, SPEED_OF_LIGHT).expect("table should load");
    assert_eq!(set.len(), 5);
    assert_eq!(set.wavelength_span(), (400.0, 600.0));

    // Silver in the visible: strongly negative eps1, small positive eps2.
    for index in 0..set.len() {
        assert!(set.eps1()[index] < 0.0);
        assert!(set.eps2()[index] > 0.0);
        assert!(set.omega()[index] > 0.0);
        assert!(set.energy()[index] > 0.0);
    }
    // Increasing wavelength means decreasing photon energy.
    for index in 1..set.len() {
        assert!(set.energy()[index] < set.energy()[index - 1]);
    }
}

#[test]
fn parser_and_loader_agree_on_the_same_source() {
    let rows = parse_optical_table(AG_VISIBLE_TABLE).expect("table should parse");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2].wavelength_nm, 500.0);
    assert_eq!(rows[2].n, 0.05);
    assert_eq!(rows[2].k, 3.0);
}

#[test]
fn malformed_fixture_rows_fail_the_whole_load() {
    let temp = TempDir::new().expect("tempdir should be created");
    let table = temp.path().join("broken.txt");
    fs::write(&table, "400.0,0.05,2.4\n500.0,oops,3.0\n").expect("fixture should write");

    let error = load_sample_set(&table, SPEED_OF_LIGHT).expect_err("load should fail");
    assert!(matches!(
        error,
        DispersionError::MalformedTableLine { line: 2, .. }
    ));
    assert_eq!(error.category(), DispersionErrorCategory::InputValidation);
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn negative_extinction_in_fixture_reports_its_row() {
    let temp = TempDir::new().expect("tempdir should be created");
    let table = temp.path().join("negative.txt");
    fs::write(&table, "400.0,0.05,2.4\n500.0,0.05,-3.0\n").expect("fixture should write");

    assert!(matches!(
        load_sample_set(&table, SPEED_OF_LIGHT),
        Err(DispersionError::InvalidSampleValue {
            field: "k",
            row: 1,
            ..
        })
    ));
}
