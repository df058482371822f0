mod model;
mod parser;

pub use model::{OpticalSample, OpticalSampleSet};
pub use parser::parse_optical_table;

use crate::domain::{DispersionError, DispersionResult};
use std::fs;
use std::path::Path;

/// Boundary shim around the fitting core: read a `wavelength,n,k` table
/// from disk and build the immutable sample set in one step.
pub fn load_sample_set(
    table_path: impl AsRef<Path>,
    speed_of_light: f64,
) -> DispersionResult<OpticalSampleSet> {
    let table_path = table_path.as_ref();
    let source = fs::read_to_string(table_path).map_err(|source| DispersionError::TableRead {
        path: table_path.to_path_buf(),
        reason: source.to_string(),
    })?;
    let samples = parse_optical_table(&source)?;
    OpticalSampleSet::from_samples(&samples, speed_of_light)
}

#[cfg(test)]
mod tests {
    use super::load_sample_set;
    use crate::common::constants::SPEED_OF_LIGHT;
    use crate::domain::DispersionError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_table_from_disk_into_sample_set() {
        let temp = TempDir::new().expect("tempdir should be created");
        let table = temp.path().join("Ag.txt");
        fs::write(&table, "400.0,0.05,2.4\n500.0,0.05,3.0\n").expect("fixture should write");

        let set = load_sample_set(&table, SPEED_OF_LIGHT).expect("table should load");
        assert_eq!(set.len(), 2);
        assert_eq!(set.wavelength_span(), (400.0, 500.0));
    }

    #[test]
    fn missing_table_file_is_an_input_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        assert!(matches!(
            load_sample_set(temp.path().join("absent.txt"), SPEED_OF_LIGHT),
            Err(DispersionError::TableRead { .. })
        ));
    }

    #[test]
    fn header_only_table_fails_as_empty_sample_set() {
        let temp = TempDir::new().expect("tempdir should be created");
        let table = temp.path().join("empty.txt");
        fs::write(&table, "# no data rows\n").expect("fixture should write");
        assert!(matches!(
            load_sample_set(&table, SPEED_OF_LIGHT),
            Err(DispersionError::EmptySampleSet)
        ));
    }
}
