use super::model::OpticalSample;
use crate::domain::{DispersionError, DispersionResult};

/// Parse a `wavelength,n,k` text table into sample rows.
///
/// One comma-separated triple per line; blank lines and `#` comments are
/// skipped. Malformed rows abort the parse with the offending 1-based line
/// number rather than being dropped silently.
pub fn parse_optical_table(source: &str) -> DispersionResult<Vec<OpticalSample>> {
    let mut samples = Vec::new();

    for (line_index, raw_line) in source.lines().enumerate() {
        let line_number = line_index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(DispersionError::MalformedTableLine {
                line: line_number,
                reason: format!(
                    "expected 3 comma-separated fields, got {}",
                    fields.len()
                ),
            });
        }

        let mut values = [0.0_f64; 3];
        for (slot, (name, field)) in values
            .iter_mut()
            .zip(["wavelength", "n", "k"].into_iter().zip(fields))
        {
            *slot = field.parse::<f64>().map_err(|_| {
                DispersionError::MalformedTableLine {
                    line: line_number,
                    reason: format!("field '{name}' is not a number: '{field}'"),
                }
            })?;
        }

        samples.push(OpticalSample::new(values[0], values[1], values[2]));
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::parse_optical_table;
    use crate::domain::DispersionError;

    #[test]
    fn parses_triples_in_table_order() {
        let source = "400.0,0.05,2.4\n500.0,0.05,3.0\n600.0,0.05,3.6\n";
        let samples = parse_optical_table(source).expect("table should parse");
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].wavelength_nm, 400.0);
        assert_eq!(samples[1].n, 0.05);
        assert_eq!(samples[2].k, 3.6);
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let source = "# Palik silver, visible range\n\n400.0, 0.05, 2.4\n\n# trailing note\n500.0, 0.05, 3.0\n";
        let samples = parse_optical_table(source).expect("table should parse");
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].wavelength_nm, 500.0);
    }

    #[test]
    fn reports_line_number_for_wrong_field_count() {
        let source = "400.0,0.05,2.4\n500.0,0.05\n";
        assert!(matches!(
            parse_optical_table(source),
            Err(DispersionError::MalformedTableLine { line: 2, .. })
        ));
    }

    #[test]
    fn reports_field_name_for_non_numeric_values() {
        let source = "400.0,abc,2.4\n";
        match parse_optical_table(source) {
            Err(DispersionError::MalformedTableLine { line, reason }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("'n'"), "reason was: {reason}");
            }
            other => panic!("expected MalformedTableLine, got {other:?}"),
        }
    }

    #[test]
    fn empty_source_yields_empty_row_list() {
        // The sample-set constructor is the layer that rejects emptiness.
        let samples = parse_optical_table("# header only\n").expect("table should parse");
        assert!(samples.is_empty());
    }
}
