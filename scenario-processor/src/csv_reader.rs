use crate::options::NoiseMode;
use crate::scenario_csv_row::{ScenarioRecord, COLUMN_NAMES};
use csv::{Reader, StringRecord};
use std::io::Read;

/// Result files are headerless; every row carries all of [`COLUMN_NAMES`].
fn build_csv_reader<R: Read>(reader: R) -> Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

pub fn validate_column_count(line: usize, fields: &[&str], expected_columns: &[&str]) -> Result<(), String> {
    if fields.len() == expected_columns.len() {
        Ok(())
    } else {
        Err(format!(
            "Line {:?}: expected {} columns {:?} but got {}: {:?}",
            line,
            expected_columns.len(),
            expected_columns,
            fields.len(),
            fields
        ))
    }
}

fn parse_csv_row(line: usize, result: Result<StringRecord, csv::Error>, noise: NoiseMode) -> Result<ScenarioRecord, String> {
    let raw_row = result.map_err(|e| format!("Line {:?}: could not read row: {}", line, e))?;
    validate_column_count(line, &raw_row.iter().collect::<Vec<_>>(), &COLUMN_NAMES)?;
    let mut row: ScenarioRecord = raw_row
        .deserialize(None)
        .map_err(|e| format!("Line {:?}: could not deserialize row: {}", line, e))?;
    row.post_deserialize(noise);
    Ok(row)
}

/// Lazily parses every row of a result file, tagging each with `noise`.
pub fn read_scenario_records<'r, R>(reader: R, noise: NoiseMode) -> Box<dyn Iterator<Item = Result<ScenarioRecord, String>> + 'r>
where
    R: Read + 'r,
{
    Box::new(
        build_csv_reader(reader)
            .into_records()
            .enumerate()
            .map(move |(row_idx, result)| parse_csv_row(row_idx + 1, result, noise)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    const ROW: &str = "sim_a,120,1.5,30,walking,0.2,100,120,vp7,nonoise,12.5,1.1,2.2,3.3,0.5,1.5,2.0,80.0,18.0,15.0,3.0,10.2,4.8,6.1";

    #[test]
    fn parses_headerless_rows() {
        let rows: Vec<_> = read_scenario_records(Cursor::new(format!("{}\n{}\n", ROW, ROW)), NoiseMode::NoNoise).collect();
        assert_eq!(rows.len(), 2);
        let row = rows[0].as_ref().unwrap();
        assert_eq!(row.sim_condition, "sim_a");
        assert_eq!(row.starting_glucose, 120.0);
        assert_eq!(row.net_iob, 1.5);
        assert_eq!(row.activity, "walking");
        assert_eq!(row.vp_index, "vp7");
        assert_eq!(row.tbr_below_70, 2.0);
        assert_eq!(row.tir_70_to_180, 80.0);
        assert_eq!(row.magni_risk, 6.1);
        assert_eq!(row.noise, Some(NoiseMode::NoNoise));
    }

    #[test]
    fn applies_activity_cleaning_rule() {
        let row = ROW.replace("walking", "rength training");
        let rows: Vec<_> = read_scenario_records(Cursor::new(row), NoiseMode::FullNoise).collect();
        assert_eq!(rows[0].as_ref().unwrap().activity, "strength training");
    }

    #[test]
    fn rejects_short_rows() {
        let rows: Vec<_> = read_scenario_records(Cursor::new("sim_a,120,1.5\n"), NoiseMode::NoNoise).collect();
        let err = rows[0].as_ref().unwrap_err();
        assert!(err.starts_with("Line 1: expected 24 columns"), "{}", err);
    }

    #[test]
    fn rejects_non_numeric_metrics() {
        let row = ROW.replace("80.0", "eighty");
        let rows: Vec<_> = read_scenario_records(Cursor::new(row), NoiseMode::NoNoise).collect();
        let err = rows[0].as_ref().unwrap_err();
        assert!(err.starts_with("Line 1: could not deserialize row"), "{}", err);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(read_scenario_records(Cursor::new(""), NoiseMode::NoNoise).count(), 0);
    }

    struct ErrorReader;

    impl Read for ErrorReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "Simulated read error"))
        }
    }

    #[test]
    fn surfaces_read_errors() {
        let rows: Vec<_> = read_scenario_records(ErrorReader, NoiseMode::NoNoise).take(1).collect();
        assert!(rows[0].as_ref().unwrap_err().contains("Simulated read error"));
    }

    #[test]
    fn column_count_validation_message() {
        let result = validate_column_count(3, &["a", "b"], &["x", "y", "z"]);
        assert_eq!(
            result.unwrap_err(),
            "Line 3: expected 3 columns [\"x\", \"y\", \"z\"] but got 2: [\"a\", \"b\"]"
        );
        assert!(validate_column_count(1, &["a"], &["x"]).is_ok());
    }
}
