use crate::error::DatasetError;
use crate::models::IntakeRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads the intake dataset into memory.
///
/// The file must carry a header row with at least the "Quarter", "Week" and
/// "Intakes" columns; extra columns are ignored.
pub fn load_records(path: &Path) -> Result<Vec<IntakeRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_reader(file)
}

/// Parses intake records from any reader, so callers can feed in-memory data.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<IntakeRecord>, DatasetError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in rdr.deserialize() {
        let record: IntakeRecord = result?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let data = "Quarter,Week,Intakes\n2018-1,3,120\n2019-3,12,87\n";
        let records = load_from_reader(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].quarter, "2018-1");
        assert_eq!(records[0].week, 3);
        assert_eq!(records[0].intakes, 120);
        assert_eq!(records[1].quarter, "2019-3");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let data = "Quarter,Week,Intakes,Region\n2018-1,3,120,north\n";
        let records = load_from_reader(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].intakes, 120);
    }

    #[test]
    fn missing_intakes_column_is_a_parse_error() {
        let data = "Quarter,Week\n2018-1,3\n";
        let err = load_from_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn non_numeric_week_is_a_parse_error() {
        let data = "Quarter,Week,Intakes\n2018-1,three,120\n";
        let err = load_from_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_records(Path::new("no-such-dir/intakes.csv")).unwrap_err();

        assert!(matches!(err, DatasetError::Open { .. }));
        assert!(err.to_string().contains("no-such-dir/intakes.csv"));
    }
}
