use crate::constants::{SCALE_MAX, SCALE_MIN};
use crate::dimension::{Dimension, PerDimension, Ranges};
use crate::error::{BalanceError, Result};
use crate::evaluate::Evaluation;
use crate::layout::Layout;
use crate::view::ViewState;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::io::Read;
use std::path::Path;

/// One input row of raw slider values
pub type ValueRow = PerDimension<i32>;

/// Read a CSV with a `Control,Accountability,Influence,Support` header.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<ValueRow>> {
    let file = std::fs::File::open(path)?;
    read_rows_from_reader(file)
}

pub fn read_rows_from_reader<R: Read>(reader: R) -> Result<Vec<ValueRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    validate_csv_headers(&mut rdr)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2; // CSV rows are 1-indexed, +1 for header

        if let Some(values) = parse_record(&rec, row)? {
            rows.push(values);
        }
    }
    debug!("read {} value rows", rows.len());
    Ok(rows)
}

fn validate_csv_headers<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<()> {
    let headers = csv_reader
        .headers()
        .map_err(|e| BalanceError::CsvHeader(format!("Failed to read headers: {}", e)))?;

    for dim in Dimension::all() {
        let header = headers.get(dim.index()).ok_or_else(|| {
            BalanceError::CsvHeader(format!("Missing {} column at index {}", dim, dim.index()))
        })?;
        if !header.eq_ignore_ascii_case(dim.as_ref()) {
            return Err(BalanceError::CsvHeader(format!(
                "Expected '{}' in column {}, found '{}'",
                dim,
                dim.index(),
                header
            )));
        }
    }
    Ok(())
}

fn parse_record(rec: &StringRecord, row: usize) -> Result<Option<ValueRow>> {
    if rec.iter().all(|f| f.trim().is_empty()) {
        return Ok(None);
    }
    if rec.len() < 4 {
        return Err(BalanceError::CsvRow {
            row,
            got: rec.len(),
        });
    }

    let mut values = ValueRow::default();
    for dim in Dimension::all() {
        let cell = rec.get(dim.index()).map(str::trim).unwrap_or_default();
        let value: i32 = cell.parse().map_err(|source| BalanceError::ValueParse {
            row,
            dimension: dim,
            value: cell.to_string(),
            source,
        })?;
        if !(SCALE_MIN..=SCALE_MAX).contains(&value) {
            return Err(BalanceError::ValueOutOfScale {
                dimension: dim,
                value,
            });
        }
        values[dim] = value;
    }
    Ok(Some(values))
}

/// Evaluate every row against the same ranges and layout.
pub fn evaluate_rows(rows: &[ValueRow], ranges: &Ranges, layout: &Layout) -> Vec<Evaluation> {
    let base = ViewState::new(*ranges, *layout);
    rows.iter()
        .map(|values| base.clone().with_values(*values).evaluate())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Band, DimensionRange};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_rows_basic() {
        let data = "Control,Accountability,Influence,Support\n3,7,3,7\n2, 6 ,9,5\n";
        let rows = read_rows_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][Dimension::Accountability], 7);
        assert_eq!(rows[1][Dimension::Influence], 9);
        assert_eq!(rows[1][Dimension::Accountability], 6);
    }

    #[test]
    fn test_headers_case_insensitive_and_blank_rows_skipped() {
        let data = "control,ACCOUNTABILITY,influence,Support,Note\n1,2,3,4,first\n,,,\n5,5,5,5,\n";
        let rows = read_rows_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][Dimension::Support], 5);
    }

    #[test]
    fn test_wrong_header() {
        let data = "Control,Influence,Accountability,Support\n1,2,3,4\n";
        let err = read_rows_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, BalanceError::CsvHeader(_)));
        assert!(err.to_string().contains("Accountability"));
    }

    #[test]
    fn test_missing_header_column() {
        let data = "Control,Accountability\n1,2\n";
        assert!(matches!(
            read_rows_from_reader(data.as_bytes()),
            Err(BalanceError::CsvHeader(_))
        ));
    }

    #[test]
    fn test_short_row() {
        let data = "Control,Accountability,Influence,Support\n1,2,3\n";
        let err = read_rows_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, BalanceError::CsvRow { row: 2, got: 3 }));
    }

    #[test]
    fn test_non_integer_cell() {
        let data = "Control,Accountability,Influence,Support\n1,2,3,4\n1,x,3,4\n";
        let err = read_rows_from_reader(data.as_bytes()).unwrap_err();
        match err {
            BalanceError::ValueParse {
                row,
                dimension,
                value,
                ..
            } => {
                assert_eq!(row, 3);
                assert_eq!(dimension, Dimension::Accountability);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_value_out_of_scale() {
        let data = "Control,Accountability,Influence,Support\n1,2,3,11\n";
        let err = read_rows_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            BalanceError::ValueOutOfScale {
                dimension: Dimension::Support,
                value: 11
            }
        ));
    }

    #[test]
    fn test_read_rows_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Control,Accountability,Influence,Support").unwrap();
        writeln!(file, "0,10,10,0").unwrap();
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(read_rows("nonexistent_input.csv").is_err());
    }

    #[test]
    fn test_evaluate_rows_applies_band() {
        let ranges = PerDimension::from_fn(|dim| {
            DimensionRange::new(dim, Band::new(2, 8).unwrap(), false).unwrap()
        });
        let rows = vec![
            ValueRow::from_fn(|_| 0),
            PerDimension::from_fn(|dim| match dim {
                Dimension::Control | Dimension::Influence => 3,
                _ => 7,
            }),
        ];
        let results = evaluate_rows(&rows, &ranges, &Layout::default());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].values[Dimension::Control], 2);
        assert!(results[1].balanced);
    }
}
