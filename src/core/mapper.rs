use crate::domain::model::{CsvTable, Record};
use crate::utils::error::{ConvertError, Result};

/// Pairs every data row with the header, one record per row.
///
/// A row whose field count differs from the header's aborts the whole run;
/// there is no per-row skipping. The reported line number is 1-based with
/// the header on line 1.
pub fn map_rows(table: &CsvTable) -> Result<Vec<Record>> {
    let width = table.headers.len();
    let mut records = Vec::with_capacity(table.rows.len());

    for (i, row) in table.rows.iter().enumerate() {
        if row.len() != width {
            return Err(ConvertError::ShapeError {
                line: i + 2,
                expected: width,
                found: row.len(),
            });
        }
        let mut record = Record::new();
        for (name, value) in table.headers.iter().zip(row) {
            record.insert(name, value);
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_map_rows_pairs_fields_with_headers() {
        let table = table(
            &["name", "age", "DOB"],
            &[&["Chris", "47", "04-09-1978"], &["Carl", "23", "12-12-2002"]],
        );

        let records = map_rows(&table).unwrap();
        assert_eq!(records.len(), 2);
        for (record, row) in records.iter().zip(&table.rows) {
            assert_eq!(record.len(), table.headers.len());
            for (j, header) in table.headers.iter().enumerate() {
                assert_eq!(record.get(header), Some(row[j].as_str()));
            }
        }
    }

    #[test]
    fn test_map_rows_empty_table() {
        let records = map_rows(&table(&["name", "age"], &[])).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_map_rows_short_row_is_shape_error() {
        let err = map_rows(&table(&["a", "b"], &[&["1", "2"], &["3"]])).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::ShapeError {
                line: 3,
                expected: 2,
                found: 1,
            }
        ));
    }

    #[test]
    fn test_map_rows_long_row_is_shape_error() {
        let err = map_rows(&table(&["a", "b"], &[&["1", "2", "3"]])).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::ShapeError {
                line: 2,
                expected: 2,
                found: 3,
            }
        ));
    }

    #[test]
    fn test_map_rows_duplicate_header_last_value_wins() {
        let records = map_rows(&table(&["a", "a"], &[&["1", "2"]])).unwrap();
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].get("a"), Some("2"));
    }
}
