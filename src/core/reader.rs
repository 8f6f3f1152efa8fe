use crate::domain::model::CsvTable;
use crate::utils::error::{ConvertError, Result};
use csv::ReaderBuilder;

/// Parses raw bytes as RFC-4180 CSV with the first line as the header.
///
/// The reader runs in flexible mode so rows with the wrong field count
/// survive parsing; the mapper owns the shape check and reports the
/// offending line. Blank lines are skipped by the CSV parser and never
/// produce an empty row.
pub fn read_csv(data: &[u8]) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(ConvertError::MissingHeader);
    }
    for (i, name) in headers.iter().enumerate() {
        if name.is_empty() {
            return Err(ConvertError::EmptyHeaderName { column: i + 1 });
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(CsvTable { headers, rows })
}
