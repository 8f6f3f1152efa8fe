use crate::domain::model::Record;
use crate::utils::error::Result;

/// Serializes each record into a compact JSON object fragment.
///
/// Keys come out in header order and every value stays a JSON string;
/// escaping is serde_json's standard string escaping.
pub fn to_json_fragments(records: &[Record]) -> Result<Vec<String>> {
    records
        .iter()
        .map(|record| Ok(serde_json::to_string(record)?))
        .collect()
}
