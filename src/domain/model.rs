use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Parsed CSV input: the header row plus every data row, all fields as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One output record: field name to field value, in header order.
///
/// Backed by an ordered list of pairs rather than a map so the serialized
/// JSON keeps the header's key order. Inserting an existing name overwrites
/// the value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Transform stage output: the records plus their serialized JSON fragments,
/// one fragment per record, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub records: Vec<Record>,
    pub fragments: Vec<String>,
}

/// How the serialized records are laid out in the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line, output path = input path + ".jsonl".
    #[default]
    JsonLines,
    /// A single JSON array, output path = input path with ".csv" replaced by ".json".
    JsonArray,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "jsonl" => Ok(OutputFormat::JsonLines),
            "array" => Ok(OutputFormat::JsonArray),
            other => Err(format!(
                "unknown output format '{other}' (expected 'jsonl' or 'array')"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::JsonLines => write!(f, "jsonl"),
            OutputFormat::JsonArray => write!(f, "array"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut record = Record::new();
        record.insert("zulu", "1");
        record.insert("alpha", "2");
        record.insert("mike", "3");

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"zulu":"1","alpha":"2","mike":"3"}"#);
    }

    #[test]
    fn test_record_insert_overwrites_in_place() {
        let mut record = Record::new();
        record.insert("name", "first");
        record.insert("age", "47");
        record.insert("name", "second");

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("name"), Some("second"));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"second","age":"47"}"#);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::JsonLines);
        assert_eq!("array".parse::<OutputFormat>().unwrap(), OutputFormat::JsonArray);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
