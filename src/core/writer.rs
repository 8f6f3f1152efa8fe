use crate::domain::model::OutputFormat;
use std::path::Path;

/// Derives the output path from the input path.
///
/// JSON lines mode appends ".jsonl" to the whole input path, so
/// "data.csv" becomes "data.csv.jsonl". Array mode replaces a recognized
/// ".csv" extension with ".json", falling back to appending ".json" when
/// the input has no such extension.
pub fn output_path(input_path: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::JsonLines => format!("{input_path}.jsonl"),
        OutputFormat::JsonArray => {
            let path = Path::new(input_path);
            match path.extension().and_then(|ext| ext.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("csv") => path
                    .with_extension("json")
                    .to_string_lossy()
                    .into_owned(),
                _ => format!("{input_path}.json"),
            }
        }
    }
}

/// Renders the serialized fragments into the output file body.
///
/// JSON lines mode emits one fragment per line, each newline-terminated;
/// zero records produce an empty file. Array mode joins the fragments with
/// ",\n" inside a single enclosing array.
pub fn render(fragments: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::JsonLines => {
            let mut body = String::new();
            for fragment in fragments {
                body.push_str(fragment);
                body.push('\n');
            }
            body
        }
        OutputFormat::JsonArray => format!("[{}]\n", fragments.join(",\n")),
    }
}
