use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    ParseError(#[from] csv::Error),

    #[error("empty input: missing header row")]
    MissingHeader,

    #[error("empty header name in column {column}")]
    EmptyHeaderName { column: usize },

    #[error("record length does not match header length: line {line} has {found} fields, header has {expected}")]
    ShapeError {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("JSON encode error: {0}")]
    EncodeError(#[from] serde_json::Error),

    #[error("invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
