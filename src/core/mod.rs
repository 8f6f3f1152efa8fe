pub mod engine;
pub mod mapper;
pub mod pipeline;
pub mod reader;
pub mod serializer;
pub mod writer;

pub use crate::domain::model::{CsvTable, OutputFormat, Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
