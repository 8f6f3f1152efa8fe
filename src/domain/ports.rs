use crate::domain::model::{CsvTable, OutputFormat, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<CsvTable>;
    fn transform(&self, table: CsvTable) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
