use crate::core::{mapper, reader, serializer, writer};
use crate::core::{ConfigProvider, CsvTable, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;

/// The one pipeline this tool has: CSV in, JSON out, through a `Storage`
/// port so tests can run against in-memory files.
pub struct CsvJsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvJsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvJsonPipeline<S, C> {
    fn extract(&self) -> Result<CsvTable> {
        tracing::debug!("Reading CSV file: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path())?;
        let table = reader::read_csv(&data)?;
        tracing::debug!(
            "Parsed {} data rows with {} header columns",
            table.rows.len(),
            table.headers.len()
        );
        Ok(table)
    }

    fn transform(&self, table: CsvTable) -> Result<TransformResult> {
        let records = mapper::map_rows(&table)?;
        let fragments = serializer::to_json_fragments(&records)?;
        Ok(TransformResult { records, fragments })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let format = self.config.output_format();
        let output_path = writer::output_path(self.config.input_path(), format);
        let body = writer::render(&result.fragments, format);

        tracing::debug!(
            "Writing {} bytes to {} ({} format)",
            body.len(),
            output_path,
            format
        );
        self.storage.write_file(&output_path, body.as_bytes())?;

        Ok(output_path)
    }
}
