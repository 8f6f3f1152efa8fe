use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives the pipeline stages in order, stopping at the first failure.
pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting CSV to JSON conversion");

        let table = self.pipeline.extract()?;
        tracing::info!(
            "Read {} data rows ({} columns)",
            table.rows.len(),
            table.headers.len()
        );

        let result = self.pipeline.transform(table)?;
        tracing::info!("Converted {} records", result.records.len());

        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
