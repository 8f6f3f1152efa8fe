pub mod cli;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse()
}

#[derive(Debug, Clone, Parser)]
#[command(name = "csv2json")]
#[command(about = "Convert a CSV file to JSON, one record per data row")]
pub struct CliConfig {
    /// Path of CSV file to convert to JSON
    #[arg(long)]
    pub path: String,

    /// Output layout: "jsonl" for one object per line, "array" for a single JSON array
    #[arg(long, default_value = "jsonl", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.path
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("path", &self.path)?;
        validation::validate_path("path", &self.path)?;
        Ok(())
    }
}
