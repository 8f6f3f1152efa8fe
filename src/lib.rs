pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::ConvertEngine, pipeline::CsvJsonPipeline};
pub use domain::model::OutputFormat;
pub use utils::error::{ConvertError, Result};
