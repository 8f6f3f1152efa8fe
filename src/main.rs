use clap::Parser;
use csv2json::utils::{logger, validation::Validate};
use csv2json::{CliConfig, ConvertEngine, CsvJsonPipeline, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csv2json");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let pipeline = CsvJsonPipeline::new(storage, config);
    let engine = ConvertEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("JSON file saved at {}", output_path);
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
