use clap::Parser;
use imgscan::utils::{logger, validation::Validate};
use imgscan::{CliConfig, ImagePipeline, LocalStorage, ScanEngine, ScanError, StdoutSink};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let pipeline = match ImagePipeline::new(LocalStorage::new(), StdoutSink, config) {
        Ok(pipeline) => pipeline,
        Err(e) => fail(e),
    };

    if let Err(e) = ScanEngine::new(pipeline).run() {
        fail(e);
    }
}

fn fail(e: ScanError) -> ! {
    tracing::error!(
        "Scan failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("imgscan: {}", e.user_friendly_message());

    std::process::exit(e.severity().exit_code().max(1));
}
