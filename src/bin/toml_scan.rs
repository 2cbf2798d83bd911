use anyhow::Context;
use clap::Parser;
use imgscan::config::toml_config::TomlConfig;
use imgscan::core::{ConfigProvider, Pipeline};
use imgscan::utils::{logger, validation::Validate};
use imgscan::{ImagePipeline, LocalStorage, Profile, ScanEngine, ScanError, StdoutSink};

#[derive(Parser)]
#[command(name = "toml-scan")]
#[command(about = "Image URL scan driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "imgscan.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the extraction profile from config
    #[arg(long, value_enum)]
    profile: Option<Profile>,

    /// Read and scan the input, but only log what would be emitted
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("toml-scan: failed to load config file '{}': {}", args.config, e);
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || config.verbose();
    if config.log_json() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Loaded configuration '{}' from {}", config.scan.name, args.config);

    if let Some(profile) = args.profile {
        config.extract.profile = profile;
        tracing::info!("Profile overridden to: {:?}", profile);
    }

    if let Err(e) = config.validate() {
        fail(e);
    }

    display_config_summary(&config);

    let pipeline = match ImagePipeline::new(LocalStorage::new(), StdoutSink, config) {
        Ok(pipeline) => pipeline,
        Err(e) => fail(e),
    };

    if args.dry_run {
        tracing::info!("DRY RUN MODE - nothing will be written to stdout");
        if let Err(e) = perform_dry_run(&pipeline) {
            tracing::error!("Dry run failed: {:#}", e);
            eprintln!("toml-scan: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = ScanEngine::new(pipeline).run() {
        fail(e);
    }
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("Scan: {}", config.scan.name);
    if let Some(description) = &config.scan.description {
        tracing::info!("  {}", description);
    }
    tracing::info!("  Input:   {}", config.input_path());
    tracing::info!("  Profile: {:?}", config.profile());
    tracing::info!("  Format:  {:?}", config.output_format());
}

fn perform_dry_run(
    pipeline: &ImagePipeline<LocalStorage, StdoutSink, TomlConfig>,
) -> anyhow::Result<()> {
    let source = pipeline
        .extract()
        .with_context(|| format!("reading {}", pipeline.config().input_path()))?;
    let candidates = pipeline.extractor().candidates(&source.text).count();
    let harvest = pipeline.transform(source)?;

    tracing::info!("Candidates in input: {}", candidates);
    tracing::info!(
        "Would emit {} URLs ({:?}, limit {})",
        harvest.urls.len(),
        harvest.origin,
        pipeline.extractor().rules().limit
    );
    for url in &harvest.urls {
        tracing::debug!("  {}", url);
    }
    Ok(())
}

fn fail(e: ScanError) -> ! {
    tracing::error!(
        "Scan failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("toml-scan: {}", e.user_friendly_message());

    std::process::exit(e.severity().exit_code().max(1));
}
