pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{
    cli::{LocalStorage, StdoutSink},
    toml_config::TomlConfig,
    CliConfig,
};
pub use crate::core::{etl::ScanEngine, extractor::Extractor, pipeline::ImagePipeline};
pub use domain::model::{Harvest, HarvestOrigin, OutputFormat, Profile, SourceText};
pub use utils::error::{Result, ScanError};
