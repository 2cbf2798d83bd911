pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, Profile};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "imgscan"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Extract car image URLs from a saved HTML page")
)]
pub struct CliConfig {
    /// HTML file to scan
    #[cfg_attr(feature = "cli", arg(default_value = "prado.html"))]
    pub input: String,

    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value_t = Profile::Standard))]
    pub profile: Profile,

    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value_t = OutputFormat::Lines))]
    pub format: OutputFormat,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON on stderr"))]
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: "prado.html".to_string(),
            profile: Profile::default(),
            format: OutputFormat::default(),
            verbose: false,
            log_json: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn profile(&self) -> Profile {
        self.profile
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_single_file_run() {
        let config = CliConfig::try_parse_from(["imgscan"]).unwrap();
        assert_eq!(config.input, "prado.html");
        assert_eq!(config.profile, Profile::Standard);
        assert_eq!(config.format, OutputFormat::Lines);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_profile_and_format() {
        let config = CliConfig::try_parse_from([
            "imgscan",
            "page.html",
            "--profile",
            "strict",
            "--format",
            "json",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(config.input, "page.html");
        assert_eq!(config.profile, Profile::Strict);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.verbose);
    }

    #[test]
    fn test_unknown_profile_rejected() {
        assert!(CliConfig::try_parse_from(["imgscan", "--profile", "loose"]).is_err());
    }

    #[test]
    fn test_empty_input_fails_validation() {
        let config = CliConfig {
            input: String::new(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
