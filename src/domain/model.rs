use serde::{Deserialize, Serialize};

/// Decoded contents of the input file.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub path: String,
    pub text: String,
    /// True when invalid UTF-8 sequences were replaced during decoding.
    pub lossy: bool,
}

impl SourceText {
    pub fn from_bytes(path: impl Into<String>, bytes: &[u8]) -> Self {
        let decoded = String::from_utf8_lossy(bytes);
        let lossy = matches!(decoded, std::borrow::Cow::Owned(_));
        Self {
            path: path.into(),
            text: decoded.into_owned(),
            lossy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarvestOrigin {
    /// URLs passed the host filter and the uniqueness check.
    Filtered,
    /// Nothing passed the filter; URLs are the first unique raw candidates.
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Harvest {
    pub urls: Vec<String>,
    pub origin: HarvestOrigin,
    pub candidates_examined: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Standard,
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Lines,
    Json,
}
