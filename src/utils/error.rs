use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read input file '{path}': {source}")]
    InputUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Pattern compilation failed: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that ended with an error of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ScanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScanError::InputUnavailable { .. } => ErrorCategory::Input,
            ScanError::IoError(_) | ScanError::SerializationError(_) => ErrorCategory::Output,
            ScanError::ConfigValidationError { .. }
            | ScanError::InvalidConfigValueError { .. }
            | ScanError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ScanError::PatternError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScanError::InputUnavailable { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => "Check that the input path exists",
                std::io::ErrorKind::PermissionDenied => "Check read permissions on the input file",
                _ => "Check that the input file is readable",
            },
            ScanError::IoError(_) => "Check that standard output is still open",
            ScanError::SerializationError(_) => "Retry with --format lines",
            ScanError::ConfigValidationError { .. } | ScanError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            ScanError::MissingConfigError { .. } => "Add the missing field to the configuration",
            ScanError::PatternError(_) => "This is a bug, please report it",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScanError::InputUnavailable { path, .. } => {
                format!("Input file '{}' could not be read", path)
            }
            ScanError::IoError(e) => format!("Failed to write output: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
