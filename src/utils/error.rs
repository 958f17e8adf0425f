use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid CSS selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    FileSystem,
    Parsing,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrapeError::HttpError(_) => ErrorCategory::Network,
            ScrapeError::IoError(_) => ErrorCategory::FileSystem,
            ScrapeError::SerializationError(_)
            | ScrapeError::UrlError(_)
            | ScrapeError::SelectorError { .. } => ErrorCategory::Parsing,
            ScrapeError::ConfigError { .. }
            | ScrapeError::ConfigValidationError { .. }
            | ScrapeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScrapeError::HttpError(_) => ErrorSeverity::Medium,
            ScrapeError::IoError(_) => ErrorSeverity::Critical,
            ScrapeError::SelectorError { .. } => ErrorSeverity::Critical,
            ScrapeError::SerializationError(_) | ScrapeError::UrlError(_) => ErrorSeverity::High,
            ScrapeError::ConfigError { .. }
            | ScrapeError::ConfigValidationError { .. }
            | ScrapeError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScrapeError::HttpError(e) if e.is_timeout() => {
                "The catalog did not answer in time; try again later or raise the timeout".to_string()
            }
            ScrapeError::HttpError(_) => {
                "Check network connectivity and that the catalog site is reachable".to_string()
            }
            ScrapeError::IoError(_) => {
                "Check that the output directory and report path are writable".to_string()
            }
            ScrapeError::SerializationError(_) => {
                "The run summary could not be encoded; rerun without --summary-json".to_string()
            }
            ScrapeError::UrlError(_) => {
                "Use an absolute http(s) base URL such as https://example.com".to_string()
            }
            ScrapeError::SelectorError { .. } => {
                "The built-in product card selectors are broken; this is a bug".to_string()
            }
            ScrapeError::ConfigError { .. } | ScrapeError::ConfigValidationError { .. } => {
                "Check the configuration file syntax and section names".to_string()
            }
            ScrapeError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the catalog: {}", self),
            ErrorCategory::FileSystem => format!("Could not write output files: {}", self),
            ErrorCategory::Parsing => format!("Could not process data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    /// Process exit code for a fatal error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
