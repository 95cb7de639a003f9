use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Form relay request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Required form field '{field}' is empty")]
    RequiredFieldMissing { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    FileSystem,
    Configuration,
    Content,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::HttpError(_) => ErrorCategory::Network,
            SiteError::IoError(_) => ErrorCategory::FileSystem,
            SiteError::SerializationError(_) => ErrorCategory::Content,
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::ValidationError { .. } => ErrorCategory::Content,
            SiteError::RequiredFieldMissing { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤通常重試即可
            SiteError::HttpError(_) => ErrorSeverity::Medium,
            SiteError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::HttpError(_) => {
                "Check network connectivity and the form relay endpoint, then try again".to_string()
            }
            SiteError::IoError(_) => {
                "Check that the output and assets directories exist and are writable".to_string()
            }
            SiteError::SerializationError(_) => {
                "The portfolio data could not be serialized; check for invalid values".to_string()
            }
            SiteError::ConfigError { .. } | SiteError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or CLI arguments", field)
            }
            SiteError::MissingConfigError { field } => {
                format!("Provide '{}' in the config file or on the command line", field)
            }
            SiteError::ValidationError { .. } => {
                "Review the portfolio content: project ids must be unique".to_string()
            }
            SiteError::RequiredFieldMissing { field } => {
                format!("Fill in the '{}' field before submitting", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the form relay: {}", self),
            ErrorCategory::FileSystem => format!("File system problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Content => format!("Portfolio content problem: {}", self),
            ErrorCategory::Input => format!("Please complete the form: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
