use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid shift format: '{value}' is not an integer")]
    InvalidShiftFormat { value: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CipherError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CipherError::IoError(_) => ErrorCategory::Io,
            CipherError::TomlError(_) | CipherError::InvalidShiftFormat { .. } => {
                ErrorCategory::Config
            }
            CipherError::InvalidConfigValueError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CipherError::IoError(_) => ErrorSeverity::Critical,
            CipherError::TomlError(_)
            | CipherError::InvalidShiftFormat { .. }
            | CipherError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CipherError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            CipherError::TomlError(_) => {
                "Check the configuration file for TOML syntax errors".to_string()
            }
            CipherError::InvalidShiftFormat { .. } => {
                "Supply the shift as a plain integer, e.g. --shift 3".to_string()
            }
            CipherError::InvalidConfigValueError { field, .. } => {
                format!("Correct the '{}' setting and retry", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CipherError::IoError(e) => format!("Could not read a required file: {}", e),
            CipherError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            CipherError::InvalidShiftFormat { value } => {
                format!("'{}' is not a valid shift value", value)
            }
            CipherError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
