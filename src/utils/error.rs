use thiserror::Error;

#[derive(Error, Debug)]
pub enum LandingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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
}

impl LandingError {
    /// 給使用者看的簡短錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LandingError::IoError(e) => format!("Could not read or write a file: {}", e),
            LandingError::SerializationError(e) => format!("Could not encode data: {}", e),
            LandingError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            LandingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LandingError::IoError(_) => "Check that the file exists and is readable",
            LandingError::SerializationError(_) => "Report this as a bug",
            LandingError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML"
            }
            LandingError::InvalidConfigValueError { .. } => {
                "Fix the setting or remove it to fall back to the default"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;
