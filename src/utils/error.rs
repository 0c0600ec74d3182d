use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {message}")]
    TomlParseError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid profile expression: '{expression}'")]
    InvalidProfileExpression { expression: String },

    #[error("Component '{name}' is already registered")]
    DuplicateComponent { name: String },

    #[error("No component named '{name}' is registered")]
    ComponentNotFound { name: String },

    #[error("Component '{name}' is not of type {expected}")]
    ComponentTypeMismatch { name: String, expected: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::ComponentNotFound { .. } => ErrorSeverity::Low,
            AppError::InvalidProfileExpression { .. } | AppError::ConfigError { .. } => {
                ErrorSeverity::Medium
            }
            AppError::TomlParseError { .. }
            | AppError::DuplicateComponent { .. }
            | AppError::ComponentTypeMismatch { .. } => ErrorSeverity::High,
            AppError::IoError(_) | AppError::FileReadError { .. } => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => format!("Could not read a required file: {}", e),
            AppError::FileReadError { path, source } => {
                format!("Could not read config file {}: {}", path, source)
            }
            AppError::TomlParseError { message } => {
                format!("The configuration file is not valid TOML: {}", message)
            }
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::InvalidProfileExpression { expression } => {
                format!("'{}' is not a usable profile name", expression)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
