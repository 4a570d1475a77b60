use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HcacError {
    #[error("Missing product {field}")]
    MissingField { field: &'static str },

    #[error("Submission cancelled before a category was assigned")]
    SubmissionCancelled,

    #[error("Another submission is already being processed")]
    SubmissionInFlight,

    #[error("Unknown category: '{label}'")]
    UnknownCategory { label: String },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GUI error: {0}")]
    Gui(String),
}

pub type Result<T> = std::result::Result<T, HcacError>;

impl HcacError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingField { .. } => 2,
            Self::UnknownCategory { .. } => 3,
            Self::ConfigKeyNotFound { .. } | Self::InvalidConfigValue { .. } => 4,
            Self::ConfigParse { .. } => 5,
            Self::SubmissionCancelled => 130,
            _ => 1,
        }
    }

    /// Whether the error came from user input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}
