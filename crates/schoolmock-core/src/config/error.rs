//! Error types for configuration loading.

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Unknown file type
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),
    /// Malformed glob pattern
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),
    /// Values that parse but make no sense
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
