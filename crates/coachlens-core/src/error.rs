//! Error types for CoachLens

/// Result type alias using CoachLens's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for CoachLens operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors (malformed threshold sets, invalid bounds,
    /// unknown domains)
    #[error("configuration error: {0}")]
    Config(String),

    /// File IO errors while loading configuration or fixtures
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration parse errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error stems from bad configuration rather than IO
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Yaml(_))
    }
}
