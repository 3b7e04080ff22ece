use thiserror::Error;

/// Unified error type for auto-tag operations
#[derive(Error, Debug)]
pub enum AutoTagError {
    #[error("Not inside a git repository: {0}")]
    NotARepository(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Invalid configuration file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in auto-tag
pub type Result<T> = std::result::Result<T, AutoTagError>;

impl AutoTagError {
    /// Create a repository discovery error with context
    pub fn not_a_repository(msg: impl Into<String>) -> Self {
        AutoTagError::NotARepository(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoTagError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        AutoTagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        AutoTagError::Remote(msg.into())
    }
}
