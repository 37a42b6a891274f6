use thiserror::Error;

/// Unified error type for next-version operations
#[derive(Error, Debug)]
pub enum NextVersionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No existing tags found: {0}")]
    Bootstrap(String),

    #[error("Cannot promote: {0}")]
    Promotion(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Version overflow: {0}")]
    Overflow(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(String),
}

/// Convenience type alias for Results in next-version
pub type Result<T> = std::result::Result<T, NextVersionError>;

impl NextVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextVersionError::Config(msg.into())
    }

    /// Create a bootstrap error with context
    pub fn bootstrap(msg: impl Into<String>) -> Self {
        NextVersionError::Bootstrap(msg.into())
    }

    /// Create a promotion error with context
    pub fn promotion(msg: impl Into<String>) -> Self {
        NextVersionError::Promotion(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        NextVersionError::Version(msg.into())
    }

    /// Create an overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        NextVersionError::Overflow(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        NextVersionError::Output(msg.into())
    }

    /// Whether this error aborts a resolution (as opposed to a per-tag skip)
    pub fn is_fatal(&self) -> bool {
        !matches!(self, NextVersionError::Version(_))
    }
}
