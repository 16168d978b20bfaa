//! Error types for tmpl-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from tmpl-core
    #[error(transparent)]
    Core(#[from] tmpl_core::Error),

    /// Error from tmpl-meta
    #[error(transparent)]
    Meta(#[from] tmpl_meta::Error),

    /// Error from tmpl-fs
    #[error(transparent)]
    Fs(#[from] tmpl_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Validation found fatal problems; the findings were already printed
    #[error("configuration is invalid: {count} error(s)")]
    Invalid { count: usize },

    /// The output file differs from the rendered configuration
    #[error("{path} is out of date")]
    Drift { path: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
