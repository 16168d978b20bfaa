//! Error types for tmpl-core

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Meta(#[from] tmpl_meta::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] tmpl_fs::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid override '{assignment}': {message}")]
    InvalidOverride { assignment: String, message: String },

    #[error("Unsupported output format: {format} (valid: json, toml, yaml, module)")]
    InvalidFormat { format: String },
}
