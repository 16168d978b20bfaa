//! Error types for tmpl-meta

use crate::{TemplateKind, ValueType};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] tmpl_fs::Error),

    #[error("Schema already registered for kind: {kind}")]
    DuplicateKind { kind: TemplateKind },

    #[error("Template already registered: {name}")]
    DuplicateTemplateName { name: String },

    #[error("No schema registered for kind: {kind}")]
    UnknownKind { kind: TemplateKind },

    #[error("Template not found: {name}")]
    UnknownTemplate { name: String },

    #[error("Option '{key}' declared twice in {kind} schema")]
    DuplicateOption { kind: TemplateKind, key: String },

    #[error("Default for '{key}' in {kind} schema is {found}, expected {expected}")]
    InvalidDefault {
        kind: TemplateKind,
        key: String,
        expected: ValueType,
        found: &'static str,
    },

    #[error("Invalid template kind: {kind} (valid: lint, test-runner)")]
    InvalidKind { kind: String },
}
