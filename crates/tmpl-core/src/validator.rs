//! Validation of materialized configurations against their kind's schema
//!
//! Every finding is collected; nothing short-circuits. Unknown keys are
//! reported but never make a configuration invalid on their own.

use std::fmt;

use serde::Serialize;
use tmpl_meta::{SchemaRegistry, TemplateKind, Values, value_shape};

use crate::{MaterializedConfig, Result};

/// Why a key was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationReason {
    /// A required option is absent
    MissingRequired,
    /// A declared option has a value of the wrong shape
    TypeMismatch,
    /// The key is not declared by the schema (warning only)
    UnknownKey,
}

impl ValidationReason {
    /// Whether this finding makes a configuration invalid.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ValidationReason::UnknownKey)
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::MissingRequired => write!(f, "missing-required"),
            ValidationReason::TypeMismatch => write!(f, "type-mismatch"),
            ValidationReason::UnknownKey => write!(f, "unknown-key"),
        }
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub key: String,
    pub reason: ValidationReason,
    pub details: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.key, self.reason, self.details)
    }
}

/// Outcome of validating a configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// No fatal findings; `warnings` holds any unknown keys
    Valid {
        config: MaterializedConfig,
        warnings: Vec<ValidationError>,
    },
    /// At least one fatal finding; `errors` holds every finding in report order
    Invalid { errors: Vec<ValidationError> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// The configuration, if valid.
    pub fn config(&self) -> Option<&MaterializedConfig> {
        match self {
            ValidationResult::Valid { config, .. } => Some(config),
            ValidationResult::Invalid { .. } => None,
        }
    }

    /// All findings: warnings of a valid result or errors of an invalid one.
    pub fn findings(&self) -> &[ValidationError] {
        match self {
            ValidationResult::Valid { warnings, .. } => warnings,
            ValidationResult::Invalid { errors } => errors,
        }
    }
}

/// Checks configurations against the schema registry.
pub struct Validator<'a> {
    schemas: &'a SchemaRegistry,
}

impl<'a> Validator<'a> {
    pub fn new(schemas: &'a SchemaRegistry) -> Self {
        Self { schemas }
    }

    /// Validate a materialized configuration.
    ///
    /// Fails only when no schema is registered for the config's kind.
    pub fn validate(&self, config: MaterializedConfig) -> Result<ValidationResult> {
        let findings = self.check(config.kind, &config.values)?;

        if findings.iter().any(|f| f.reason.is_fatal()) {
            tracing::debug!(kind = %config.kind, findings = findings.len(), "Configuration invalid");
            Ok(ValidationResult::Invalid { errors: findings })
        } else {
            Ok(ValidationResult::Valid {
                config,
                warnings: findings,
            })
        }
    }

    /// Validate values that did not come from a template (e.g. an existing file).
    pub fn validate_values(&self, kind: TemplateKind, values: Values) -> Result<ValidationResult> {
        self.validate(MaterializedConfig {
            kind,
            template: None,
            values,
        })
    }

    /// Collect every finding for a set of values, in report order:
    /// missing required keys first, then per-key findings, both by key.
    pub fn check(&self, kind: TemplateKind, values: &Values) -> Result<Vec<ValidationError>> {
        let schema = self.schemas.lookup(kind)?;
        let mut findings = Vec::new();

        for key in schema.required_keys() {
            if !values.contains_key(key) {
                findings.push(ValidationError {
                    key: key.to_string(),
                    reason: ValidationReason::MissingRequired,
                    details: format!("required by {} schema", kind),
                });
            }
        }

        for (key, value) in values {
            match schema.option(key) {
                Some(opt) if !opt.expected_type.matches(value) => {
                    findings.push(ValidationError {
                        key: key.clone(),
                        reason: ValidationReason::TypeMismatch,
                        details: format!(
                            "expected {}, found {}",
                            opt.expected_type,
                            value_shape(value)
                        ),
                    });
                }
                Some(_) => {}
                None => {
                    findings.push(ValidationError {
                        key: key.clone(),
                        reason: ValidationReason::UnknownKey,
                        details: format!("not declared in {} schema", kind),
                    });
                }
            }
        }

        Ok(findings)
    }
}
