//! Caller-supplied overrides, parsed from `key=value` assignments

use serde_json::Value;
use tmpl_meta::Values;

use crate::{Error, Result};

/// Option values that take precedence over template values and defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    values: Values,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list of `key=value` assignments. Later keys win.
    pub fn from_assignments<I, S>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut overrides = Self::new();
        for assignment in assignments {
            let (key, value) = parse_assignment(assignment.as_ref())?;
            overrides.values.insert(key, value);
        }
        Ok(overrides)
    }

    /// Set an override (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Values> for Overrides {
    fn from(values: Values) -> Self {
        Self { values }
    }
}

/// Parse a single `key=value` assignment.
///
/// The value is read as a JSON literal when it parses as one (`7`, `true`,
/// `["a"]`, `"quoted"`), otherwise it is kept as a plain string.
pub fn parse_assignment(assignment: &str) -> Result<(String, Value)> {
    let (key, raw) = assignment
        .split_once('=')
        .ok_or_else(|| Error::InvalidOverride {
            assignment: assignment.to_string(),
            message: "expected key=value".into(),
        })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::InvalidOverride {
            assignment: assignment.to_string(),
            message: "key is empty".into(),
        });
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
