//! Schema entries - recognized options per template kind
//!
//! A schema describes, for one [`TemplateKind`], every option the consuming
//! tool understands: its expected value type, whether it must be present,
//! and an optional default.
//!
//! # Example TOML
//!
//! ```toml
//! kind = "lint"
//!
//! [options.bullet]
//! type = "string"
//! required = true
//! default = "-"
//!
//! [options.plugins]
//! type = "object"
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result, TemplateKind};

/// Expected shape of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Boolean,
    /// Whole numbers only
    Integer,
    /// Any number, integers included
    Number,
    Array,
    Object,
    /// Opaque value, never a type mismatch
    #[default]
    Any,
}

impl ValueType {
    /// Check whether a value has this shape.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueType::String => value.is_string(),
            ValueType::Boolean => value.is_boolean(),
            ValueType::Integer => value.is_i64() || value.is_u64(),
            ValueType::Number => value.is_number(),
            ValueType::Array => value.is_array(),
            ValueType::Object => value.is_object(),
            ValueType::Any => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Number => "number",
            ValueType::Array => "array",
            ValueType::Object => "object",
            ValueType::Any => "any",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Name of the actual shape of a value, for diagnostics.
pub fn value_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Descriptor for a single option of a schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionDescriptor {
    /// Expected value type
    #[serde(rename = "type", default)]
    pub expected_type: ValueType,
    /// Whether the option must be present after materialization
    #[serde(default)]
    pub required: bool,
    /// Value used when neither the template nor the caller sets the option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionDescriptor {
    /// An optional option of the given type.
    pub fn optional(expected_type: ValueType) -> Self {
        Self {
            expected_type,
            ..Self::default()
        }
    }

    /// A required option of the given type.
    pub fn required(expected_type: ValueType) -> Self {
        Self {
            expected_type,
            required: true,
            ..Self::default()
        }
    }

    /// Set the default value (builder pattern).
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The set of recognized options for one template kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Kind this schema applies to
    pub kind: TemplateKind,
    /// Options keyed by name. A key declared twice in a definition file is
    /// a parse error.
    #[serde(default, deserialize_with = "unique_options")]
    pub options: BTreeMap<String, OptionDescriptor>,
}

fn unique_options<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, OptionDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueOptions;

    impl<'de> Visitor<'de> for UniqueOptions {
        type Value = BTreeMap<String, OptionDescriptor>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of option descriptors")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut options = BTreeMap::new();
            while let Some((key, descriptor)) = map.next_entry::<String, OptionDescriptor>()? {
                if options.contains_key(&key) {
                    return Err(de::Error::custom(format!("duplicate option '{key}'")));
                }
                options.insert(key, descriptor);
            }
            Ok(options)
        }
    }

    deserializer.deserialize_map(UniqueOptions)
}

impl SchemaEntry {
    /// Create an empty schema for a kind.
    pub fn new(kind: TemplateKind) -> Self {
        Self {
            kind,
            options: BTreeMap::new(),
        }
    }

    /// Add an option (builder pattern). A later call with the same key replaces it.
    pub fn with_option(mut self, key: impl Into<String>, descriptor: OptionDescriptor) -> Self {
        self.options.insert(key.into(), descriptor);
        self
    }

    /// Add an option, failing if the key is already declared.
    pub fn add_option(&mut self, key: impl Into<String>, descriptor: OptionDescriptor) -> Result<()> {
        let key = key.into();
        if self.options.contains_key(&key) {
            return Err(Error::DuplicateOption {
                kind: self.kind,
                key,
            });
        }
        self.options.insert(key, descriptor);
        Ok(())
    }

    /// Get an option descriptor by key.
    pub fn option(&self, key: &str) -> Option<&OptionDescriptor> {
        self.options.get(key)
    }

    /// Iterate over options that carry a default value, in key order.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.options
            .iter()
            .filter_map(|(key, opt)| opt.default.as_ref().map(|v| (key.as_str(), v)))
    }

    /// Iterate over the keys of required options, in key order.
    pub fn required_keys(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|(_, opt)| opt.required)
            .map(|(key, _)| key.as_str())
    }

    /// Check that every declared default conforms to its option's type.
    pub fn check(&self) -> Result<()> {
        for (key, opt) in &self.options {
            if let Some(default) = &opt.default {
                if !opt.expected_type.matches(default) {
                    return Err(Error::InvalidDefault {
                        kind: self.kind,
                        key: key.clone(),
                        expected: opt.expected_type,
                        found: value_shape(default),
                    });
                }
            }
        }
        Ok(())
    }
}
