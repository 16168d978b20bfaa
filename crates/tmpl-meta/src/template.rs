//! Template definitions - loaded from `templates/*.toml`
//!
//! A template is a named configuration bundle for one consuming tool.
//!
//! # Example TOML
//!
//! ```toml
//! [meta]
//! name = "remark"
//! kind = "lint"
//! tool = "remark"
//! version = "1.0.0"
//! description = "Consistent markdown with GFM"
//!
//! [values]
//! frail = true
//!
//! [values.plugins]
//! remark-gfm = true
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{TemplateKind, Values};

fn default_version() -> semver::Version {
    semver::Version::new(1, 0, 0)
}

/// Identity and descriptive metadata of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMeta {
    /// Unique template name (e.g., "remark")
    pub name: String,
    /// Kind of tool this template configures
    pub kind: TemplateKind,
    /// Concrete tool the values were written for (e.g., "karma")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    /// Template revision
    #[serde(default = "default_version")]
    pub version: semver::Version,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Complete template definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub meta: TemplateMeta,
    /// Option values set by this template
    #[serde(default)]
    pub values: Values,
}

impl Template {
    /// Create an empty template at version 1.0.0.
    pub fn new(name: impl Into<String>, kind: TemplateKind) -> Self {
        Self {
            meta: TemplateMeta {
                name: name.into(),
                kind,
                tool: None,
                version: default_version(),
                description: None,
            },
            values: Values::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn kind(&self) -> TemplateKind {
        self.meta.kind
    }

    /// Set an option value (builder pattern).
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Set the target tool (builder pattern).
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.meta.tool = Some(tool.into());
        self
    }

    /// Set the version (builder pattern).
    pub fn with_version(mut self, version: semver::Version) -> Self {
        self.meta.version = version;
        self
    }

    /// Set the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }
}
