//! Template kinds - which consuming tool a template targets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The consuming tool family a schema or template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Markdown linter configuration (remark-style `.remarkrc`)
    Lint,
    /// Browser test runner configuration (karma-style `karma.conf`)
    TestRunner,
}

impl TemplateKind {
    /// All kinds, in display order.
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Lint, TemplateKind::TestRunner];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Lint => "lint",
            TemplateKind::TestRunner => "test-runner",
        }
    }
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lint" | "linter" => Ok(TemplateKind::Lint),
            "test-runner" | "test_runner" | "testrunner" => Ok(TemplateKind::TestRunner),
            _ => Err(Error::InvalidKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
