//! Materialization - three-tier merge of defaults, template and overrides

use serde::{Deserialize, Serialize};
use tmpl_meta::{SchemaRegistry, TemplateKind, TemplateStore, Values};

use crate::{MergePolicy, Overrides, Result};

/// A concrete configuration produced for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterializedConfig {
    pub kind: TemplateKind,
    /// Template the values came from; `None` for externally loaded files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub values: Values,
}

/// Produces [`MaterializedConfig`]s from registered templates.
///
/// Precedence, lowest to highest:
/// 1. Schema defaults for the template's kind
/// 2. Template values
/// 3. Caller overrides
pub struct Materializer<'a> {
    schemas: &'a SchemaRegistry,
    templates: &'a TemplateStore,
    policy: MergePolicy,
}

impl<'a> Materializer<'a> {
    pub fn new(schemas: &'a SchemaRegistry, templates: &'a TemplateStore) -> Self {
        Self {
            schemas,
            templates,
            policy: MergePolicy::default(),
        }
    }

    /// Set the merge policy (builder pattern).
    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Materialize a template with the given overrides.
    ///
    /// Fails with `UnknownTemplate` or `UnknownKind` from the lookups.
    pub fn materialize(&self, template_name: &str, overrides: &Overrides) -> Result<MaterializedConfig> {
        let template = self.templates.get(template_name)?;
        let schema = self.schemas.lookup(template.kind())?;

        let mut values: Values = schema
            .defaults()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        tracing::debug!(template = template_name, count = values.len(), "Applied schema defaults");

        self.policy.apply(&mut values, &template.values);
        tracing::debug!(template = template_name, count = template.values.len(), "Applied template values");

        self.policy.apply(&mut values, overrides.values());
        tracing::debug!(template = template_name, count = overrides.len(), "Applied overrides");

        Ok(MaterializedConfig {
            kind: template.kind(),
            template: Some(template.name().to_string()),
            values,
        })
    }
}
