//! The catalog - schema registry and template store assembled together

use std::path::Path;

use tmpl_meta::{
    DefinitionLoader, Definitions, SchemaEntry, SchemaRegistry, Template, TemplateStore,
};

use crate::{
    MaterializedConfig, Materializer, MergePolicy, Overrides, Result, ValidationResult, Validator,
};

/// Schemas and templates available to materialization.
///
/// Registration takes `&mut self`; once assembled, a catalog is only read
/// and can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    schemas: SchemaRegistry,
    templates: TemplateStore,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in schemas and templates.
    pub fn with_builtins() -> Self {
        Self {
            schemas: SchemaRegistry::with_builtins(),
            templates: TemplateStore::with_builtins(),
        }
    }

    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    pub fn register_schema(&mut self, entry: SchemaEntry) -> Result<()> {
        self.schemas.register(entry)?;
        Ok(())
    }

    /// Register a template. Its kind must already have a schema.
    pub fn register_template(&mut self, template: Template) -> Result<()> {
        self.schemas.lookup(template.kind())?;
        self.templates.register(template)?;
        Ok(())
    }

    /// Register loaded definitions, schemas before templates.
    pub fn extend(&mut self, definitions: Definitions) -> Result<()> {
        for entry in definitions.schemas {
            self.register_schema(entry)?;
        }
        for template in definitions.templates {
            self.register_template(template)?;
        }
        Ok(())
    }

    /// Load and register every definition under a catalog directory.
    pub fn load_dir(&mut self, dir: &Path) -> Result<()> {
        let definitions = DefinitionLoader::new().load(dir)?;
        tracing::debug!(
            dir = %dir.display(),
            schemas = definitions.schemas.len(),
            templates = definitions.templates.len(),
            "Loaded catalog directory"
        );
        self.extend(definitions)
    }

    /// Materialize a template with the default (replace) merge policy.
    pub fn materialize(&self, template_name: &str, overrides: &Overrides) -> Result<MaterializedConfig> {
        self.materialize_with(template_name, overrides, MergePolicy::default())
    }

    pub fn materialize_with(
        &self,
        template_name: &str,
        overrides: &Overrides,
        policy: MergePolicy,
    ) -> Result<MaterializedConfig> {
        Materializer::new(&self.schemas, &self.templates)
            .with_policy(policy)
            .materialize(template_name, overrides)
    }

    pub fn validate(&self, config: MaterializedConfig) -> Result<ValidationResult> {
        Validator::new(&self.schemas).validate(config)
    }

    /// Materialize then validate.
    pub fn resolve(&self, template_name: &str, overrides: &Overrides) -> Result<ValidationResult> {
        self.resolve_with(template_name, overrides, MergePolicy::default())
    }

    pub fn resolve_with(
        &self,
        template_name: &str,
        overrides: &Overrides,
        policy: MergePolicy,
    ) -> Result<ValidationResult> {
        let config = self.materialize_with(template_name, overrides, policy)?;
        self.validate(config)
    }
}
