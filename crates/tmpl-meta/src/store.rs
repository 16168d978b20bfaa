//! Template store - named templates, read-only once registered

use std::collections::HashMap;

use crate::{Error, Result, Template, TemplateKind};

/// Central store of template definitions.
///
/// Provides lookup by name and filtering by kind.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, Template>,
}

impl TemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Create a store pre-populated with all built-in templates.
    pub fn with_builtins() -> Self {
        let mut store = Self::new();
        for template in crate::builtins::builtin_templates() {
            store.templates.insert(template.meta.name.clone(), template);
        }
        store
    }

    /// Register a template.
    ///
    /// Fails with [`Error::DuplicateTemplateName`] if the name is taken.
    pub fn register(&mut self, template: Template) -> Result<()> {
        if self.templates.contains_key(template.name()) {
            return Err(Error::DuplicateTemplateName {
                name: template.meta.name,
            });
        }
        tracing::debug!(name = %template.name(), kind = %template.kind(), "Registered template");
        self.templates.insert(template.meta.name.clone(), template);
        Ok(())
    }

    /// Get a template by name.
    pub fn get(&self, name: &str) -> Result<&Template> {
        self.templates.get(name).ok_or_else(|| Error::UnknownTemplate {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// List all template names (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// List template names of one kind (sorted).
    pub fn by_kind(&self, kind: TemplateKind) -> Vec<&str> {
        let mut names: Vec<_> = self
            .templates
            .values()
            .filter(|t| t.kind() == kind)
            .map(|t| t.name())
            .collect();
        names.sort();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(name: &str, kind: TemplateKind) -> Template {
        Template::new(name, kind)
    }

    #[test]
    fn test_empty_store() {
        let store = TemplateStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_register_and_get() {
        let mut store = TemplateStore::new();
        store.register(make("remark", TemplateKind::Lint)).unwrap();

        assert!(store.contains("remark"));
        assert_eq!(store.get("remark").unwrap().kind(), TemplateKind::Lint);
        assert!(!store.contains("karma"));
    }

    #[test]
    fn test_register_duplicate_name() {
        let mut store = TemplateStore::new();
        store.register(make("remark", TemplateKind::Lint)).unwrap();

        let err = store
            .register(make("remark", TemplateKind::TestRunner))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateTemplateName { name } if name == "remark"));
        // The original registration is untouched
        assert_eq!(store.get("remark").unwrap().kind(), TemplateKind::Lint);
    }

    #[test]
    fn test_get_unknown() {
        let store = TemplateStore::new();
        assert!(matches!(
            store.get("nonexistent"),
            Err(Error::UnknownTemplate { name }) if name == "nonexistent"
        ));
    }

    #[test]
    fn test_list_and_by_kind() {
        let mut store = TemplateStore::new();
        store.register(make("zeta", TemplateKind::Lint)).unwrap();
        store.register(make("alpha", TemplateKind::Lint)).unwrap();
        store.register(make("karma", TemplateKind::TestRunner)).unwrap();

        assert_eq!(store.list(), vec!["alpha", "karma", "zeta"]);
        assert_eq!(store.by_kind(TemplateKind::Lint), vec!["alpha", "zeta"]);
        assert_eq!(store.by_kind(TemplateKind::TestRunner), vec!["karma"]);
        assert_eq!(store.iter().count(), 3);
    }

    #[test]
    fn test_with_builtins() {
        let store = TemplateStore::with_builtins();
        assert_eq!(store.len(), crate::builtins::BUILTIN_TEMPLATE_COUNT);
        assert!(store.contains("remark"));
        assert!(store.contains("karma-chromium-headless"));
    }
}
