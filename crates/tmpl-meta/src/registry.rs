//! Schema registry - one schema entry per template kind

use std::collections::HashMap;

use crate::{Error, Result, SchemaEntry, TemplateKind};

/// Registry mapping template kinds to their schema.
///
/// Entries are read-only once registered; a kind can only be registered
/// once.
///
/// # Example
///
/// ```
/// use tmpl_meta::{OptionDescriptor, SchemaEntry, SchemaRegistry, TemplateKind, ValueType};
///
/// let mut registry = SchemaRegistry::new();
/// let entry = SchemaEntry::new(TemplateKind::Lint)
///     .with_option("bullet", OptionDescriptor::required(ValueType::String));
/// registry.register(entry.clone()).unwrap();
/// assert_eq!(registry.lookup(TemplateKind::Lint).unwrap(), &entry);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: HashMap<TemplateKind, SchemaEntry>,
}

impl SchemaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry with the built-in schemas registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for entry in crate::builtins::builtin_schemas() {
            registry.entries.insert(entry.kind, entry);
        }
        registry
    }

    /// Register the schema for a kind.
    ///
    /// Fails with [`Error::DuplicateKind`] if the kind already has a schema,
    /// or [`Error::InvalidDefault`] if a default does not fit its type.
    pub fn register(&mut self, entry: SchemaEntry) -> Result<()> {
        if self.entries.contains_key(&entry.kind) {
            return Err(Error::DuplicateKind { kind: entry.kind });
        }
        entry.check()?;
        tracing::debug!(kind = %entry.kind, options = entry.options.len(), "Registered schema");
        self.entries.insert(entry.kind, entry);
        Ok(())
    }

    /// Look up the schema for a kind.
    pub fn lookup(&self, kind: TemplateKind) -> Result<&SchemaEntry> {
        self.entries.get(&kind).ok_or(Error::UnknownKind { kind })
    }

    /// Check if a schema is registered for a kind.
    pub fn contains(&self, kind: TemplateKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// List registered kinds (sorted).
    pub fn kinds(&self) -> Vec<TemplateKind> {
        let mut kinds: Vec<_> = self.entries.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
