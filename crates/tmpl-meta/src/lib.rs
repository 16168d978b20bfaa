//! Schemas, templates and registries for the configuration template manager.
//!
//! This crate holds the read-mostly data of the system: the schema
//! registry (recognized options per tool kind), the template store
//! (named configuration bundles), the definition loader and the
//! built-in catalog.

pub mod builtins;
pub mod error;
pub mod kind;
pub mod loader;
pub mod registry;
pub mod schema;
pub mod store;
pub mod template;

pub use error::{Error, Result};
pub use kind::TemplateKind;
pub use loader::{Definitions, DefinitionLoader};
pub use registry::SchemaRegistry;
pub use schema::{OptionDescriptor, SchemaEntry, ValueType, value_shape};
pub use store::TemplateStore;
pub use template::{Template, TemplateMeta};

/// Ordered mapping from option key to an arbitrary (possibly nested) value.
pub type Values = std::collections::BTreeMap<String, serde_json::Value>;
