//! Materialization and validation engine.
//!
//! Merges schema defaults, template values and caller overrides into a
//! concrete configuration, then checks it against the schema of its kind.
//!
//! # Example
//!
//! ```
//! use tmpl_core::{Catalog, Overrides};
//!
//! let catalog = Catalog::with_builtins();
//! let overrides = Overrides::from_assignments(["singleRun=false"]).unwrap();
//! let result = catalog.resolve("karma-chromium-headless", &overrides).unwrap();
//! assert!(result.is_valid());
//! ```

pub mod catalog;
pub mod drift;
pub mod error;
pub mod materializer;
pub mod merge;
pub mod overrides;
pub mod render;
pub mod resolver;
pub mod validator;

pub use catalog::Catalog;
pub use drift::{Drift, check_drift};
pub use error::{Error, Result};
pub use materializer::{MaterializedConfig, Materializer};
pub use merge::MergePolicy;
pub use overrides::Overrides;
pub use render::{OutputFormat, render};
pub use resolver::CatalogResolver;
pub use validator::{ValidationError, ValidationReason, ValidationResult, Validator};

pub use tmpl_meta::{TemplateKind, Values};
