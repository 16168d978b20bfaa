//! Loader for schema and template definitions from a catalog directory
//!
//! A catalog directory has the following structure:
//!
//! ```text
//! <catalog>/
//!   schemas/
//!     lint.toml
//!   templates/
//!     remark.toml
//!     karma-firefox.yaml
//! ```
//!
//! Each file holds one definition; TOML, JSON and YAML are accepted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tmpl_fs::{ConfigFormat, ConfigStore};

use crate::{Error, Result, SchemaEntry, Template};

/// Everything found in one catalog directory.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    pub schemas: Vec<SchemaEntry>,
    pub templates: Vec<Template>,
}

impl Definitions {
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty() && self.templates.is_empty()
    }
}

/// Loads schema and template definitions from catalog directories
pub struct DefinitionLoader {
    store: ConfigStore,
}

impl DefinitionLoader {
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
        }
    }

    /// Load all definitions under a catalog directory.
    ///
    /// A missing catalog yields empty definitions.
    pub fn load(&self, catalog: &Path) -> Result<Definitions> {
        Ok(Definitions {
            schemas: self.load_schemas(catalog)?,
            templates: self.load_templates(catalog)?,
        })
    }

    /// Load all schema definitions from `<catalog>/schemas/`
    pub fn load_schemas(&self, catalog: &Path) -> Result<Vec<SchemaEntry>> {
        self.load_definitions(&catalog.join("schemas"))
    }

    /// Load all template definitions from `<catalog>/templates/`
    pub fn load_templates(&self, catalog: &Path) -> Result<Vec<Template>> {
        self.load_definitions(&catalog.join("templates"))
    }

    /// Generic loader for definitions from a directory, in file name order
    fn load_definitions<T: DeserializeOwned>(&self, dir: &Path) -> Result<Vec<T>> {
        let mut definitions = Vec::new();

        if !dir.is_dir() {
            return Ok(definitions);
        }

        let entries =
            fs::read_dir(dir).map_err(|e| Error::Fs(tmpl_fs::Error::io(dir, e)))?;

        let mut paths: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && ConfigFormat::from_path(path).is_ok())
            .collect();
        paths.sort();

        for path in paths {
            match self.store.load::<T>(&path) {
                Ok(def) => definitions.push(def),
                Err(e) => {
                    // Keep loading the remaining files
                    tracing::warn!("Failed to load {}: {}", path.display(), e);
                }
            }
        }

        Ok(definitions)
    }
}

impl Default for DefinitionLoader {
    fn default() -> Self {
        Self::new()
    }
}
