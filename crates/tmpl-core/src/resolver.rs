//! Catalog resolution from layered sources
//!
//! Definitions are gathered from, in order:
//! 1. Built-in schemas and templates
//! 2. Global catalog (`<config_dir>/tmpl/`)
//! 3. Project catalog (`<project>/.templates/`)
//! 4. Extra catalog directories given by the caller
//!
//! Later layers add definitions; redefining a kind or template name is an
//! error rather than a silent override.

use std::path::{Path, PathBuf};

use crate::{Catalog, Result};

/// Directory name of the project-level catalog.
pub const PROJECT_CATALOG_DIR: &str = ".templates";

/// Subdirectory of the user config directory holding the global catalog.
pub const GLOBAL_CATALOG_DIR: &str = "tmpl";

/// Assembles a [`Catalog`] from all configured sources.
pub struct CatalogResolver {
    project_root: PathBuf,
    include_builtins: bool,
    /// Override for the global catalog directory (used for testing).
    global_dir_override: Option<PathBuf>,
    extra_dirs: Vec<PathBuf>,
}

impl CatalogResolver {
    /// Create a resolver for the given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            include_builtins: true,
            global_dir_override: None,
            extra_dirs: Vec::new(),
        }
    }

    /// Use a custom global catalog directory.
    pub fn with_global_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_dir_override = Some(dir.into());
        self
    }

    /// Skip the built-in definitions.
    pub fn without_builtins(mut self) -> Self {
        self.include_builtins = false;
        self
    }

    /// Add an extra catalog directory, loaded after the project catalog.
    pub fn with_catalog(mut self, dir: impl Into<PathBuf>) -> Self {
        self.extra_dirs.push(dir.into());
        self
    }

    /// Global catalog directory: the override if set, otherwise the
    /// platform config directory via `dirs::config_dir()`.
    pub fn global_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.global_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join(GLOBAL_CATALOG_DIR))
    }

    pub fn project_dir(&self) -> PathBuf {
        self.project_root.join(PROJECT_CATALOG_DIR)
    }

    /// Load every layer into a fresh catalog.
    pub fn resolve(&self) -> Result<Catalog> {
        let mut catalog = if self.include_builtins {
            Catalog::with_builtins()
        } else {
            Catalog::new()
        };

        if let Some(global_dir) = self.global_dir() {
            load_layer(&mut catalog, &global_dir, "global")?;
        }

        load_layer(&mut catalog, &self.project_dir(), "project")?;

        for dir in &self.extra_dirs {
            load_layer(&mut catalog, dir, "extra")?;
        }

        Ok(catalog)
    }
}

fn load_layer(catalog: &mut Catalog, dir: &Path, layer: &str) -> Result<()> {
    if dir.is_dir() {
        tracing::debug!(dir = %dir.display(), layer, "Loading catalog layer");
        catalog.load_dir(dir)
    } else {
        tracing::debug!(dir = %dir.display(), layer, "No catalog found, skipping");
        Ok(())
    }
}
