//! Catalog assembly for a CLI invocation

use std::path::{Path, PathBuf};

use tmpl_core::{Catalog, CatalogResolver};

use crate::cli::Cli;
use crate::error::Result;

/// Where the catalog for this invocation comes from.
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    pub catalogs: Vec<PathBuf>,
    pub no_builtins: bool,
    pub config_dir: Option<PathBuf>,
}

impl CatalogOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            catalogs: cli.catalogs.clone(),
            no_builtins: cli.no_builtins,
            config_dir: cli.config_dir.clone(),
        }
    }

    /// Resolve the catalog relative to a project directory.
    pub fn load(&self, project_root: &Path) -> Result<Catalog> {
        let mut resolver = CatalogResolver::new(project_root);
        if self.no_builtins {
            resolver = resolver.without_builtins();
        }
        if let Some(dir) = &self.config_dir {
            resolver = resolver.with_global_dir(dir);
        }
        for dir in &self.catalogs {
            // Absolute paths replace the root when joined
            resolver = resolver.with_catalog(project_root.join(dir));
        }

        let catalog = resolver.resolve()?;
        tracing::debug!(
            templates = catalog.templates().len(),
            kinds = catalog.schemas().len(),
            "Catalog ready"
        );
        Ok(catalog)
    }
}
