//! Validate command implementation
//!
//! Checks an existing configuration file against the schema of a kind.

use std::path::Path;

use colored::Colorize;
use tmpl_core::{TemplateKind, Validator, Values};
use tmpl_fs::ConfigStore;

use super::report_findings;
use crate::context::CatalogOptions;
use crate::error::Result;

/// Run the validate command
pub fn run_validate(root: &Path, options: &CatalogOptions, file: &Path, kind: &str) -> Result<()> {
    let kind: TemplateKind = kind.parse()?;
    let catalog = options.load(root)?;

    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    };
    let values: Values = ConfigStore::new().load(&path)?;

    let result = Validator::new(catalog.schemas()).validate_values(kind, values)?;
    report_findings(&result)?;

    println!(
        "{} {} is a valid {} configuration",
        "OK".green().bold(),
        file.display(),
        kind.to_string().cyan()
    );
    Ok(())
}
