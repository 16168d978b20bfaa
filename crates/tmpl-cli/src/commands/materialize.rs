//! Materialize command implementation

use std::path::{Path, PathBuf};

use colored::Colorize;
use tmpl_core::{Drift, MergePolicy, OutputFormat, Overrides, check_drift, render};

use super::report_findings;
use crate::context::CatalogOptions;
use crate::error::{CliError, Result};

/// Arguments of the materialize command
#[derive(Debug, Clone, Default)]
pub struct MaterializeArgs {
    pub template: String,
    pub set: Vec<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub deep_merge: bool,
    pub check: bool,
}

/// Run the materialize command
pub fn run_materialize(root: &Path, options: &CatalogOptions, args: &MaterializeArgs) -> Result<()> {
    let catalog = options.load(root)?;
    let overrides = Overrides::from_assignments(&args.set)?;
    let policy = if args.deep_merge {
        MergePolicy::Deep
    } else {
        MergePolicy::Replace
    };

    let result = catalog.resolve_with(&args.template, &overrides, policy)?;
    report_findings(&result)?;
    let Some(config) = result.config() else {
        return Err(CliError::user("validation produced no configuration"));
    };

    let format = match (&args.format, &args.output) {
        (Some(format), _) => format.parse::<OutputFormat>()?,
        (None, Some(path)) => OutputFormat::from_path(path)?,
        (None, None) => OutputFormat::Json,
    };
    let rendered = render(config, format)?;

    let Some(output) = &args.output else {
        print!("{}", rendered);
        return Ok(());
    };
    let output = resolve_output(root, output);

    if args.check {
        return check_output(&output, &rendered);
    }

    tmpl_fs::io::write_text(&output, &rendered)?;
    println!(
        "{} Wrote {} ({}, {})",
        "OK".green().bold(),
        output.display(),
        args.template.cyan(),
        format
    );
    Ok(())
}

fn resolve_output(root: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        root.join(output)
    }
}

fn check_output(output: &Path, rendered: &str) -> Result<()> {
    match check_drift(output, rendered)? {
        Drift::UpToDate => {
            println!("{} {} is up to date", "OK".green().bold(), output.display());
            Ok(())
        }
        Drift::Missing => {
            eprintln!("{} {} does not exist", "missing:".red().bold(), output.display());
            Err(CliError::Drift {
                path: output.display().to_string(),
            })
        }
        Drift::Changed { diff } => {
            print!("{}", diff);
            Err(CliError::Drift {
                path: output.display().to_string(),
            })
        }
    }
}
