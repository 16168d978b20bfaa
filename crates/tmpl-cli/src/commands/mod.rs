//! Command implementations for tmpl-cli

pub mod list;
pub mod materialize;
pub mod validate;

pub use list::{run_list, run_schema, run_show};
pub use materialize::{MaterializeArgs, run_materialize};
pub use validate::run_validate;

use colored::Colorize;
use tmpl_core::ValidationResult;

use crate::error::{CliError, Result};

/// Print validation findings and turn an invalid result into an error.
///
/// Errors go to stderr one per line as `<key>: <reason> (<details>)`;
/// warnings of a valid result are prefixed with `warning: `.
pub(crate) fn report_findings(result: &ValidationResult) -> Result<()> {
    match result {
        ValidationResult::Valid { warnings, .. } => {
            for warning in warnings {
                eprintln!("{} {}", "warning:".yellow().bold(), warning);
            }
            Ok(())
        }
        ValidationResult::Invalid { errors } => {
            for error in errors {
                eprintln!("{}", error);
            }
            Err(CliError::Invalid {
                count: errors.iter().filter(|e| e.reason.is_fatal()).count(),
            })
        }
    }
}
