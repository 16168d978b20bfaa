//! Configuration template manager CLI
//!
//! Materializes named configuration templates for external tools and
//! validates the result against the tool's schema.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::MaterializeArgs;
use context::CatalogOptions;
use error::{CliError, Result};

fn main() {
    match run() {
        Ok(()) => {}
        // Findings and diffs are already on the terminal
        Err(CliError::Invalid { .. } | CliError::Drift { .. }) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = CatalogOptions::from_cli(&cli);
    match cli.command {
        Some(cmd) => execute_command(cmd, &options),
        None => {
            println!("{} Configuration template manager", "tmpl".green().bold());
            println!();
            println!("Run {} for available commands.", "tmpl --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, options: &CatalogOptions) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Materialize {
            template,
            set,
            format,
            output,
            deep_merge,
            check,
        } => {
            let args = MaterializeArgs {
                template,
                set,
                format,
                output,
                deep_merge,
                check,
            };
            commands::run_materialize(&cwd, options, &args)
        }
        Commands::Validate { file, kind } => commands::run_validate(&cwd, options, &file, &kind),
        Commands::List { kind } => commands::run_list(&cwd, options, kind.as_deref()),
        Commands::Show { template } => commands::run_show(&cwd, options, &template),
        Commands::Schema { kind } => commands::run_schema(&cwd, options, &kind),
    }
}
