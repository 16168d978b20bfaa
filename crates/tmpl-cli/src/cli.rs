//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Configuration template manager - materialize and validate tool configs
#[derive(Parser, Debug)]
#[command(name = "tmpl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra catalog directory (repeatable, loaded after the project catalog)
    #[arg(long = "catalog", global = true, env = "TMPL_CATALOG", value_delimiter = ',')]
    pub catalogs: Vec<PathBuf>,

    /// Do not load the built-in schemas and templates
    #[arg(long, global = true)]
    pub no_builtins: bool,

    /// Override the global catalog directory
    #[arg(long, global = true, env = "TMPL_CONFIG_DIR", hide = true)]
    pub config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Materialize a template into a concrete configuration
    ///
    /// Merges schema defaults, template values and --set overrides (highest
    /// precedence), validates the result and prints it.
    ///
    /// Examples:
    ///   tmpl materialize remark
    ///   tmpl materialize remark --set frail=false --format yaml
    ///   tmpl materialize karma-chromium-headless -o karma.conf.js
    ///   tmpl materialize remark -o .remarkrc.json --check
    Materialize {
        /// Name of the template (use 'tmpl list' to see options)
        template: String,

        /// Override an option, as key=value (value parsed as JSON when possible)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Output format: json, toml, yaml or module (default: from --output, else json)
        #[arg(short, long)]
        format: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Merge nested objects instead of replacing them
        #[arg(long)]
        deep_merge: bool,

        /// Only report whether --output is up to date
        #[arg(long, requires = "output")]
        check: bool,
    },

    /// Validate an existing configuration file against a schema
    Validate {
        /// Configuration file (.json, .toml, .yaml)
        file: PathBuf,

        /// Template kind the file configures (lint, test-runner)
        #[arg(short, long)]
        kind: String,
    },

    /// List available templates
    List {
        /// Filter by kind (lint, test-runner)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Show a template's metadata and values
    Show {
        /// Name of the template
        template: String,
    },

    /// Show the schema registered for a kind
    Schema {
        /// Template kind (lint, test-runner)
        kind: String,
    },
}
