//! Rendering materialized configurations into file contents

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tmpl_fs::ConfigFormat;
use tmpl_meta::TemplateKind;

use crate::{Error, MaterializedConfig, Result};

/// Output formats for a materialized configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
    Yaml,
    /// JavaScript module in the consuming tool's native shape
    Module,
}

impl OutputFormat {
    /// Pick a format from an output file's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if matches!(ext.to_lowercase().as_str(), "js" | "cjs") => Ok(Self::Module),
            _ => Ok(ConfigFormat::from_path(path)?.into()),
        }
    }
}

impl From<ConfigFormat> for OutputFormat {
    fn from(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Toml => OutputFormat::Toml,
            ConfigFormat::Json => OutputFormat::Json,
            ConfigFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "module" | "js" => Ok(OutputFormat::Module),
            _ => Err(Error::InvalidFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Toml => write!(f, "toml"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Module => write!(f, "module"),
        }
    }
}

/// Render the values of a configuration as file contents.
///
/// Only the option values are rendered; kind and template name are
/// metadata of the request, not part of the tool's configuration.
pub fn render(config: &MaterializedConfig, format: OutputFormat) -> Result<String> {
    let label = Path::new("<output>");
    let rendered = match format {
        OutputFormat::Json => ConfigFormat::Json.serialize(&config.values, label)?,
        OutputFormat::Toml => ConfigFormat::Toml.serialize(&config.values, label)?,
        OutputFormat::Yaml => ConfigFormat::Yaml.serialize(&config.values, label)?,
        OutputFormat::Module => {
            let body = serde_json::to_string_pretty(&config.values)?;
            match config.kind {
                TemplateKind::Lint => format!("module.exports = {}\n", body),
                TemplateKind::TestRunner => {
                    format!("module.exports = config => config.set({})\n", body)
                }
            }
        }
    };
    Ok(rendered)
}
