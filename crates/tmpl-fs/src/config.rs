//! Format-agnostic configuration loading and saving

use crate::{Error, Result, io};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use std::path::Path;

/// Structured file formats understood by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension (case-insensitive).
    ///
    /// - `toml` -> TOML
    /// - `json` -> JSON
    /// - `yaml`, `yml` -> YAML
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::from_extension(extension)
    }

    /// Parse text in this format.
    ///
    /// `path` is only used for error reporting.
    pub fn parse<T: DeserializeOwned>(self, content: &str, path: &Path) -> Result<T> {
        let parsed = match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            format: self.to_string(),
            message,
        })
    }

    /// Serialize a value to text in this format.
    ///
    /// JSON output is pretty-printed and newline-terminated.
    pub fn serialize<T: Serialize>(self, value: &T, path: &Path) -> Result<String> {
        let rendered = match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(value)
                .map(|s| s + "\n")
                .map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: self.to_string(),
            message,
        })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Toml => write!(f, "TOML"),
            ConfigFormat::Json => write!(f, "JSON"),
            ConfigFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// Format-agnostic configuration store.
///
/// Automatically detects format from file extension and handles
/// serialization/deserialization transparently.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load a structured file, detecting the format from its extension.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let format = ConfigFormat::from_path(path)?;
        let content = io::read_text(path)?;
        format.parse(&content, path)
    }

    /// Save a value to a file.
    ///
    /// Format is determined from file extension.
    /// Uses atomic write to prevent corruption.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let format = ConfigFormat::from_path(path)?;
        let content = format.serialize(value, path)?;
        io::write_text(path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("toml").unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_extension("JSON").unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_extension("yml").unwrap(), ConfigFormat::Yaml);
        assert!(matches!(
            ConfigFormat::from_extension("js"),
            Err(Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_format_from_path_without_extension() {
        let err = ConfigFormat::from_path(Path::new(".remarkrc")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { extension } if extension.is_empty()));
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = ConfigFormat::Json
            .parse::<serde_json::Value>("{ not json", Path::new("bad.json"))
            .unwrap_err();
        assert!(err.to_string().contains("JSON"));
        assert!(err.to_string().contains("bad.json"));
    }
}
