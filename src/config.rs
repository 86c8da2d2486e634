//! Explorer configuration, read from YAML

use crate::graph::GraphStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Explorer configuration
///
/// Every field is optional in the file:
///
/// ```yaml
/// style:
///   label_max_chars: 24
///   ellipsis: "..."
/// export_dir: /tmp/exports
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Labels, colors and sizes
    pub style: GraphStyle,
    /// Where exports are written; the current directory when unset
    pub export_dir: Option<PathBuf>,
}

impl ExplorerConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit path, else from the default location if it
    /// exists, else defaults
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "using default config file");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Export directory, falling back to the current directory
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Default config location (`~/.config/contact-graph/config.yaml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("contact-graph").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = ExplorerConfig::from_yaml("").unwrap();
        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(config.style.label_max_chars, 20);
        assert_eq!(config.style.ellipsis, "…");
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn partial_style_keeps_other_defaults() {
        let config = ExplorerConfig::from_yaml("style:\n  label_max_chars: 8\n").unwrap();
        assert_eq!(config.style.label_max_chars, 8);
        assert_eq!(config.style.central_fill, "#0077b5");
        assert_eq!(config.style.contact_size, 20);
    }

    #[test]
    fn export_dir_is_read() {
        let config = ExplorerConfig::from_yaml("export_dir: /tmp/out\n").unwrap();
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn from_file_reports_bad_yaml_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "style: [not, a, map]\n").unwrap();

        let err = ExplorerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        let result = ExplorerConfig::load(Some(missing.as_path()));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
