/// Application configuration
///
/// Read once at startup from `config.json` in the user's config directory:
/// - Linux: ~/.config/book-catalog/config.json
/// - macOS: ~/Library/Application Support/book-catalog/config.json
/// - Windows: %APPDATA%\book-catalog\config.json
///
/// Every field is optional. `BOOK_CATALOG_DATA` overrides `data_path`.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the catalog data path
pub const DATA_PATH_ENV: &str = "BOOK_CATALOG_DATA";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// JSON file holding the book list
    pub data_path: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("app.json"),
            log_filter: "info".to_string(),
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Apply `BOOK_CATALOG_DATA` if it is set
    pub fn with_env_overrides(self) -> Self {
        self.with_data_override(std::env::var_os(DATA_PATH_ENV).map(PathBuf::from))
    }

    fn with_data_override(mut self, data_path: Option<PathBuf>) -> Self {
        if let Some(data_path) = data_path {
            self.data_path = data_path;
        }
        self
    }

    /// Get the path where the config file is expected
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("book-catalog");
        path.push("config.json");
        Some(path)
    }

    /// Read a config file, falling back to defaults when it does not exist
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"data_path": "/srv/books/app.json"}"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.data_path, PathBuf::from("/srv/books/app.json"));
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.window_width, 1280.0);
    }

    #[test]
    fn test_data_override() {
        let config =
            AppConfig::default().with_data_override(Some(PathBuf::from("/data/books.json")));
        assert_eq!(config.data_path, PathBuf::from("/data/books.json"));

        let config = AppConfig::default().with_data_override(None);
        assert_eq!(config.data_path, PathBuf::from("app.json"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"data_file": "app.json"}"#).unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
