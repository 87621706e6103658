//! Store configuration.
//!
//! Parses `nook.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every field is
//! defaulted, so a missing file yields a usable configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "nook.toml";

/// Store configuration (the `[store]` section of `nook.toml`).
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding entity records.
    pub root: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("books"),
        }
    }
}

/// Top-level config file shape.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    store: StoreConfig,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be parsed as TOML.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl StoreConfig {
    /// Load configuration, discovering `nook.toml` in `start_dir` or any of
    /// its parent directories. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a discovered file cannot be read or
    /// parsed.
    pub fn load(start_dir: &Path) -> Result<Self, ConfigError> {
        match discover(start_dir) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a specific config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(file.store)
    }
}

/// Search `start_dir` and its ancestors for the config file.
fn discover(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root() {
        assert_eq!(StoreConfig::default().root, PathBuf::from("books"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::load(dir.path()).unwrap();

        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_parse_store_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[store]\nroot = \"data/books\"\n").unwrap();

        let config = StoreConfig::from_file(&path).unwrap();
        assert_eq!(config.root, PathBuf::from("data/books"));
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        let config = StoreConfig::from_file(&path).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_discovery_walks_parents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[store]\nroot = \"b\"\n").unwrap();
        let nested = dir.path().join("a/deep/subdir");
        std::fs::create_dir_all(&nested).unwrap();

        let config = StoreConfig::load(&nested).unwrap();
        assert_eq!(config.root, PathBuf::from("b"));
    }

    #[test]
    fn test_invalid_toml_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[store\nroot = ").unwrap();

        let err = StoreConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
