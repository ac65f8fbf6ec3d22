//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/shelf/config.toml)
//! 3. Environment variables (SHELF_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
const ENV_PREFIX: &str = "SHELF";

/// File name of the library inside the data directory
const LIBRARY_FILE_NAME: &str = "library.txt";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory for data storage (library file, logs)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Explicit location of the library file (overrides data_dir/library.txt)
    #[serde(default)]
    pub library_file: Option<PathBuf>,

    /// Log file path (default: {data_dir}/shelf.log when SHELF_LOG is set)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            library_file: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (SHELF_DATA_DIR, SHELF_LIBRARY_FILE, SHELF_LOG_FILE)
    /// 2. Config file (~/.config/shelf/config.toml or SHELF_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration, preferring a path given on the command line
    pub fn load_with_cli_override(config_path: Option<&PathBuf>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.ensure_data_dir()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // Empty string clears the override
        if let Ok(val) = std::env::var(format!("{}_LIBRARY_FILE", ENV_PREFIX)) {
            self.library_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }

        if let Ok(val) = std::env::var(format!("{}_LOG_FILE", ENV_PREFIX)) {
            self.log_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
    }

    /// Ensure data directory exists
    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Save configuration to the default config file
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_file_path())
    }

    /// Save configuration to a specific file
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with SHELF_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shelf")
            .join("config.toml")
    }

    /// Get the path to the library file
    pub fn library_path(&self) -> PathBuf {
        self.library_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(LIBRARY_FILE_NAME))
    }

    /// Get the path logs are written to
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("shelf.log"))
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Mutex to serialize tests that touch environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Guard that locks env access and saves/restores env vars
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
        saved: Vec<(String, Option<String>)>,
    }

    impl<'a> EnvGuard<'a> {
        fn new(vars: &[&str]) -> Self {
            let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
            let saved = vars
                .iter()
                .map(|&name| (name.to_string(), env::var(name).ok()))
                .collect();
            for name in vars {
                env::remove_var(name);
            }
            Self { _lock: lock, saved }
        }
    }

    impl Drop for EnvGuard<'_> {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    const ENV_VARS: &[&str] = &["SHELF_DATA_DIR", "SHELF_LIBRARY_FILE", "SHELF_LOG_FILE"];

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.library_file.is_none());
        assert!(config.log_file.is_none());
        assert!(config.data_dir.ends_with("shelf"));
    }

    #[test]
    fn test_file_paths() {
        let config = Config {
            data_dir: PathBuf::from("/data/shelf"),
            library_file: None,
            log_file: None,
        };

        assert_eq!(config.library_path(), PathBuf::from("/data/shelf/library.txt"));
        assert_eq!(config.log_path(), PathBuf::from("/data/shelf/shelf.log"));
    }

    #[test]
    fn test_explicit_library_file_wins() {
        let config = Config {
            data_dir: PathBuf::from("/data/shelf"),
            library_file: Some(PathBuf::from("/books/mine.csv")),
            log_file: None,
        };

        assert_eq!(config.library_path(), PathBuf::from("/books/mine.csv"));
    }

    #[test]
    fn test_env_override_data_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("SHELF_DATA_DIR", "/tmp/shelf-test");
        config.apply_env_overrides();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/shelf-test"));
    }

    #[test]
    fn test_env_override_library_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("SHELF_LIBRARY_FILE", "/tmp/books.txt");
        config.apply_env_overrides();
        assert_eq!(config.library_file, Some(PathBuf::from("/tmp/books.txt")));

        // Empty string clears it
        env::set_var("SHELF_LIBRARY_FILE", "");
        config.apply_env_overrides();
        assert!(config.library_file.is_none());
    }

    #[test]
    fn test_serialization() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config {
            data_dir: PathBuf::from("/data/shelf"),
            library_file: Some(PathBuf::from("/data/books.txt")),
            log_file: None,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("data_dir"));
        assert!(toml_str.contains("library_file"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.data_dir, config.data_dir);
        assert_eq!(parsed.library_file, config.library_file);
        assert_eq!(parsed.log_file, config.log_file);
    }

    #[test]
    fn test_load_from_str() {
        let _guard = EnvGuard::new(ENV_VARS);

        let toml = r#"
            data_dir = "/custom/data"
            log_file = "/custom/shelf.log"
        "#;

        let config = Config::load_from_str(toml).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/custom/data"));
        assert_eq!(config.log_file, Some(PathBuf::from("/custom/shelf.log")));
        assert_eq!(config.library_path(), PathBuf::from("/custom/data/library.txt"));
    }

    #[test]
    fn test_load_from_path_missing_file_uses_defaults() {
        let _guard = EnvGuard::new(ENV_VARS);
        let temp_dir = TempDir::new().unwrap();
        env::set_var("SHELF_DATA_DIR", temp_dir.path().join("data"));

        let path = temp_dir.path().join("missing.toml");
        let config = Config::load_from_path(&path).unwrap();

        assert!(config.library_file.is_none());
        // Data directory is created on load
        assert!(temp_dir.path().join("data").is_dir());
    }

    #[test]
    fn test_save_and_reload() {
        let _guard = EnvGuard::new(ENV_VARS);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            data_dir: temp_dir.path().join("data"),
            library_file: None,
            log_file: Some(temp_dir.path().join("debug.log")),
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.data_dir, config.data_dir);
        assert_eq!(loaded.log_file, config.log_file);
    }
}
