//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use shelf_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "library_file": config.library_file,
                    "log_file": config.log_file,
                    "library_path": config.library_path()
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.library_path().display());
        }
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  data_dir:     {}", config.data_dir.display());
            println!("  library_file: {}", display_optional(config.library_file.as_ref()));
            println!("  log_file:     {}", display_optional(config.log_file.as_ref()));
            println!();
            println!("Library file: {}", config.library_path().display());
            println!("Config file:  {}", effective_path.display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let mut config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    apply(&mut config, &key, &value)?;

    // Save to the CLI-specified path or default
    let save_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    config
        .save_to_path(&save_path)
        .context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "data_dir" => {
            if value.is_empty() {
                bail!("data_dir cannot be empty");
            }
            config.data_dir = value.into();
        }
        "library_file" => config.library_file = optional_path(value),
        "log_file" => config.log_file = optional_path(value),
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, library_file, log_file",
                key
            );
        }
    }
    Ok(())
}

/// Empty or "none" clears an optional path
fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() || value == "none" {
        None
    } else {
        Some(value.into())
    }
}

fn display_optional(path: Option<&PathBuf>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            data_dir: PathBuf::from("/data/shelf"),
            library_file: Some(PathBuf::from("/books.txt")),
            log_file: None,
        }
    }

    #[test]
    fn test_apply_known_keys() {
        let mut config = config();

        apply(&mut config, "data_dir", "/elsewhere").unwrap();
        apply(&mut config, "log_file", "/tmp/shelf.log").unwrap();
        apply(&mut config, "library_file", "none").unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/elsewhere"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/shelf.log")));
        assert!(config.library_file.is_none());
    }

    #[test]
    fn test_apply_rejects_unknown_key() {
        let mut config = config();
        let err = apply(&mut config, "sync_url", "ws://x").unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
    }

    #[test]
    fn test_apply_rejects_empty_data_dir() {
        let mut config = config();
        assert!(apply(&mut config, "data_dir", "").is_err());
        assert_eq!(config.data_dir, PathBuf::from("/data/shelf"));
    }
}
