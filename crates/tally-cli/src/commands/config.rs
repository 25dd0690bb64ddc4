//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Result};

use tally_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(config: &Config, output: &Output) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "sms_enabled": config.sms_enabled,
                    "sms_permission": config.sms_permission
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir:        {}", config.data_dir.display());
            println!("  sms_enabled:     {}", config.sms_enabled);
            println!("  sms_permission:  {}", config.sms_permission);
            println!();
            println!("  database:        {}", config.db_path().display());
        }
    }
    Ok(())
}

/// Set a configuration value and persist it
pub fn set(mut config: Config, path: &PathBuf, key: &str, value: &str, output: &Output) -> Result<()> {
    match key {
        "data_dir" => config.data_dir = PathBuf::from(value),
        "sms_enabled" => config.sms_enabled = parse_bool(value)?,
        "sms_permission" => config.sms_permission = parse_bool(value)?,
        _ => bail!("Unknown configuration key: {key} (expected data_dir, sms_enabled, or sms_permission)"),
    }

    config.save_to_path(path)?;
    output.success(&format!("Set {}", key));
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => bail!("Expected a boolean value (true/false), got '{value}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet() -> Output {
        Output::new(OutputFormat::Quiet)
    }

    #[test]
    fn test_set_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        set(Config::default(), &path, "data_dir", "/tmp/tally", &quiet()).unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/tally"));
    }

    #[test]
    fn test_set_unknown_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let err = set(Config::default(), &path, "nope", "1", &quiet()).unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
    }

    #[test]
    fn test_set_rejects_bad_bool() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let err = set(Config::default(), &path, "sms_enabled", "maybe", &quiet()).unwrap_err();
        assert!(err.to_string().contains("boolean"));
    }
}
