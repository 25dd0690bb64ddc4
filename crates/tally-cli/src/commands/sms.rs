//! SMS notification settings handlers
//!
//! The settings surface consumes a boolean permission query and a
//! grant action, plus the enable/disable toggle. It never touches the
//! record store or the inventory mirror; everything lives in the
//! config file.

use std::path::PathBuf;

use anyhow::{bail, Result};

use tally_core::Config;

use crate::output::{Output, OutputFormat};

/// Show notification and permission status
pub fn status(config: &Config, output: &Output) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "permission": config.sms_permission,
                    "enabled": config.sms_enabled
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", if config.sms_enabled { "on" } else { "off" });
        }
        OutputFormat::Human => {
            println!(
                "SMS permission:    {}",
                if config.sms_permission {
                    "granted"
                } else {
                    "not granted"
                }
            );
            println!(
                "SMS notifications: {}",
                if config.sms_enabled { "enabled" } else { "disabled" }
            );
        }
    }
    Ok(())
}

/// Turn SMS notifications on
///
/// The toggle stays off until permission has been granted.
pub fn enable(mut config: Config, path: &PathBuf, output: &Output) -> Result<()> {
    if !config.sms_permission {
        bail!("SMS permission required; run 'tally sms grant' first");
    }

    config.sms_enabled = true;
    config.save_to_path(path)?;
    output.success("SMS notifications enabled");
    Ok(())
}

/// Turn SMS notifications off
pub fn disable(mut config: Config, path: &PathBuf, output: &Output) -> Result<()> {
    config.sms_enabled = false;
    config.save_to_path(path)?;
    output.success("SMS notifications disabled");
    Ok(())
}

/// Grant SMS permission
pub fn grant(mut config: Config, path: &PathBuf, output: &Output) -> Result<()> {
    if config.sms_permission {
        output.message("SMS permission already granted");
        return Ok(());
    }

    config.sms_permission = true;
    config.save_to_path(path)?;
    output.success("SMS permission granted");
    Ok(())
}
