//! tally CLI
//!
//! Command-line interface for tally - local inventory tracking.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tally_core::{Config, CredentialGate, InventoryMirror, RecordStore};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "tally - local SQLite-backed inventory tracking")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage inventory items
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Register or authenticate users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// SMS notification settings
    Sms {
        #[command(subcommand)]
        command: Option<SmsCommands>,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ItemCommands {
    /// Add a new item
    Add {
        /// Item name
        name: String,
        /// Quantity on hand
        quantity: String,
    },
    /// List all items
    #[command(alias = "ls")]
    List,
    /// Edit the item at a list position
    Edit {
        /// 0-based list position
        position: usize,
        /// New item name
        name: String,
        /// New quantity
        quantity: String,
    },
    /// Remove the item at a list position
    #[command(alias = "rm")]
    Remove {
        /// 0-based list position
        position: usize,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new account
    Register {
        username: String,
        password: String,
    },
    /// Check credentials
    Login {
        username: String,
        password: String,
    },
}

#[derive(Subcommand, Clone)]
enum SmsCommands {
    /// Show notification and permission status
    Status,
    /// Turn SMS notifications on (requires permission)
    Enable,
    /// Turn SMS notifications off
    Disable,
    /// Grant SMS permission
    Grant,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, sms_enabled, sms_permission)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    let config =
        Config::load_from_path(&config_path).context("Failed to load configuration")?;
    debug!(path = %config_path.display(), "configuration loaded");

    match cli.command {
        Commands::Config { command } => {
            handle_config_command(command, config, &config_path, &output)
        }
        Commands::Sms { command } => handle_sms_command(command, config, &config_path, &output),
        Commands::Item { command } => {
            let store = RecordStore::open(&config).context("Failed to open record store")?;
            let mut mirror = InventoryMirror::new(store);
            mirror.load().context("Failed to load inventory")?;
            handle_item_command(command, &mut mirror, &output)
        }
        Commands::User { command } => {
            let store = RecordStore::open(&config).context("Failed to open record store")?;
            let gate = CredentialGate::new(store);
            handle_user_command(command, &gate, &output)
        }
    }
}

fn handle_item_command(
    command: ItemCommands,
    mirror: &mut InventoryMirror,
    output: &Output,
) -> Result<()> {
    match command {
        ItemCommands::Add { name, quantity } => {
            commands::item::add(mirror, &name, &quantity, output)
        }
        ItemCommands::List => commands::item::list(mirror, output),
        ItemCommands::Edit {
            position,
            name,
            quantity,
        } => commands::item::edit(mirror, position, &name, &quantity, output),
        ItemCommands::Remove { position } => commands::item::remove(mirror, position, output),
    }
}

fn handle_user_command(command: UserCommands, gate: &CredentialGate, output: &Output) -> Result<()> {
    match command {
        UserCommands::Register { username, password } => {
            commands::user::register(gate, &username, &password, output)
        }
        UserCommands::Login { username, password } => {
            commands::user::login(gate, &username, &password, output)
        }
    }
}

fn handle_sms_command(
    command: Option<SmsCommands>,
    config: Config,
    config_path: &PathBuf,
    output: &Output,
) -> Result<()> {
    match command {
        Some(SmsCommands::Status) | None => commands::sms::status(&config, output),
        Some(SmsCommands::Enable) => commands::sms::enable(config, config_path, output),
        Some(SmsCommands::Disable) => commands::sms::disable(config, config_path, output),
        Some(SmsCommands::Grant) => commands::sms::grant(config, config_path, output),
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config: Config,
    config_path: &PathBuf,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(&config, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(config, config_path, &key, &value, output)
        }
    }
}
