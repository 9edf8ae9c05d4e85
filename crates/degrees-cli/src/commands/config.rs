//! Config command: read and edit ~/.degrees/config.toml

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Subcommand};

use degrees_storage::{CsvDirectory, DatasetSource};

use crate::config::{config_file_path, Config};
use crate::DEFAULT_DATA_DIR;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print one value
    Get {
        /// data_dir, format or max_expansions
        key: String,
    },
    /// Store a value; data_dir must name a dataset directory
    Set { key: String, value: String },
    /// Clear an optional value so the built-in default applies
    Unset { key: String },
    /// Print every key with the value in effect
    List,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs) -> anyhow::Result<()> {
    let path = config_file_path();

    match &args.command {
        ConfigCommands::Get { key } => {
            let value = Config::load().get(key).ok_or_else(|| unknown_key(key))?;
            println!("{}", value);
        }
        ConfigCommands::Set { key, value } => {
            let value = match key.as_str() {
                "data_dir" => dataset_dir(value)?.display().to_string(),
                _ => value.clone(),
            };
            let mut config = Config::load();
            config.set(key, &value)?;
            config.save()?;
            tracing::info!("Updated {} in {}", key, path.display());
            println!("{} = {}", key, value);
        }
        ConfigCommands::Unset { key } => {
            if key == "format" {
                anyhow::bail!("format cannot be unset; set it to table, json or csv");
            }
            let mut config = Config::load();
            config.set(key, "")?;
            config.save()?;
            println!("{} cleared", key);
        }
        ConfigCommands::List => {
            let config = Config::load();
            println!("# {}", path.display());
            for key in Config::keys() {
                println!("{} = {}", key, effective_value(&config, key));
            }
        }
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists; pass --force to replace it",
                    path.display()
                );
            }
            Config::default().save()?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Unknown config key: {} (available: {})",
        key,
        Config::keys().join(", ")
    )
}

/// Check that `value` is a dataset directory and make it absolute
fn dataset_dir(value: &str) -> anyhow::Result<PathBuf> {
    let dir = CsvDirectory::open(value)?;
    tracing::debug!("Checked dataset directory {}", dir.describe());
    std::fs::canonicalize(dir.root())
        .with_context(|| format!("Failed to resolve {}", dir.root().display()))
}

fn effective_value(config: &Config, key: &str) -> String {
    match (key, config.get(key).filter(|value| !value.is_empty())) {
        (_, Some(value)) => value,
        ("data_dir", None) => format!("{} (default)", Path::new(DEFAULT_DATA_DIR).display()),
        (_, None) => "(not set)".to_string(),
    }
}
