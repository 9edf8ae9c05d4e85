//! Degrees CLI - Degrees of separation between film actors

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod prompt;

use commands::{completions, info, interactive, neighbors, path};
use config::Config;
use degrees_core::{Dataset, LoadSummary};
use degrees_storage::{CsvDirectory, DatasetSource};
use output::OutputFormat;

/// Dataset directory used when neither the flag nor the config names one
pub const DEFAULT_DATA_DIR: &str = "large";

#[derive(Parser)]
#[command(name = "degrees")]
#[command(author, version, about = "Degrees of separation between film actors")]
pub struct Cli {
    /// Dataset directory containing people.csv, movies.csv and stars.csv
    #[arg(short, long, global = true, env = "DEGREES_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format: table, json, csv
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Defaults to the interactive prompt
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Dataset directory: flag, then config file, then the built-in default
    pub fn data_dir(&self, config: &Config) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| config.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Output format: flag, then config file
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format
            .as_deref()
            .unwrap_or(config.format.as_str())
            .into()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prompt for two names and print how they are connected
    Interactive,
    /// Find the shortest connection between two people
    Path(path::PathArgs),
    /// List everyone who starred with a person
    Neighbors(neighbors::NeighborsArgs),
    /// Show dataset statistics
    Info,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

/// Application context with the loaded dataset
pub struct AppContext {
    pub config: Config,
    pub data_dir: PathBuf,
    pub dataset: Dataset,
    pub summary: LoadSummary,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn load(cli: &Cli, config: Config) -> anyhow::Result<Self> {
        let source = CsvDirectory::open(cli.data_dir(&config))?;
        tracing::debug!("Using dataset at: {:?}", source.root());

        let loaded = source
            .load()
            .with_context(|| format!("Failed to load dataset from {}", source.describe()))?;

        Ok(Self {
            format: cli.output_format(&config),
            config,
            data_dir: source.root().to_path_buf(),
            dataset: loaded.dataset,
            summary: loaded.summary,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting degrees CLI");

    let config = Config::load();

    match &cli.command {
        Some(Commands::Completions(args)) => completions::run(args)?,
        Some(Commands::Config(args)) => commands::config::run(args)?,
        None | Some(Commands::Interactive) => interactive::run(&cli, config)?,
        Some(Commands::Path(args)) => path::run(args, &AppContext::load(&cli, config)?)?,
        Some(Commands::Neighbors(args)) => {
            neighbors::run(args, &AppContext::load(&cli, config)?)?
        }
        Some(Commands::Info) => info::run(&AppContext::load(&cli, config)?)?,
    }

    Ok(())
}
