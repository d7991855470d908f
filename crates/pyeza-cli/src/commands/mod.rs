//! CLI command definitions and dispatch.

pub mod config;
pub mod filters;
pub mod paginate;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use pyeza_core::config::ToolkitConfig;
use pyeza_core::error::AppError;

/// pyeza: server-side UI view models
#[derive(Debug, Parser)]
#[command(name = "pyeza", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Preview the pagination display for a page
    Paginate(paginate::PaginateArgs),
    /// Encode or decode filter tokens
    Filters(filters::FiltersArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command against the result of loading the configuration
    pub fn execute(&self, loaded: Result<ToolkitConfig, AppError>) -> Result<(), AppError> {
        match &self.command {
            Commands::Paginate(args) => paginate::execute(args, &loaded?, self.format),
            Commands::Filters(args) => filters::execute(args, self.format),
            Commands::Config(args) => config::execute(args, &self.config, loaded, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<ToolkitConfig, AppError> {
    ToolkitConfig::load(config_path)
}
