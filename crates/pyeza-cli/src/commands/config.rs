//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use pyeza_core::config::ToolkitConfig;
use pyeza_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    loaded: Result<ToolkitConfig, AppError>,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = loaded?;
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => println!("{:#?}", config),
            }
        }
        ConfigCommand::Validate => match loaded {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv(
                    "Page size",
                    &format!(
                        "{} (max {})",
                        config.pagination.default_page_size, config.pagination.max_page_size
                    ),
                );
                output::print_kv("Base URL", &config.pagination.base_url);
                output::print_kv("Visible chips", &config.table.max_visible_chips.to_string());
                output::print_kv(
                    "Logging",
                    &format!("{} ({})", config.logging.level, config.logging.format),
                );
            }
            Err(e) => {
                return Err(AppError::configuration(format!(
                    "Configuration '{}' is invalid: {}",
                    config_path, e.message
                )));
            }
        },
    }

    Ok(())
}
