//! Filter token CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use pyeza_core::error::AppError;
use pyeza_core::types::{FilterCondition, FiltersToken};

/// Arguments for filters commands
#[derive(Debug, Args)]
pub struct FiltersArgs {
    /// Filters subcommand
    #[command(subcommand)]
    pub command: FiltersCommand,
}

/// Filters subcommands
#[derive(Debug, Subcommand)]
pub enum FiltersCommand {
    /// Encode a JSON array of conditions into a token
    Encode {
        /// e.g. '[{"column":"status","operator":"equals","value":"active"}]'
        json: String,
    },
    /// Decode a token into its conditions
    Decode {
        /// Base64 token as found in the `filters` query parameter
        token: String,
    },
}

/// One condition as a table row
#[derive(Debug, Serialize, Tabled)]
struct ConditionRow {
    #[tabled(rename = "Logic")]
    logic: String,
    #[tabled(rename = "Column")]
    column: String,
    #[tabled(rename = "Operator")]
    operator: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl ConditionRow {
    fn from_condition(condition: &FilterCondition) -> Result<Self, AppError> {
        Ok(Self {
            logic: enum_text(&condition.logic)?,
            column: condition.column.clone(),
            operator: enum_text(&condition.operator)?,
            value: condition.value.clone(),
        })
    }
}

/// Execute filters commands
pub fn execute(args: &FiltersArgs, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        FiltersCommand::Encode { json } => {
            let conditions: Vec<FilterCondition> = serde_json::from_str(json)?;
            let token = FiltersToken::encode(&conditions)?;
            tracing::debug!(conditions = conditions.len(), "Encoded filters token");
            match format {
                OutputFormat::Json => output::print_json(&token),
                OutputFormat::Table => println!("{}", token),
            }
        }
        FiltersCommand::Decode { token } => {
            let conditions = FiltersToken::new(token.as_str()).decode()?;
            match format {
                OutputFormat::Json => output::print_json(&conditions),
                OutputFormat::Table => {
                    let rows = conditions
                        .iter()
                        .map(ConditionRow::from_condition)
                        .collect::<Result<Vec<_>, _>>()?;
                    output::print_list(&rows, format);
                }
            }
        }
    }

    Ok(())
}

/// Wire spelling of a serde unit enum (`starts_with`, `or`, …).
fn enum_text<T: Serialize>(value: &T) -> Result<String, AppError> {
    match serde_json::to_value(value)? {
        serde_json::Value::String(text) => Ok(text),
        other => Ok(other.to_string()),
    }
}
