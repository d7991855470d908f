//! Toolkit configuration schemas.
//!
//! Configuration is deserialized via the `config` crate from an optional
//! `config/default.toml`, a caller-supplied file, and `PYEZA_` environment
//! variables (`PYEZA_PAGINATION__MAX_PAGE_SIZE=50`). Every field has a
//! default, so an empty source still yields a usable configuration.

pub mod logging;
pub mod pagination;
pub mod table;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::pagination::PaginationConfig;
use self::table::TableDefaults;

use crate::error::AppError;
use crate::result::AppResult;

/// Root toolkit configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Pagination defaults and limits.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Table rendering defaults.
    #[serde(default)]
    pub table: TableDefaults,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ToolkitConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges `config/default.toml` (if present), the file at `path` (if
    /// present) and environment variables prefixed with `PYEZA_`.
    pub fn load(path: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PYEZA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(source: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        let parsed: Self = config.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> AppResult<()> {
        self.pagination.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
