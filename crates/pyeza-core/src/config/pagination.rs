//! Pagination defaults and limits.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Page size used when a request does not carry `size`.
pub const DEFAULT_PAGE_SIZE: u64 = 25;
/// Largest page size a request may ask for.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Server-side pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size applied when the query omits `size`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound for the requested page size.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    /// Endpoint used for generated links when the caller does not supply one.
    #[serde(default)]
    pub base_url: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            base_url: String::new(),
        }
    }
}

impl PaginationConfig {
    /// Clamp a requested size into `[1, max_page_size]`, falling back to the
    /// default when absent.
    pub fn resolve_page_size(&self, requested: Option<u64>) -> NonZeroU64 {
        let size = requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size.max(1));
        NonZeroU64::new(size).unwrap_or(NonZeroU64::MIN)
    }

    pub(crate) fn validate(&self) -> AppResult<()> {
        if self.default_page_size == 0 {
            return Err(AppError::configuration(
                "pagination.default_page_size must be greater than zero",
            ));
        }
        if self.max_page_size < self.default_page_size {
            return Err(AppError::configuration(format!(
                "pagination.max_page_size ({}) must not be below default_page_size ({})",
                self.max_page_size, self.default_page_size
            )));
        }
        Ok(())
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u64 {
    MAX_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_page_size() {
        let config = PaginationConfig::default();
        assert_eq!(config.resolve_page_size(None).get(), 25);
        assert_eq!(config.resolve_page_size(Some(0)).get(), 1);
        assert_eq!(config.resolve_page_size(Some(40)).get(), 40);
        assert_eq!(config.resolve_page_size(Some(5000)).get(), 100);
    }

    #[test]
    fn test_zero_default_rejected() {
        let config = PaginationConfig {
            default_page_size: 0,
            ..PaginationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
