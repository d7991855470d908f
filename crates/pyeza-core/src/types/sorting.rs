//! Sorting types carried through pagination links.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the value used for the `dir` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Return the opposite direction (clicking an already-sorted header).
    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(AppError::validation(format!(
                "invalid sort direction '{other}', expected 'asc' or 'desc'"
            ))),
        }
    }
}

/// The active sort: a column key and an optional direction.
///
/// An unset direction is rendered as `asc` in generated links; see
/// [`SortSpec::effective_direction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column key to sort by.
    pub column: String,
    /// Requested direction, if any.
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl SortSpec {
    /// Create a sort on `column` with no explicit direction.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: None,
        }
    }

    /// Create an ascending sort on the given column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column).with_direction(SortDirection::Asc)
    }

    /// Create a descending sort on the given column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column).with_direction(SortDirection::Desc)
    }

    /// Set the direction explicitly.
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Direction written to the `dir` parameter: the requested one, or
    /// ascending when none was requested.
    pub fn effective_direction(&self) -> SortDirection {
        self.direction.unwrap_or_default()
    }
}
