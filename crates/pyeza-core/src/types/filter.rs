//! Advanced filter conditions and the opaque filters token.
//!
//! The table toolbar posts its filter builder state as a base64-encoded JSON
//! array of [`FilterCondition`]s. The pagination engine never looks inside
//! the token: it is copied verbatim into every generated link. Data layers
//! that need the conditions decode it with [`FiltersToken::decode`].

use std::collections::HashMap;
use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Cell contains the value.
    Contains,
    /// Exact (case-insensitive) equality.
    Equals,
    /// Cell starts with the value.
    StartsWith,
    /// Cell ends with the value.
    EndsWith,
    /// Cell differs from the value.
    NotEquals,
    /// Cell is empty.
    IsEmpty,
    /// Cell is not empty.
    IsNotEmpty,
}

/// How a condition combines with the result of the conditions before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLogic {
    /// Both must match.
    #[default]
    And,
    /// Either may match.
    Or,
}

/// A single filter condition on a named column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Column key the condition applies to.
    pub column: String,
    /// Comparison operator.
    pub operator: FilterOperator,
    /// Value to compare against (ignored by the emptiness operators).
    #[serde(default)]
    pub value: String,
    /// Connector to the previous condition.
    #[serde(default)]
    pub logic: FilterLogic,
}

impl FilterCondition {
    /// Create an `and`-connected condition.
    pub fn new(column: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
            logic: FilterLogic::And,
        }
    }

    /// Switch this condition to `or` logic.
    pub fn or(mut self) -> Self {
        self.logic = FilterLogic::Or;
        self
    }

    /// Test a single cell value. Comparisons are case-insensitive.
    pub fn matches(&self, cell: &str) -> bool {
        let cell = cell.to_lowercase();
        let value = self.value.to_lowercase();
        match self.operator {
            FilterOperator::Contains => cell.contains(&value),
            FilterOperator::Equals => cell == value,
            FilterOperator::StartsWith => cell.starts_with(&value),
            FilterOperator::EndsWith => cell.ends_with(&value),
            FilterOperator::NotEquals => cell != value,
            FilterOperator::IsEmpty => cell.is_empty(),
            FilterOperator::IsNotEmpty => !cell.is_empty(),
        }
    }
}

/// Evaluate a list of conditions against a row's column values.
///
/// The first condition seeds the result; each later condition folds in with
/// its own `logic`. Missing columns read as the empty string. An empty list
/// matches every row.
pub fn evaluate_conditions(conditions: &[FilterCondition], row: &HashMap<String, String>) -> bool {
    let mut iter = conditions.iter();
    let Some(first) = iter.next() else {
        return true;
    };

    let cell = |c: &FilterCondition| row.get(&c.column).map(String::as_str).unwrap_or("");
    let mut matched = first.matches(cell(first));

    for condition in iter {
        let hit = condition.matches(cell(condition));
        matched = match condition.logic {
            FilterLogic::Or => matched || hit,
            FilterLogic::And => matched && hit,
        };
    }

    matched
}

/// Opaque encoded representation of the active filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiltersToken(String);

impl FiltersToken {
    /// Wrap an already-encoded token (for example straight from a query string).
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Encode conditions as base64 JSON. No conditions yields an empty token.
    pub fn encode(conditions: &[FilterCondition]) -> AppResult<Self> {
        if conditions.is_empty() {
            return Ok(Self::default());
        }
        let json = serde_json::to_vec(conditions)?;
        Ok(Self(STANDARD.encode(json)))
    }

    /// Decode the token back into conditions. An empty token has none.
    pub fn decode(&self) -> AppResult<Vec<FilterCondition>> {
        if self.0.is_empty() {
            return Ok(Vec::new());
        }
        let bytes = STANDARD.decode(self.0.as_bytes())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Return the raw token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no filters are encoded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FiltersToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
