//! Incoming pagination query parameters.
//!
//! [`PaginationQuery`] is the receiving side of the link format produced by
//! [`LinkBuilder`](super::link::LinkBuilder). It deserializes straight from a
//! query string (for example with an `axum::extract::Query`) and assembles a
//! clamped [`PaginationRequest`] once the data layer has counted or fetched.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::builder::total_pages;
use super::link::CursorDirection;
use super::request::{CursorState, PaginationRequest, QueryState};
use crate::config::pagination::PaginationConfig;
use crate::result::AppResult;
use crate::types::filter::FiltersToken;
use crate::types::sorting::{SortDirection, SortSpec};

/// Raw pagination parameters as they arrive on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationQuery {
    /// Requested page (offset mode, 1-based).
    #[serde(default)]
    pub page: Option<u64>,
    /// Requested page size.
    #[serde(default)]
    pub size: Option<u64>,
    /// Continuation token (cursor mode).
    #[serde(default)]
    pub cursor: Option<String>,
    /// Direction of the continuation token, matched case-insensitively.
    #[serde(default, deserialize_with = "deserialize_curdir")]
    pub curdir: Option<CursorDirection>,
    /// Free-text search.
    #[serde(default)]
    pub search: Option<String>,
    /// Sort column key.
    #[serde(default)]
    pub sort: Option<String>,
    /// Sort direction text (`asc`/`desc`).
    #[serde(default)]
    pub dir: Option<String>,
    /// Encoded advanced filters.
    #[serde(default)]
    pub filters: Option<String>,
}

fn deserialize_curdir<'de, D>(deserializer: D) -> Result<Option<CursorDirection>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse::<CursorDirection>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl PaginationQuery {
    /// Requested page, at least 1.
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Requested page size clamped to the configured limits.
    pub fn page_size(&self, config: &PaginationConfig) -> std::num::NonZeroU64 {
        config.resolve_page_size(self.size)
    }

    /// SQL `OFFSET` for the requested page.
    pub fn offset(&self, config: &PaginationConfig) -> u64 {
        (self.page() - 1).saturating_mul(self.page_size(config).get())
    }

    /// SQL `LIMIT` for the requested page.
    pub fn limit(&self, config: &PaginationConfig) -> u64 {
        self.page_size(config).get()
    }

    /// Non-empty continuation token with its direction (`next` when unset).
    pub fn cursor(&self) -> Option<(&str, CursorDirection)> {
        self.cursor
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| (c, self.curdir.unwrap_or_default()))
    }

    /// Search, sort and filters to carry into generated links.
    ///
    /// Fails only when `dir` is neither empty nor `asc`/`desc`.
    pub fn query_state(&self) -> AppResult<QueryState> {
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let sort = match self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(column) => {
                let direction = match self.dir.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
                    Some(dir) => Some(dir.parse::<SortDirection>()?),
                    None => None,
                };
                Some(SortSpec {
                    column: column.to_string(),
                    direction,
                })
            }
            None => None,
        };

        let filters = self
            .filters
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(FiltersToken::new);

        Ok(QueryState {
            search,
            sort,
            filters,
        })
    }

    /// Build an offset-mode request, clamping the page into
    /// `[1, max(total_pages, 1)]`.
    pub fn offset_request(
        &self,
        base_url: impl Into<String>,
        total_rows: u64,
        config: &PaginationConfig,
    ) -> AppResult<PaginationRequest> {
        let page_size = self.page_size(config);
        let last_page = total_pages(total_rows, page_size).max(1);
        let requested = self.page();
        let current_page = requested.min(last_page);

        if current_page != requested {
            debug!(requested, current_page, last_page, "Clamped requested page");
        }

        Ok(PaginationRequest::offset(base_url, page_size, current_page, total_rows)
            .with_query(self.query_state()?))
    }

    /// Build a cursor-mode request from the data layer's navigation state.
    pub fn cursor_request(
        &self,
        base_url: impl Into<String>,
        state: CursorState,
        config: &PaginationConfig,
    ) -> AppResult<PaginationRequest> {
        Ok(
            PaginationRequest::cursor(base_url, self.page_size(config), state)
                .with_query(self.query_state()?),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn query(json: serde_json::Value) -> PaginationQuery {
        serde_json::from_value(json).expect("query should deserialize")
    }

    #[test]
    fn test_defaults() {
        let config = PaginationConfig::default();
        let q = PaginationQuery::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(&config).get(), 25);
        assert_eq!(q.offset(&config), 0);
        assert_eq!(q.limit(&config), 25);
        assert!(q.cursor().is_none());
    }

    #[test]
    fn test_offset_and_limit() {
        let config = PaginationConfig::default();
        let q = query(serde_json::json!({ "page": 3, "size": 10 }));
        assert_eq!(q.offset(&config), 20);
        assert_eq!(q.limit(&config), 10);
    }

    #[test]
    fn test_query_state_parsing() {
        let q = query(serde_json::json!({
            "search": "  acme ",
            "sort": "name",
            "dir": "DESC",
            "filters": "W10="
        }));
        let state = q.query_state().expect("valid state");
        assert_eq!(state.search.as_deref(), Some("acme"));
        assert_eq!(state.sort, Some(SortSpec::desc("name")));
        assert_eq!(state.filters, Some(FiltersToken::new("W10=")));
    }

    #[test]
    fn test_empty_dir_leaves_direction_unset() {
        let q = query(serde_json::json!({ "sort": "name", "dir": "" }));
        let state = q.query_state().expect("valid state");
        assert_eq!(state.sort, Some(SortSpec::new("name")));
    }

    #[test]
    fn test_dir_without_sort_is_ignored() {
        let q = query(serde_json::json!({ "dir": "desc" }));
        assert!(q.query_state().expect("valid state").sort.is_none());
    }

    #[test]
    fn test_invalid_dir_is_validation_error() {
        let q = query(serde_json::json!({ "sort": "name", "dir": "up" }));
        let err = q.query_state().expect_err("invalid dir");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_offset_request_clamps_page() {
        let config = PaginationConfig::default();
        let q = query(serde_json::json!({ "page": 99, "size": 10 }));
        let request = q.offset_request("/t", 35, &config).expect("request");
        let display = request.build_display();
        assert_eq!(display.current_page, 4);
        assert_eq!((display.start_row, display.end_row), (31, 35));

        let empty = q.offset_request("/t", 0, &config).expect("request");
        assert_eq!(empty.build_display().current_page, 1);
    }

    #[test]
    fn test_cursor_defaults_to_next() {
        let q = query(serde_json::json!({ "cursor": "abc" }));
        assert_eq!(q.cursor(), Some(("abc", CursorDirection::Next)));

        let q = query(serde_json::json!({ "cursor": "abc", "curdir": "prev" }));
        assert_eq!(q.cursor(), Some(("abc", CursorDirection::Prev)));

        let q = query(serde_json::json!({ "cursor": "" }));
        assert!(q.cursor().is_none());
    }

    #[test]
    fn test_curdir_is_case_insensitive() {
        let q = query(serde_json::json!({ "cursor": "abc", "curdir": "PREV" }));
        assert_eq!(q.cursor(), Some(("abc", CursorDirection::Prev)));

        let q = query(serde_json::json!({ "cursor": "abc", "curdir": " Next " }));
        assert_eq!(q.cursor(), Some(("abc", CursorDirection::Next)));

        let q = query(serde_json::json!({ "cursor": "abc", "curdir": "" }));
        assert_eq!(q.curdir, None);
    }

    #[test]
    fn test_unknown_curdir_is_rejected() {
        let result: Result<PaginationQuery, _> =
            serde_json::from_value(serde_json::json!({ "curdir": "sideways" }));
        assert!(result.is_err());
    }
}
