//! Pagination input: position, page size and the query state carried into links.

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::types::filter::FiltersToken;
use crate::types::sorting::SortSpec;

/// How the result set is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// Absolute page numbers with a known row count.
    Offset,
    /// Opaque continuation tokens, no page count.
    Cursor,
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset => f.write_str("offset"),
            Self::Cursor => f.write_str("cursor"),
        }
    }
}

/// Keyset navigation state as reported by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorState {
    /// More rows exist after this page.
    pub has_next_page: bool,
    /// More rows exist before this page.
    pub has_prev_page: bool,
    /// Token addressing the next page.
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Token addressing the previous page.
    #[serde(default)]
    pub prev_cursor: Option<String>,
}

impl CursorState {
    /// Mark a next page as available, reachable through `token`.
    pub fn with_next(mut self, token: impl Into<String>) -> Self {
        self.has_next_page = true;
        self.next_cursor = Some(token.into());
        self
    }

    /// Mark a previous page as available, reachable through `token`.
    pub fn with_prev(mut self, token: impl Into<String>) -> Self {
        self.has_prev_page = true;
        self.prev_cursor = Some(token.into());
        self
    }
}

/// Where the current page sits. The variant selects the pagination mode, so
/// offset and cursor fields can never be mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PagePosition {
    /// Page-number addressing.
    Offset {
        /// 1-based page being shown.
        current_page: u64,
        /// Rows matching the current search and filters.
        total_rows: u64,
    },
    /// Token addressing.
    Cursor(CursorState),
}

/// Search, sort and filter state reproduced in every generated link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Free-text search term.
    #[serde(default)]
    pub search: Option<String>,
    /// Active sort column and direction.
    #[serde(default)]
    pub sort: Option<SortSpec>,
    /// Encoded advanced filters.
    #[serde(default)]
    pub filters: Option<FiltersToken>,
}

impl QueryState {
    /// Set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the active sort.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the filters token.
    pub fn with_filters(mut self, filters: FiltersToken) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Search term if one is set and non-empty.
    pub fn active_search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Sort if a non-empty column is set.
    pub fn active_sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref().filter(|s| !s.column.is_empty())
    }

    /// Filters token if one is set and non-empty.
    pub fn active_filters(&self) -> Option<&FiltersToken> {
        self.filters.as_ref().filter(|f| !f.is_empty())
    }
}

/// Everything the display builder needs for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Endpoint that accepts the pagination query parameters.
    pub base_url: String,
    /// Endpoint returning only the table body, for targeted swaps.
    #[serde(default)]
    pub body_url: Option<String>,
    /// Rows per page.
    pub page_size: NonZeroU64,
    /// Current position in the result set.
    pub position: PagePosition,
    /// Search, sort and filters to carry through.
    #[serde(default)]
    pub query: QueryState,
}

impl PaginationRequest {
    /// Create an offset-mode request.
    pub fn offset(
        base_url: impl Into<String>,
        page_size: NonZeroU64,
        current_page: u64,
        total_rows: u64,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            body_url: None,
            page_size,
            position: PagePosition::Offset {
                current_page,
                total_rows,
            },
            query: QueryState::default(),
        }
    }

    /// Create a cursor-mode request.
    pub fn cursor(base_url: impl Into<String>, page_size: NonZeroU64, state: CursorState) -> Self {
        Self {
            base_url: base_url.into(),
            body_url: None,
            page_size,
            position: PagePosition::Cursor(state),
            query: QueryState::default(),
        }
    }

    /// Set the body-only endpoint.
    pub fn with_body_url(mut self, body_url: impl Into<String>) -> Self {
        self.body_url = Some(body_url.into());
        self
    }

    /// Replace the query state.
    pub fn with_query(mut self, query: QueryState) -> Self {
        self.query = query;
        self
    }

    /// The mode selected by the position variant.
    pub fn mode(&self) -> PaginationMode {
        match self.position {
            PagePosition::Offset { .. } => PaginationMode::Offset,
            PagePosition::Cursor(_) => PaginationMode::Cursor,
        }
    }
}
