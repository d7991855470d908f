//! Render-ready pagination output.

use serde::Serialize;

use super::request::PaginationMode;
use crate::types::filter::FiltersToken;
use crate::types::sorting::SortDirection;

/// A single entry in the page-number strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    /// A clickable page number.
    Numbered {
        /// 1-based page number.
        number: u64,
        /// Whether this is the page being shown.
        active: bool,
        /// Pre-built link to the page.
        url: String,
    },
    /// A non-clickable "…" gap.
    Ellipsis,
}

impl PageButton {
    /// Page number, or `None` for an ellipsis.
    pub fn number(&self) -> Option<u64> {
        match self {
            Self::Numbered { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }

    /// Whether this is the active page button.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Numbered { active: true, .. })
    }

    /// Whether this is an ellipsis.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }

    /// Link of a numbered button.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Numbered { url, .. } => Some(url),
            Self::Ellipsis => None,
        }
    }
}

/// Fully resolved pagination state handed to the template layer.
///
/// Offset-only fields (`current_page`, `total_rows`, `total_pages`,
/// `start_row`, `end_row`, `page_buttons`) are zero or empty in cursor mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationDisplay {
    pub mode: PaginationMode,
    pub page_size: u64,
    pub current_page: u64,
    pub total_rows: u64,
    pub total_pages: u64,
    /// First row shown, 1-based; 0 when there are no rows.
    pub start_row: u64,
    /// Last row shown, inclusive; 0 when there are no rows.
    pub end_row: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub page_buttons: Vec<PageButton>,
    /// Link to the previous page, if one is reachable.
    pub prev_url: Option<String>,
    /// Link to the next page, if one is reachable.
    pub next_url: Option<String>,
    /// Endpoint the links were built from; client scripts rebuild links
    /// from it when the search, sort or page size changes.
    pub base_url: String,
    /// Body-only endpoint, if the caller has one.
    pub body_url: Option<String>,
    /// Active search term, to pre-fill the search input.
    pub search: Option<String>,
    /// Active sort column, to mark the sorted header.
    pub sort_column: Option<String>,
    /// Effective direction of the active sort.
    pub sort_direction: Option<SortDirection>,
    /// Active filters token.
    pub filters: Option<FiltersToken>,
}

impl PaginationDisplay {
    /// Previous-page link, or `""` when unavailable.
    pub fn prev_url_str(&self) -> &str {
        self.prev_url.as_deref().unwrap_or("")
    }

    /// Next-page link, or `""` when unavailable.
    pub fn next_url_str(&self) -> &str {
        self.next_url.as_deref().unwrap_or("")
    }

    /// Number of the active page button, if any.
    pub fn active_page(&self) -> Option<u64> {
        self.page_buttons
            .iter()
            .find(|b| b.is_active())
            .and_then(PageButton::number)
    }
}
