//! Turns a [`PaginationRequest`] into a [`PaginationDisplay`].

use std::num::NonZeroU64;

use tracing::debug;

use super::display::PaginationDisplay;
use super::link::{CursorDirection, LinkBuilder};
use super::request::{CursorState, PagePosition, PaginationMode, PaginationRequest};
use super::window::page_buttons;
use crate::types::sorting::SortSpec;

/// Number of pages needed for `total_rows` rows.
pub fn total_pages(total_rows: u64, page_size: NonZeroU64) -> u64 {
    total_rows.div_ceil(page_size.get())
}

/// Stateless display builder. Safe to share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationStateBuilder;

impl PaginationStateBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Compute the display for `request`. See [`build`].
    pub fn build(&self, request: &PaginationRequest) -> PaginationDisplay {
        build(request)
    }
}

impl PaginationRequest {
    /// Compute the render-ready display for this request.
    pub fn build_display(&self) -> PaginationDisplay {
        build(self)
    }
}

/// Compute the render-ready display for `request`.
///
/// Pure and deterministic: the same request always yields the same display.
pub fn build(request: &PaginationRequest) -> PaginationDisplay {
    let links = LinkBuilder::for_request(request);

    let out = match &request.position {
        PagePosition::Offset {
            current_page,
            total_rows,
        } => build_offset(request, *current_page, *total_rows, &links),
        PagePosition::Cursor(state) => build_cursor(request, state, &links),
    };

    debug!(
        mode = %out.mode,
        total_pages = out.total_pages,
        buttons = out.page_buttons.len(),
        has_prev = out.has_prev_page,
        has_next = out.has_next_page,
        "Built pagination display"
    );

    out
}

/// Display fields shared by both modes: the endpoints and the query state the
/// client script needs to rebuild links. Positional fields start at zero.
fn base_display(request: &PaginationRequest, mode: PaginationMode) -> PaginationDisplay {
    let query = &request.query;
    let sort = query.active_sort();

    PaginationDisplay {
        mode,
        page_size: request.page_size.get(),
        current_page: 0,
        total_rows: 0,
        total_pages: 0,
        start_row: 0,
        end_row: 0,
        has_next_page: false,
        has_prev_page: false,
        page_buttons: Vec::new(),
        prev_url: None,
        next_url: None,
        base_url: request.base_url.clone(),
        body_url: request.body_url.clone().filter(|u| !u.is_empty()),
        search: query.active_search().map(str::to_string),
        sort_column: sort.map(|s| s.column.clone()),
        sort_direction: sort.map(SortSpec::effective_direction),
        filters: query.active_filters().cloned(),
    }
}

fn build_offset(
    request: &PaginationRequest,
    current_page: u64,
    total_rows: u64,
    links: &LinkBuilder<'_>,
) -> PaginationDisplay {
    let size = request.page_size.get();
    let total_pages = total_pages(total_rows, request.page_size);

    let (start_row, end_row) = if total_rows == 0 {
        (0, 0)
    } else {
        let first_index = current_page.max(1) - 1;
        let start = first_index.saturating_mul(size).saturating_add(1);
        let end = current_page.max(1).saturating_mul(size).min(total_rows);
        (start, end)
    };

    let has_next_page = current_page < total_pages;
    let has_prev_page = current_page > 1;

    PaginationDisplay {
        current_page,
        total_rows,
        total_pages,
        start_row,
        end_row,
        has_next_page,
        has_prev_page,
        page_buttons: page_buttons(current_page, total_pages, |page| links.page_url(page)),
        prev_url: has_prev_page.then(|| links.page_url(current_page - 1)),
        next_url: has_next_page.then(|| links.page_url(current_page.saturating_add(1))),
        ..base_display(request, PaginationMode::Offset)
    }
}

fn build_cursor(
    request: &PaginationRequest,
    state: &CursorState,
    links: &LinkBuilder<'_>,
) -> PaginationDisplay {
    PaginationDisplay {
        has_next_page: state.has_next_page,
        has_prev_page: state.has_prev_page,
        prev_url: cursor_link(
            state.has_prev_page,
            state.prev_cursor.as_deref(),
            CursorDirection::Prev,
            links,
        ),
        next_url: cursor_link(
            state.has_next_page,
            state.next_cursor.as_deref(),
            CursorDirection::Next,
            links,
        ),
        ..base_display(request, PaginationMode::Cursor)
    }
}

/// A cursor link exists only when the flag is set and the token is non-empty.
fn cursor_link(
    available: bool,
    token: Option<&str>,
    direction: CursorDirection,
    links: &LinkBuilder<'_>,
) -> Option<String> {
    if !available {
        return None;
    }
    match token.filter(|t| !t.is_empty()) {
        Some(token) => Some(links.cursor_url(token, direction)),
        None => {
            debug!(%direction, "Cursor page flagged as available without a token; link suppressed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::display::PageButton;
    use crate::pagination::request::QueryState;
    use crate::types::filter::FiltersToken;
    use crate::types::sorting::SortDirection;

    fn size(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).expect("non-zero")
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, size(25)), 0);
        assert_eq!(total_pages(25, size(25)), 1);
        assert_eq!(total_pages(26, size(25)), 2);
    }

    #[test]
    fn test_offset_row_range() {
        let display = PaginationRequest::offset("/t", size(25), 3, 60).build_display();
        assert_eq!(display.start_row, 51);
        assert_eq!(display.end_row, 60);
        assert_eq!(display.total_pages, 3);
        assert!(display.has_prev_page);
        assert!(!display.has_next_page);
        assert_eq!(display.prev_url.as_deref(), Some("/t?page=2&size=25"));
        assert!(display.next_url.is_none());
    }

    #[test]
    fn test_empty_result_has_zero_range() {
        let display = PaginationRequest::offset("/t", size(25), 1, 0).build_display();
        assert_eq!((display.start_row, display.end_row), (0, 0));
        assert_eq!(display.total_pages, 0);
        assert!(display.page_buttons.is_empty());
        assert!(!display.has_next_page);
        assert!(!display.has_prev_page);
        assert_eq!(display.next_url_str(), "");
    }

    #[test]
    fn test_scenario_three_pages() {
        let display = PaginationRequest::offset("/t", size(10), 2, 30).build_display();
        let expected: Vec<PageButton> = (1..=3)
            .map(|n| PageButton::Numbered {
                number: n,
                active: n == 2,
                url: format!("/t?page={n}&size=10"),
            })
            .collect();
        assert_eq!(display.page_buttons, expected);
        assert_eq!(display.active_page(), Some(2));
    }

    #[test]
    fn test_page_button_urls_carry_query_state() {
        let query = QueryState::default()
            .with_search("acme")
            .with_sort(SortSpec::new("name"))
            .with_filters(FiltersToken::new("W10="));
        let display = PaginationRequest::offset("/t", size(10), 1, 15)
            .with_query(query)
            .build_display();

        assert_eq!(
            display.page_buttons[1].url(),
            Some("/t?page=2&size=10&search=acme&sort=name&dir=asc&filters=W10=")
        );
        assert_eq!(display.next_url.as_deref(), display.page_buttons[1].url());
    }

    #[test]
    fn test_cursor_links() {
        let state = CursorState::default().with_next("abc").with_prev("xyz");
        let display = PaginationRequest::cursor("/t", size(20), state).build_display();
        assert_eq!(display.mode, PaginationMode::Cursor);
        assert_eq!(
            display.next_url.as_deref(),
            Some("/t?cursor=abc&curdir=next&size=20")
        );
        assert_eq!(
            display.prev_url.as_deref(),
            Some("/t?cursor=xyz&curdir=prev&size=20")
        );
        assert!(display.page_buttons.is_empty());
    }

    #[test]
    fn test_cursor_flag_without_token_suppresses_link() {
        let state = CursorState {
            has_next_page: true,
            next_cursor: Some(String::new()),
            ..CursorState::default()
        };
        let display = PaginationRequest::cursor("/t", size(20), state).build_display();
        assert!(display.has_next_page);
        assert!(display.next_url.is_none());
        assert_eq!(display.next_url_str(), "");
    }

    #[test]
    fn test_cursor_token_without_flag_is_ignored() {
        let state = CursorState {
            next_cursor: Some("abc".to_string()),
            ..CursorState::default()
        };
        let display = PaginationRequest::cursor("/t", size(20), state).build_display();
        assert!(display.next_url.is_none());
    }

    #[test]
    fn test_display_echoes_endpoints_and_query_state() {
        let query = QueryState::default()
            .with_search("acme")
            .with_sort(SortSpec::new("name"))
            .with_filters(FiltersToken::new("W10="));
        let display = PaginationRequest::offset("/t", size(10), 1, 15)
            .with_body_url("/t/body")
            .with_query(query)
            .build_display();

        assert_eq!(display.base_url, "/t");
        assert_eq!(display.body_url.as_deref(), Some("/t/body"));
        assert_eq!(display.search.as_deref(), Some("acme"));
        assert_eq!(display.sort_column.as_deref(), Some("name"));
        assert_eq!(display.sort_direction, Some(SortDirection::Asc));
        assert_eq!(display.filters, Some(FiltersToken::new("W10=")));
    }

    #[test]
    fn test_display_drops_empty_query_values() {
        let query = QueryState {
            search: Some(String::new()),
            sort: Some(SortSpec::new("")),
            filters: Some(FiltersToken::default()),
        };
        let state = CursorState::default().with_next("abc");
        let display = PaginationRequest::cursor("/t", size(20), state)
            .with_body_url("")
            .with_query(query)
            .build_display();

        assert_eq!(display.base_url, "/t");
        assert!(display.body_url.is_none());
        assert!(display.search.is_none());
        assert!(display.sort_column.is_none());
        assert!(display.sort_direction.is_none());
        assert!(display.filters.is_none());
    }

    #[test]
    fn test_builder_struct_matches_free_function() {
        let request = PaginationRequest::offset("/t", size(10), 5, 200);
        assert_eq!(PaginationStateBuilder::new().build(&request), build(&request));
    }
}
