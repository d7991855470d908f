//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::num::NonZeroU64;

use pyeza::{PageButton, PaginationDisplay, PaginationRequest};

/// Base URL used by every fixture.
pub const BASE_URL: &str = "/action/clients/table";

/// Non-zero page size.
pub fn size(n: u64) -> NonZeroU64 {
    NonZeroU64::new(n).expect("page size must be non-zero")
}

/// Offset display for `current_page` of `total_rows` rows.
pub fn offset_display(page_size: u64, current_page: u64, total_rows: u64) -> PaginationDisplay {
    PaginationRequest::offset(BASE_URL, size(page_size), current_page, total_rows).build_display()
}

/// Compact layout of the page buttons: numbers, with `None` for an ellipsis.
pub fn layout(display: &PaginationDisplay) -> Vec<Option<u64>> {
    display.page_buttons.iter().map(PageButton::number).collect()
}

/// Numbers of the active buttons.
pub fn active_numbers(display: &PaginationDisplay) -> Vec<u64> {
    display
        .page_buttons
        .iter()
        .filter(|b| b.is_active())
        .filter_map(PageButton::number)
        .collect()
}
