//! Navigation URL construction.
//!
//! Parameter order is part of the wire contract and is fixed:
//! positional parameters (`page`/`size` or `cursor`/`curdir`/`size`), then
//! `search`, `sort` + `dir`, `filters`. Values are written verbatim; callers
//! are responsible for any escaping they need.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::request::{PaginationRequest, QueryState};
use crate::error::AppError;

/// Direction of a cursor link (`curdir`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorDirection {
    /// Towards earlier rows.
    Prev,
    /// Towards later rows.
    #[default]
    Next,
}

impl CursorDirection {
    /// Value used for the `curdir` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }
}

impl fmt::Display for CursorDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for CursorDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            other => Err(AppError::validation(format!(
                "invalid cursor direction '{other}', expected 'prev' or 'next'"
            ))),
        }
    }
}

/// Builds links that share one base URL, page size and query state.
#[derive(Debug, Clone, Copy)]
pub struct LinkBuilder<'a> {
    base_url: &'a str,
    page_size: u64,
    query: &'a QueryState,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(base_url: &'a str, page_size: u64, query: &'a QueryState) -> Self {
        Self {
            base_url,
            page_size,
            query,
        }
    }

    /// Link builder for the request's base URL, page size and query state.
    pub fn for_request(request: &'a PaginationRequest) -> Self {
        Self::new(&request.base_url, request.page_size.get(), &request.query)
    }

    /// `base?page=N&size=S[&search=..][&sort=..&dir=..][&filters=..]`
    pub fn page_url(&self, page: u64) -> String {
        let mut url = self.start();
        url.push_str(&format!("page={page}&size={}", self.page_size));
        self.push_query_state(&mut url);
        url
    }

    /// `base?cursor=T&curdir=D&size=S[&search=..][&sort=..&dir=..][&filters=..]`
    pub fn cursor_url(&self, cursor: &str, direction: CursorDirection) -> String {
        let mut url = self.start();
        url.push_str(&format!(
            "cursor={cursor}&curdir={direction}&size={}",
            self.page_size
        ));
        self.push_query_state(&mut url);
        url
    }

    fn start(&self) -> String {
        let mut url = String::with_capacity(self.base_url.len() + 64);
        url.push_str(self.base_url);
        if !self.base_url.contains('?') {
            url.push('?');
        } else if !self.base_url.ends_with(['?', '&']) {
            url.push('&');
        }
        url
    }

    fn push_query_state(&self, url: &mut String) {
        if let Some(search) = self.query.active_search() {
            url.push_str("&search=");
            url.push_str(search);
        }
        if let Some(sort) = self.query.active_sort() {
            url.push_str("&sort=");
            url.push_str(&sort.column);
            url.push_str("&dir=");
            url.push_str(sort.effective_direction().as_query());
        }
        if let Some(filters) = self.query.active_filters() {
            url.push_str("&filters=");
            url.push_str(filters.as_str());
        }
    }
}
