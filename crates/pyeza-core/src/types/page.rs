//! Base data handed to every page template.

use std::collections::HashMap;

use serde::Serialize;

use super::sidebar::SidebarConfig;

/// Shell data shared by all pages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageData {
    /// Cache-busting suffix for asset URLs.
    pub cache_version: String,
    pub title: String,
    /// Name of the content template rendered inside the app shell.
    ///
    /// Must be a constant chosen by view code, never derived from request
    /// input.
    pub content_template: String,
    pub current_path: String,
    pub active_nav: String,
    pub active_sub_nav: String,
    pub sidebar: SidebarConfig,
    pub header_icon: String,
    pub header_title: String,
    pub header_subtitle: String,
    pub search_placeholder: String,
    pub has_notifications: bool,
    /// Pre-rendered help pane markup.
    pub help_content: Option<String>,
    /// Pre-rendered header icon markup.
    pub header_icon_html: Option<String>,
    /// Flat translations keyed by dot-notation (`client.page.title`).
    pub messages: HashMap<String, String>,
}

impl PageData {
    /// Translation for `key`, or the key itself when missing.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Whether a help pane should be offered.
    pub fn has_help(&self) -> bool {
        self.help_content.as_deref().is_some_and(|h| !h.is_empty())
    }
}
