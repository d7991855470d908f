//! Sidebar navigation view models.

use serde::{Deserialize, Serialize};

/// Everything needed to render the sidebar block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarConfig {
    pub logo_text: String,
    pub logo_url: String,
    /// Entries of the app switcher.
    pub apps: Vec<SidebarApp>,
    pub active_app: String,
    pub sections: Vec<SidebarSection>,
    pub active_nav: String,
    pub active_sub_nav: String,
}

/// An entry in the app switcher dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarApp {
    pub key: String,
    pub label: String,
    /// Icon template name, e.g. `icon-users`.
    pub icon: String,
    pub url: String,
}

/// A titled group of navigation items. An empty title renders no heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    pub title: String,
    pub items: Vec<SidebarItem>,
}

/// A navigation link, possibly with a sub-menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub key: String,
    pub label: String,
    pub icon: String,
    pub href: String,
    pub tooltip: String,
    pub children: Vec<SidebarItem>,
}

impl SidebarItem {
    /// True when this item or any descendant has `key`.
    pub fn is_active(&self, key: &str) -> bool {
        self.key == key || self.children.iter().any(|child| child.is_active(key))
    }
}

impl SidebarConfig {
    /// The section item that should be highlighted for `active_nav`.
    pub fn active_item(&self) -> Option<&SidebarItem> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .find(|item| item.is_active(&self.active_nav))
    }
}
