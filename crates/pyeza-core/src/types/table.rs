//! Data table view models.
//!
//! Applications fill a [`TableConfig`] with columns, rows and toolbar options
//! and pass it to the table template. With `server_pagination` set, the
//! table runs in server-side mode: search, sort and filters round-trip
//! through the links held in the [`PaginationDisplay`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::pagination::PaginationDisplay;

use super::chip::ChipData;
use super::sorting::SortDirection;

/// Horizontal alignment of a column or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Vertical alignment of a column, row or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// A column in a data table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Data attribute key used for sorting and filtering.
    pub key: String,
    /// Header label.
    pub label: String,
    pub sortable: bool,
    /// Fixed width, e.g. `"200px"` or `"20%"`.
    pub width: Option<String>,
    /// Minimum width; the column may grow but not shrink below it.
    pub min_width: Option<String>,
    pub align: Option<Align>,
    pub valign: Option<VAlign>,
}

impl TableColumn {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }
}

/// Columns sharing a parent header in a two-level header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnGroup {
    pub label: String,
    pub columns: Vec<TableColumn>,
}

/// An option of a `select` cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// How a cell is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[default]
    Text,
    Badge,
    Name,
    Link,
    Chips,
    Html,
    Author,
    Input,
    Select,
}

/// A single table cell.
///
/// `align`, `valign`, `width` and `min_width` are normally filled from the
/// column by [`apply_column_styles`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub kind: CellKind,
    pub value: String,
    /// Badge variant class (`success`, `error`, `warning`, …).
    pub variant: Option<String>,
    /// Badge type (`status`, `count`, `type`).
    pub badge_type: Option<String>,
    /// Show an alert icon next to a name cell.
    pub alert: bool,
    pub href: Option<String>,
    /// Pre-rendered, trusted markup for `html` cells.
    pub html: Option<String>,
    pub align: Option<Align>,
    pub valign: Option<VAlign>,
    pub width: Option<String>,
    pub min_width: Option<String>,
    pub chips: Vec<ChipData>,
    /// Number of chips hidden behind "+N".
    pub chip_overflow: usize,
    pub chip_tooltip: String,
    pub input_name: Option<String>,
    pub input_prefix: Option<String>,
    pub input_suffix: Option<String>,
    pub input_type: Option<String>,
    pub select_name: Option<String>,
    pub options: Vec<SelectOption>,
}

impl TableCell {
    /// A plain text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Text,
            value: value.into(),
            ..Self::default()
        }
    }

    /// A status badge.
    pub fn badge(value: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Badge,
            value: value.into(),
            variant: Some(variant.into()),
            ..Self::default()
        }
    }

    /// A link cell.
    pub fn link(value: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Link,
            value: value.into(),
            href: Some(href.into()),
            ..Self::default()
        }
    }
}

/// A row action button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAction {
    /// `view`, `edit`, `clone`, `delete`, `download`.
    pub kind: String,
    pub label: String,
    /// `data-action` value for client-side handling.
    pub action: String,
    pub href: Option<String>,
    /// Endpoint for edit/delete requests.
    pub url: Option<String>,
    pub drawer_title: Option<String>,
    pub item_name: Option<String>,
    pub confirm_title: Option<String>,
    pub confirm_message: Option<String>,
    pub disabled: bool,
    pub disabled_tooltip: Option<String>,
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: String,
    /// Navigate here when the row is clicked.
    pub href: Option<String>,
    /// `data-*` attributes used by client-side filter and sort.
    pub data_attrs: HashMap<String, String>,
    pub cells: Vec<TableCell>,
    pub actions: Vec<TableAction>,
    /// Set by [`TableConfig::apply_table_settings`].
    pub show_checkbox: bool,
    pub valign: Option<VAlign>,
}

/// Rows under a collapsible group header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRowGroup {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub collapsed: bool,
    pub rows: Vec<TableRow>,
    pub data_attrs: HashMap<String, String>,
}

/// Message shown when the table has no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEmptyState {
    /// Icon template name.
    pub icon: String,
    pub title: String,
    pub message: String,
}

/// Labels used by the table toolbar and footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLabels {
    pub search: String,
    pub search_placeholder: String,
    pub filters: String,
    pub sort: String,
    pub columns: String,
    pub export: String,
    pub filter_conditions: String,
    pub clear_all: String,
    pub add_condition: String,
    pub clear: String,
    pub apply_filters: String,
    pub density_default: String,
    pub density_comfortable: String,
    pub density_compact: String,
    pub show: String,
    pub entries: String,
    pub showing: String,
    pub to: String,
    pub of: String,
    pub entries_label: String,
    pub select_all: String,
    pub actions: String,
    pub prev: String,
    pub next: String,
}

/// Primary toolbar button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryAction {
    pub label: String,
    pub href: Option<String>,
    /// Icon template name, e.g. `icon-plus`.
    pub icon: Option<String>,
    /// Endpoint that returns the form drawer.
    pub action_url: Option<String>,
}

/// Import toolbar button, shown before the primary action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportAction {
    pub label: String,
    pub icon: Option<String>,
    pub href: Option<String>,
    pub action_url: Option<String>,
}

/// An action offered while rows are selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAction {
    pub key: String,
    pub label: String,
    pub icon: Option<String>,
    /// `default`, `danger`, `primary`, `warning`.
    pub variant: String,
    /// POST endpoint receiving the selected ids.
    pub endpoint: String,
    pub confirm_title: Option<String>,
    /// Message with a `{{count}}` placeholder.
    pub confirm_message: Option<String>,
    /// Pre-rendered JSON of extra form parameters.
    pub extra_params_json: Option<String>,
    /// Data attribute that must be `"true"` on every selected row.
    pub requires_data_attr: Option<String>,
}

/// Bulk selection mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkActionsConfig {
    pub enabled: bool,
    pub actions: Vec<BulkAction>,
    pub select_all_label: String,
    /// Template such as `"{count} selected"`.
    pub selected_label: String,
    pub cancel_label: String,
}

/// Everything the table component renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableConfig {
    pub id: String,
    pub card_class: Option<String>,
    /// Endpoint returning the table partial for refreshes.
    pub refresh_url: Option<String>,
    pub columns: Vec<TableColumn>,
    /// Two-level headers; alternative to `columns`.
    pub column_groups: Vec<ColumnGroup>,
    pub rows: Vec<TableRow>,
    /// Grouped rows; alternative to `rows`.
    pub groups: Vec<TableRowGroup>,
    /// Hide toolbar and footer.
    pub minimal: bool,
    pub show_checkbox: bool,
    pub show_search: bool,
    pub show_filters: bool,
    pub show_sort: bool,
    pub show_columns: bool,
    pub show_export: bool,
    pub show_density: bool,
    pub show_entries: bool,
    pub show_actions: bool,
    pub default_sort_column: Option<String>,
    pub default_sort_direction: SortDirection,
    pub labels: TableLabels,
    pub empty_state: TableEmptyState,
    pub import_action: Option<ImportAction>,
    pub primary_action: Option<PrimaryAction>,
    pub bulk_actions: Option<BulkActionsConfig>,
    /// `table-layout: fixed`; columns keep their declared widths.
    pub fixed_layout: bool,
    /// Server-side pagination; `None` means client-side mode.
    pub server_pagination: Option<PaginationDisplay>,
}

impl TableConfig {
    /// Propagate table-level settings to rows.
    ///
    /// Enabled bulk actions imply checkboxes. Every row, grouped or not,
    /// inherits `show_checkbox`.
    pub fn apply_table_settings(&mut self) {
        if self.bulk_actions.as_ref().is_some_and(|b| b.enabled) {
            self.show_checkbox = true;
        }
        let show = self.show_checkbox;
        self.rows
            .iter_mut()
            .chain(self.groups.iter_mut().flat_map(|g| g.rows.iter_mut()))
            .for_each(|row| row.show_checkbox = show);
    }

    /// Whether the table is paginated server-side.
    pub fn is_server_paginated(&self) -> bool {
        self.server_pagination.is_some()
    }
}

/// Copy column alignment and widths onto the matching cells of every row.
///
/// Only values set on the column are copied; cells past the last column are
/// left alone.
pub fn apply_column_styles(columns: &[TableColumn], rows: &mut [TableRow]) {
    for row in rows.iter_mut() {
        for (cell, column) in row.cells.iter_mut().zip(columns) {
            if column.align.is_some() {
                cell.align = column.align;
            }
            if column.valign.is_some() {
                cell.valign = column.valign;
            }
            if column.width.is_some() {
                cell.width.clone_from(&column.width);
            }
            if column.min_width.is_some() {
                cell.min_width.clone_from(&column.min_width);
            }
        }
    }
}
