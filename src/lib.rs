//! # pyeza
//!
//! Server-side UI component toolkit. Applications build view models (tables,
//! pagination footers, sidebars, page shells) with this crate and hand them
//! to their template renderer.
//!
//! This crate re-exports the public API of `pyeza-core` so applications
//! depend on a single crate.

pub use pyeza_core::config::{self, ToolkitConfig};
pub use pyeza_core::error::{AppError, ErrorKind};
pub use pyeza_core::pagination::{
    self, CursorDirection, CursorState, LinkBuilder, PageButton, PagePosition, PaginationDisplay,
    PaginationMode, PaginationQuery, PaginationRequest, PaginationStateBuilder, QueryState,
};
pub use pyeza_core::result::AppResult;
pub use pyeza_core::types::{
    self, Align, BulkAction, BulkActionsConfig, CellKind, ChipData, ColumnGroup, FilterCondition,
    FilterLogic, FilterOperator, FiltersToken, ImportAction, PageData, PrimaryAction,
    SelectOption, SidebarApp, SidebarConfig, SidebarItem, SidebarSection, SortDirection,
    SortSpec, TableAction, TableCell, TableColumn, TableConfig, TableEmptyState, TableLabels,
    TableRow, TableRowGroup, VAlign, apply_column_styles, chip_cell_from_ids,
    chip_cell_from_labels, evaluate_conditions,
};
