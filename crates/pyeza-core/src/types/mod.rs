//! View-model and query types shared by pyeza components.

pub mod chip;
pub mod filter;
pub mod page;
pub mod sidebar;
pub mod sorting;
pub mod table;

pub use chip::{ChipData, chip_cell_from_ids, chip_cell_from_labels};
pub use filter::{FilterCondition, FilterLogic, FilterOperator, FiltersToken, evaluate_conditions};
pub use page::PageData;
pub use sidebar::{SidebarApp, SidebarConfig, SidebarItem, SidebarSection};
pub use sorting::{SortDirection, SortSpec};
pub use table::{
    Align, BulkAction, BulkActionsConfig, CellKind, ColumnGroup, ImportAction, PrimaryAction,
    SelectOption, TableAction, TableCell, TableColumn, TableConfig, TableEmptyState, TableLabels,
    TableRow, TableRowGroup, VAlign, apply_column_styles,
};
