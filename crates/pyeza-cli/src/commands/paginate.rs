//! Pagination preview commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use pyeza_core::config::ToolkitConfig;
use pyeza_core::error::AppError;
use pyeza_core::pagination::{CursorState, PageButton, PaginationDisplay, PaginationQuery};

/// Arguments for paginate commands
#[derive(Debug, Args)]
pub struct PaginateArgs {
    /// Pagination mode
    #[command(subcommand)]
    pub command: PaginateCommand,
}

/// Pagination modes
#[derive(Debug, Subcommand)]
pub enum PaginateCommand {
    /// Page-number pagination over a known row count
    Offset {
        /// Requested page (clamped to the last page)
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        /// Total rows matching the query
        #[arg(short, long)]
        total: u64,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Token pagination with prev/next links only
    Cursor {
        /// Token for the next page
        #[arg(long)]
        next: Option<String>,
        /// Token for the previous page
        #[arg(long)]
        prev: Option<String>,
        /// Flag a next page even without a token
        #[arg(long)]
        has_next: bool,
        /// Flag a previous page even without a token
        #[arg(long)]
        has_prev: bool,
        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Options shared by both modes
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Rows per page (defaults to the configured page size)
    #[arg(short, long)]
    pub size: Option<u64>,
    /// Endpoint for generated links (defaults to the configured base URL)
    #[arg(long)]
    pub base_url: Option<String>,
    /// Search term carried into links
    #[arg(long)]
    pub search: Option<String>,
    /// Sort column carried into links
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort direction (asc or desc)
    #[arg(long)]
    pub dir: Option<String>,
    /// Encoded filters token carried into links
    #[arg(long)]
    pub filters: Option<String>,
}

impl CommonArgs {
    fn query(&self, page: Option<u64>) -> PaginationQuery {
        PaginationQuery {
            page,
            size: self.size,
            search: self.search.clone(),
            sort: self.sort.clone(),
            dir: self.dir.clone(),
            filters: self.filters.clone(),
            ..PaginationQuery::default()
        }
    }

    fn base_url(&self, config: &ToolkitConfig) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| config.pagination.base_url.clone())
    }
}

/// One page button as a table row
#[derive(Debug, Serialize, Tabled)]
struct ButtonRow {
    #[tabled(rename = "Page")]
    page: String,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&PageButton> for ButtonRow {
    fn from(button: &PageButton) -> Self {
        match button {
            PageButton::Numbered {
                number,
                active,
                url,
            } => Self {
                page: number.to_string(),
                active: if *active { "*".to_string() } else { String::new() },
                url: url.clone(),
            },
            PageButton::Ellipsis => Self {
                page: "…".to_string(),
                active: String::new(),
                url: String::new(),
            },
        }
    }
}

/// Execute paginate commands
pub fn execute(
    args: &PaginateArgs,
    config: &ToolkitConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let display = match &args.command {
        PaginateCommand::Offset {
            page,
            total,
            common,
        } => {
            let request = common.query(Some(*page)).offset_request(
                common.base_url(config),
                *total,
                &config.pagination,
            )?;
            let display = request.build_display();
            if display.current_page != *page {
                output::print_warning(&format!(
                    "Page {} is out of range; showing page {}",
                    page, display.current_page
                ));
            }
            display
        }
        PaginateCommand::Cursor {
            next,
            prev,
            has_next,
            has_prev,
            common,
        } => {
            let state = CursorState {
                has_next_page: *has_next || next.is_some(),
                has_prev_page: *has_prev || prev.is_some(),
                next_cursor: next.clone(),
                prev_cursor: prev.clone(),
            };
            let request = common.query(None).cursor_request(
                common.base_url(config),
                state,
                &config.pagination,
            )?;
            let display = request.build_display();
            if display.has_next_page && display.next_url.is_none() {
                output::print_warning("Next page flagged without a cursor token; link suppressed");
            }
            if display.has_prev_page && display.prev_url.is_none() {
                output::print_warning("Previous page flagged without a cursor token; link suppressed");
            }
            display
        }
    };

    print_display(&display, format);
    Ok(())
}

fn print_display(display: &PaginationDisplay, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_json(display);
        return;
    }

    output::print_kv("Mode", &display.mode.to_string());
    output::print_kv("Page size", &display.page_size.to_string());
    if display.total_pages > 0 || display.total_rows > 0 {
        output::print_kv(
            "Showing",
            &format!(
                "{} to {} of {}",
                display.start_row, display.end_row, display.total_rows
            ),
        );
        output::print_kv(
            "Page",
            &format!("{} of {}", display.current_page, display.total_pages),
        );
    }
    output::print_kv("Prev", display.prev_url_str());
    output::print_kv("Next", display.next_url_str());

    if !display.page_buttons.is_empty() {
        let rows: Vec<ButtonRow> = display.page_buttons.iter().map(ButtonRow::from).collect();
        output::print_list(&rows, format);
    }
}
