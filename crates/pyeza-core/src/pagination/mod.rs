//! Server-side pagination display engine.
//!
//! The data layer counts or fetches rows; this module turns that raw state
//! into everything a pagination footer needs: row range, navigation flags,
//! windowed page buttons and pre-built links that keep the active search,
//! sort and filters.
//!
//! ```
//! use std::num::NonZeroU64;
//! use pyeza_core::pagination::{PaginationRequest, QueryState};
//! use pyeza_core::types::SortSpec;
//!
//! let size = NonZeroU64::new(25).unwrap();
//! let display = PaginationRequest::offset("/action/clients/table", size, 2, 120)
//!     .with_query(QueryState::default().with_sort(SortSpec::new("name")))
//!     .build_display();
//!
//! assert_eq!(display.start_row, 26);
//! assert_eq!(
//!     display.next_url.as_deref(),
//!     Some("/action/clients/table?page=3&size=25&sort=name&dir=asc"),
//! );
//! ```

pub mod builder;
pub mod display;
pub mod link;
pub mod query;
pub mod request;
pub mod window;

pub use builder::{PaginationStateBuilder, build, total_pages};
pub use display::{PageButton, PaginationDisplay};
pub use link::{CursorDirection, LinkBuilder};
pub use query::PaginationQuery;
pub use request::{CursorState, PagePosition, PaginationMode, PaginationRequest, QueryState};
