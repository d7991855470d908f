//! # pyeza-core
//!
//! Core crate of the pyeza UI toolkit. Contains the server-side pagination
//! display engine, table/sidebar/page view models, sort and filter types,
//! configuration schemas, and the unified error system.
//!
//! Nothing here renders markup or performs I/O beyond loading configuration;
//! the view models are handed to whatever template engine the application
//! uses.

pub mod config;
pub mod error;
pub mod pagination;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
