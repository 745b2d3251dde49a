//! # prism-sheets-core
//!
//! Core data structures for the prism-sheets wiki bot.
//!
//! This crate provides the fundamental types used throughout prism-sheets:
//! - [`CellValue`] - A single cell (text, number or empty)
//! - [`Row`] and [`Table`] - Ordered rows fetched from one sheet
//! - [`RowSchema`] - Per-page column aliases, numeric coercion and empty-cell policy
//! - [`SheetRegistry`] - The ordered label → sheet id mapping
//!
//! ## Example
//!
//! ```rust
//! use prism_sheets_core::{CellValue, Row};
//!
//! let mut row = Row::new();
//! row.insert("名前", "一条シン");
//! row.insert("レベル", CellValue::Number(3.0));
//!
//! assert_eq!(row.text("レベル"), "3");
//! ```

pub mod error;
pub mod registry;
pub mod row;
pub mod schema;
pub mod value;

// Re-exports for convenience
pub use error::{Error, Result};
pub use registry::{SheetEntry, SheetRegistry, DEFAULT_SHEETS};
pub use row::{Row, Table};
pub use schema::{EmptyFill, RowSchema};
pub use value::CellValue;
