//! # prism-sheets-csv
//!
//! Reads a published sheet's CSV export into a [`prism_sheets_core::Table`].

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::{clean_column_name, CsvReader};
