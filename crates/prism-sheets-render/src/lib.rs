//! # prism-sheets-render
//!
//! Turns shaped rows into wiki markup.
//!
//! - [`Template`] renders a Jinja bot template with a [`Context`]
//! - [`render_table`] emits a `{| class="wikitable" … |}` table for a column projection
//! - [`parse_table`] reads such a table back into rows

mod error;
mod table;
mod template;

pub use error::{RenderError, RenderResult};
pub use table::{parse_table, render_table, ParsedTable};
pub use template::{Context, Template};
