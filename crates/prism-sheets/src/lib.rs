//! # prism-sheets
//!
//! Keeps wiki pages in sync with a published spreadsheet.
//!
//! Every run is the same linear sequence, once per page family:
//! fetch a sheet's CSV export, shape its rows, render them through a bot
//! template, and write the page only if its text changed.
//!
//! ## Example
//!
//! ```rust
//! use prism_sheets::prelude::*;
//!
//! let source = MemorySheetSource::new()
//!     .with_sheet(1890320497, "名前,誕生日\n一条シン,1/1\n");
//! let wiki = MemoryWiki::new()
//!     .with_page("Template:bot/プリズムスタァのプロフィール/ブロック", "* {{ 名前 }}")
//!     .with_page("Template:bot/プリズムスタァのプロフィール", "{{ ブロック }}");
//!
//! let mut bot = Bot::new(
//!     SheetRegistry::default(),
//!     source,
//!     wiki,
//!     WriteMode::Live,
//!     "https://example.org/sheet#gid={gid}",
//! )
//! .unwrap();
//!
//! let summary = run(&mut bot, &[PageFamily::Profiles]);
//! assert!(summary.is_success());
//! assert_eq!(summary.written(), 1);
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod fetch;
pub mod pages;
pub mod prelude;
pub mod runner;

pub use bot::Bot;
pub use config::BotConfig;
pub use error::{BotError, BotResult};
pub use fetch::{FetchedSheet, HttpSheetSource, MemorySheetSource, SheetFetcher, SheetSource};
pub use pages::{PageFamily, PageRun};
pub use runner::{run, PageFailure, PageReport, RunSummary};

// Re-export the building blocks
pub use prism_sheets_core::{CellValue, EmptyFill, Row, RowSchema, SheetRegistry, Table};
pub use prism_sheets_csv::{CsvReadOptions, CsvReader};
pub use prism_sheets_render::{parse_table, render_table, Context, Template};
pub use prism_sheets_wiki::{
    MediaWikiClient, MemoryWiki, PageWriter, WikiApi, WikiClientConfig, WriteMode, WriteOutcome,
};
