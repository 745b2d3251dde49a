//! Prelude module - common imports for prism-sheets users
//!
//! ```rust
//! use prism_sheets::prelude::*;
//! ```

pub use crate::{
    run,
    Bot,
    BotConfig,
    BotError,
    BotResult,
    // Data types
    CellValue,
    Context,
    CsvReadOptions,
    MediaWikiClient,
    MemorySheetSource,
    MemoryWiki,
    PageFamily,
    Row,
    RunSummary,
    SheetRegistry,
    SheetSource,
    Table,
    Template,
    // Wiki types
    WikiApi,
    WriteMode,
    WriteOutcome,
};
