//! Sheet fetcher
//!
//! Resolves a sheet name through the [`SheetRegistry`], downloads the tab's
//! CSV export and reads it into a [`Table`].

use std::collections::HashMap;
use std::time::Duration;

use prism_sheets_core::{SheetRegistry, Table};
use prism_sheets_csv::{CsvReadOptions, CsvReader};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::error::{BotError, BotResult};

/// Source of raw CSV text for a sheet id
pub trait SheetSource {
    /// Download the CSV export of sheet `gid`
    fn fetch_csv(&mut self, gid: u64) -> BotResult<String>;
}

/// Downloads sheet exports over HTTP
pub struct HttpSheetSource {
    client: Client,
    export_url: String,
}

impl HttpSheetSource {
    /// `export_url` must contain a `{gid}` slot
    pub fn new(export_url: impl Into<String>, user_agent: &str, timeout: Duration) -> BotResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| BotError::Config(format!("failed to build sheet HTTP client: {e}")))?;
        Ok(Self {
            client,
            export_url: export_url.into(),
        })
    }
}

impl SheetSource for HttpSheetSource {
    fn fetch_csv(&mut self, gid: u64) -> BotResult<String> {
        let url = self.export_url.replace("{gid}", &gid.to_string());
        let fail = |reason: String| BotError::Fetch {
            sheet: gid.to_string(),
            reason,
        };

        let response = self.client.get(&url).send().map_err(|e| fail(e.to_string()))?;
        let status = response.status();
        let bytes = response.bytes().map_err(|e| fail(e.to_string()))?;
        decode_export(status, &url, &bytes).map_err(fail)
    }
}

/// CSV text of an export response, or why there is none
fn decode_export(status: StatusCode, url: &str, body: &[u8]) -> Result<String, String> {
    if !status.is_success() {
        return Err(format!("HTTP {status} from {url}"));
    }
    std::str::from_utf8(body)
        .map(str::to_string)
        .map_err(|e| format!("invalid UTF-8: {e}"))
}

/// Canned CSV per sheet id; counts downloads
#[derive(Debug, Default)]
pub struct MemorySheetSource {
    sheets: HashMap<u64, String>,
    fetches: HashMap<u64, usize>,
}

impl MemorySheetSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register CSV text for `gid`
    pub fn with_sheet(mut self, gid: u64, csv: impl Into<String>) -> Self {
        self.sheets.insert(gid, csv.into());
        self
    }

    /// How many times `gid` was fetched
    pub fn fetch_count(&self, gid: u64) -> usize {
        self.fetches.get(&gid).copied().unwrap_or(0)
    }
}

impl SheetSource for MemorySheetSource {
    fn fetch_csv(&mut self, gid: u64) -> BotResult<String> {
        *self.fetches.entry(gid).or_default() += 1;
        self.sheets.get(&gid).cloned().ok_or_else(|| BotError::Fetch {
            sheet: gid.to_string(),
            reason: "HTTP 404".into(),
        })
    }
}

/// A table together with the sheet it came from
#[derive(Debug, Clone)]
pub struct FetchedSheet {
    /// Registry label
    pub label: &'static str,
    /// Sheet id
    pub gid: u64,
    /// Parsed rows
    pub table: Table,
}

impl FetchedSheet {
    /// Error for a column this sheet lacks
    pub fn missing_column(&self, column: &str) -> BotError {
        BotError::MissingColumn {
            sheet: self.label.to_string(),
            column: column.to_string(),
        }
    }

    /// Fail unless every column in `columns` exists
    pub fn require_columns(&self, columns: &[&str]) -> BotResult<()> {
        match columns.iter().find(|c| !self.table.has_column(c)) {
            Some(column) => Err(self.missing_column(column)),
            None => Ok(()),
        }
    }
}

/// Registry lookup plus download plus CSV parsing
pub struct SheetFetcher<S: SheetSource> {
    registry: SheetRegistry,
    source: S,
}

impl<S: SheetSource> SheetFetcher<S> {
    /// Create a fetcher over a validated registry
    pub fn new(registry: SheetRegistry, source: S) -> BotResult<Self> {
        registry.validate()?;
        Ok(Self { registry, source })
    }

    /// The registry in use
    pub fn registry(&self) -> &SheetRegistry {
        &self.registry
    }

    /// The underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch sheet `name` (any substring of its label)
    pub fn fetch(&mut self, name: &str, options: &CsvReadOptions) -> BotResult<FetchedSheet> {
        let entry = *self.registry.resolve(name)?;
        tracing::debug!("Fetching sheet {} (gid={})", entry.label, entry.gid);

        let text = self.source.fetch_csv(entry.gid).map_err(|e| match e {
            BotError::Fetch { reason, .. } => BotError::Fetch {
                sheet: entry.label.to_string(),
                reason,
            },
            other => other,
        })?;
        let table = CsvReader::read_str(&text, options).map_err(|source| BotError::Csv {
            sheet: entry.label.to_string(),
            source,
        })?;

        tracing::info!("Fetched {} rows from {}", table.len(), entry.label);
        Ok(FetchedSheet {
            label: entry.label,
            gid: entry.gid,
            table,
        })
    }
}
