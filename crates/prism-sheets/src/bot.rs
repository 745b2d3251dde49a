//! Shared state for one bot run

use prism_sheets_core::SheetRegistry;
use prism_sheets_csv::CsvReadOptions;
use prism_sheets_render::Template;
use prism_sheets_wiki::{PageEdit, PageWriter, TemplateStore, WikiApi, WriteMode, WriteOutcome};

use crate::error::BotResult;
use crate::fetch::{FetchedSheet, SheetFetcher, SheetSource};

/// Fetcher, wiki and writer used by every page update
pub struct Bot<S: SheetSource, W: WikiApi> {
    fetcher: SheetFetcher<S>,
    wiki: W,
    writer: PageWriter,
    view_url: String,
}

impl<S: SheetSource, W: WikiApi> Bot<S, W> {
    /// Create a bot; `view_url` is the footer link template with a `{gid}` slot
    pub fn new(
        registry: SheetRegistry,
        source: S,
        wiki: W,
        mode: WriteMode,
        view_url: impl Into<String>,
    ) -> BotResult<Self> {
        Ok(Self {
            fetcher: SheetFetcher::new(registry, source)?,
            wiki,
            writer: PageWriter::new(mode),
            view_url: view_url.into(),
        })
    }

    /// The page store
    pub fn wiki(&self) -> &W {
        &self.wiki
    }

    /// The sheet fetcher
    pub fn fetcher(&self) -> &SheetFetcher<S> {
        &self.fetcher
    }

    /// Fetch and parse a sheet
    pub fn fetch(&mut self, name: &str, options: &CsvReadOptions) -> BotResult<FetchedSheet> {
        self.fetcher.fetch(name, options)
    }

    /// Load and parse `Template:bot/<name>`
    pub fn template(&mut self, name: &str) -> BotResult<Template> {
        let text = TemplateStore::new(&mut self.wiki).load(name)?;
        Ok(Template::parse(text)?)
    }

    /// Human-facing URL of a fetched sheet
    pub fn sheet_url(&self, sheet: &FetchedSheet) -> String {
        self.view_url.replace("{gid}", &sheet.gid.to_string())
    }

    /// Write a page body sourced from `sheet`, skipping unchanged pages
    pub fn publish(
        &mut self,
        title: &str,
        body: &str,
        sheet: &FetchedSheet,
        template: Option<&str>,
    ) -> BotResult<WriteOutcome> {
        let sheet_url = self.sheet_url(sheet);
        let edit = PageEdit {
            title,
            body,
            sheet_label: sheet.label,
            sheet_url: &sheet_url,
            template,
        };
        Ok(self.writer.write(&mut self.wiki, &edit)?)
    }
}
