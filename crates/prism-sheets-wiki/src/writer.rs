//! Idempotent page writer

use crate::api::WikiApi;
use crate::error::WikiResult;
use crate::templates::template_title;

/// Wiki template that marks a page as bot-maintained
pub const FOOTER_TEMPLATE: &str = "bot/編集の注意";

/// Footer appended to every page the bot writes
pub fn footer(sheet_url: &str, template: Option<&str>) -> String {
    match template {
        Some(name) => format!(
            "\n\n{{{{{FOOTER_TEMPLATE}|シート={sheet_url}|テンプレート={}}}}}",
            template_title(name)
        ),
        None => format!("\n\n{{{{{FOOTER_TEMPLATE}|シート={sheet_url}}}}}"),
    }
}

/// Whether writes reach the wiki
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Compare and write
    #[default]
    Live,
    /// Never touch the wiki; hand the final text back instead
    Preview,
}

/// What happened to one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The page text changed and was saved
    Written,
    /// The page already had exactly this text
    Skipped,
    /// Preview mode: the text that would have been saved
    Previewed(String),
}

/// One candidate page
#[derive(Debug, Clone, Copy)]
pub struct PageEdit<'a> {
    /// Page title
    pub title: &'a str,
    /// Rendered body, without footer
    pub body: &'a str,
    /// Label of the sheet the data came from
    pub sheet_label: &'a str,
    /// Human-facing URL of that sheet
    pub sheet_url: &'a str,
    /// Bot template the body was rendered from
    pub template: Option<&'a str>,
}

impl PageEdit<'_> {
    /// Body plus footer, exactly as it would be saved
    pub fn final_text(&self) -> String {
        let mut text = String::with_capacity(self.body.len() + 128);
        text.push_str(self.body);
        text.push_str(&footer(self.sheet_url, self.template));
        text
    }

    /// Edit summary
    pub fn summary(&self) -> String {
        format!("bot: {} から更新", self.sheet_label)
    }
}

/// Writes pages only when their text changes
#[derive(Debug, Clone, Copy, Default)]
pub struct PageWriter {
    mode: WriteMode,
}

impl PageWriter {
    /// Create a writer
    pub fn new(mode: WriteMode) -> Self {
        Self { mode }
    }

    /// Save `edit` unless the page already holds the same text
    pub fn write<W: WikiApi + ?Sized>(
        &self,
        wiki: &mut W,
        edit: &PageEdit<'_>,
    ) -> WikiResult<WriteOutcome> {
        let text = edit.final_text();

        if self.mode == WriteMode::Preview {
            tracing::info!("[preview] {}", edit.title);
            return Ok(WriteOutcome::Previewed(text));
        }

        if wiki.read_page(edit.title)?.as_deref() == Some(text.as_str()) {
            tracing::info!("Unchanged: {}", edit.title);
            return Ok(WriteOutcome::Skipped);
        }

        wiki.write_page(edit.title, &text, &edit.summary())?;
        tracing::info!("Updated: {}", edit.title);
        Ok(WriteOutcome::Written)
    }
}
