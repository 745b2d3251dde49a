//! Bot template store

use crate::api::WikiApi;
use crate::error::{WikiError, WikiResult};

/// Namespace prefix under which the bot's templates live
pub const TEMPLATE_PREFIX: &str = "Template:bot/";

/// Full page title of bot template `name`
pub fn template_title(name: &str) -> String {
    format!("{TEMPLATE_PREFIX}{name}")
}

/// Loads bot templates from the wiki; nothing is cached between calls
pub struct TemplateStore<'a, W: WikiApi + ?Sized> {
    wiki: &'a mut W,
}

impl<'a, W: WikiApi + ?Sized> TemplateStore<'a, W> {
    /// Wrap a page store
    pub fn new(wiki: &'a mut W) -> Self {
        Self { wiki }
    }

    /// Text of `Template:bot/<name>`
    pub fn load(&mut self, name: &str) -> WikiResult<String> {
        let title = template_title(name);
        tracing::debug!("Loading template {title}");
        self.wiki
            .read_page(&title)?
            .ok_or_else(|| WikiError::TemplateNotFound(name.to_string()))
    }
}
