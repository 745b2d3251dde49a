//! # prism-sheets-wiki
//!
//! Everything that talks to the wiki:
//!
//! - [`WikiApi`] - read a page's text, write a page's text
//! - [`MediaWikiClient`] - [`WikiApi`] over the MediaWiki action API
//! - [`MemoryWiki`] - in-memory [`WikiApi`] for tests and offline runs
//! - [`TemplateStore`] - loads `Template:bot/…` pages
//! - [`PageWriter`] - appends the bot footer and writes only when the text changed

mod api;
mod error;
mod mediawiki;
mod memory;
mod templates;
mod writer;

pub use api::WikiApi;
pub use error::{WikiError, WikiResult};
pub use mediawiki::{Credentials, MediaWikiClient, WikiClientConfig};
pub use memory::{MemoryWiki, RecordedWrite};
pub use templates::{template_title, TemplateStore, TEMPLATE_PREFIX};
pub use writer::{footer, PageEdit, PageWriter, WriteMode, WriteOutcome, FOOTER_TEMPLATE};
