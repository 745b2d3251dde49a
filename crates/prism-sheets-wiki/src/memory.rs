//! In-memory page store

use std::collections::{BTreeMap, HashSet};

use crate::api::WikiApi;
use crate::error::{WikiError, WikiResult};

/// A recorded write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub title: String,
    pub text: String,
    pub summary: String,
}

/// [`WikiApi`] backed by a map; used in tests and offline previews
#[derive(Debug, Default)]
pub struct MemoryWiki {
    pages: BTreeMap<String, String>,
    rejected: HashSet<String>,
    writes: Vec<RecordedWrite>,
}

impl MemoryWiki {
    /// Create an empty wiki
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a page
    pub fn with_page<T: Into<String>, S: Into<String>>(mut self, title: T, text: S) -> Self {
        self.pages.insert(title.into(), text.into());
        self
    }

    /// Make every write to `title` fail
    pub fn reject_writes_to<T: Into<String>>(mut self, title: T) -> Self {
        self.rejected.insert(title.into());
        self
    }

    /// Current text of a page
    pub fn page(&self, title: &str) -> Option<&str> {
        self.pages.get(title).map(String::as_str)
    }

    /// Writes performed so far, oldest first
    pub fn writes(&self) -> &[RecordedWrite] {
        &self.writes
    }
}

impl WikiApi for MemoryWiki {
    fn read_page(&mut self, title: &str) -> WikiResult<Option<String>> {
        Ok(self.pages.get(title).cloned())
    }

    fn write_page(&mut self, title: &str, text: &str, summary: &str) -> WikiResult<()> {
        if self.rejected.contains(title) {
            return Err(WikiError::WriteRejected {
                title: title.to_string(),
                reason: "protectedpage".to_string(),
            });
        }
        self.pages.insert(title.to_string(), text.to_string());
        self.writes.push(RecordedWrite {
            title: title.to_string(),
            text: text.to_string(),
            summary: summary.to_string(),
        });
        Ok(())
    }
}
