//! Wiki page store interface

use crate::error::WikiResult;

/// Minimal page store: whole-page reads and writes by title
pub trait WikiApi {
    /// Current text of a page, or `None` if the page does not exist
    fn read_page(&mut self, title: &str) -> WikiResult<Option<String>>;

    /// Replace a page's text
    fn write_page(&mut self, title: &str, text: &str, summary: &str) -> WikiResult<()>;
}

impl<T: WikiApi + ?Sized> WikiApi for &mut T {
    fn read_page(&mut self, title: &str) -> WikiResult<Option<String>> {
        (**self).read_page(title)
    }

    fn write_page(&mut self, title: &str, text: &str, summary: &str) -> WikiResult<()> {
        (**self).write_page(title, text, summary)
    }
}
