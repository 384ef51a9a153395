//! Text sources that yield the fragments printed on each page.
//!
//! This module defines the `TextSource` trait which abstracts over where page text comes from,
//! so the reader never touches PDF internals. A source only needs to report how many pages it has
//! and hand back the ordered text fragments of one page at a time.

pub mod pdf;

use crate::error::{Error, Result};

/// Page-addressed access to a document's text.
///
/// Pages are numbered from 1. Implementations must be `Sync` because pages are fetched in
/// parallel.
pub trait TextSource: Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Ordered text fragments printed on `page`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PageOutOfRange`] for page 0 or pages past the end, and a source-specific
    /// error when the page cannot be decoded.
    fn page_text(&self, page: u32) -> Result<Vec<String>>;
}

/// Reject pages outside `1..=count`.
///
/// # Errors
///
/// Returns [`Error::PageOutOfRange`] when `page` is 0 or greater than `count`.
pub fn check_page(page: u32, count: usize) -> Result<()> {
    let in_range = page >= 1 && usize::try_from(page).is_ok_and(|p| p <= count);
    if in_range {
        Ok(())
    } else {
        Err(Error::PageOutOfRange { page, count })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Text already split into pages, such as `pdftotext` output or a test fixture.
pub struct PagedText {
    pages: Vec<Vec<String>>,
}

impl PagedText {
    /// Wrap pre-split pages of fragments.
    #[must_use]
    pub fn new(pages: Vec<Vec<String>>) -> Self {
        Self { pages }
    }

    /// Split plain text into pages on form feeds and into fragments on newlines.
    ///
    /// A trailing form feed does not open an empty final page.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_suffix('\u{c}').unwrap_or(text);
        let pages = text
            .split('\u{c}')
            .map(|page| page.lines().map(str::to_string).collect())
            .collect();
        Self { pages }
    }
}

impl TextSource for PagedText {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page: u32) -> Result<Vec<String>> {
        usize::try_from(page)
            .ok()
            .and_then(|p| self.pages.get(p.checked_sub(1)?))
            .cloned()
            .ok_or(Error::PageOutOfRange {
                page,
                count: self.pages.len(),
            })
    }
}

#[cfg(test)]
#[path = "tests/source.rs"]
mod tests;
