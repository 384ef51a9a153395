//! PDF text source backed by lopdf.
//!
//! lopdf ends a fragment at every text object, so splitting a page's extracted text on newlines
//! gives back the fragments in content-stream order.

use crate::error::{Error, Result};
use crate::source::{check_page, TextSource};
use lopdf::Document;
use std::path::Path;

/// A PDF loaded fully into memory.
pub struct PdfDocument {
    document: Document,
    page_count: usize,
}

impl PdfDocument {
    /// Parse a PDF from its bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Document`] if the bytes are not a loadable PDF.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let document = Document::load_mem(bytes).map_err(|e| Error::Document(e.to_string()))?;
        let page_count = document.get_pages().len();
        tracing::debug!(page_count, "loaded PDF");
        Ok(Self {
            document,
            page_count,
        })
    }

    /// Read and parse the PDF at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Document`] if it is not a
    /// loadable PDF.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

impl TextSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_text(&self, page: u32) -> Result<Vec<String>> {
        check_page(page, self.page_count)?;
        let text = self
            .document
            .extract_text(&[page])
            .map_err(|e| Error::PageText {
                page,
                message: e.to_string(),
            })?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
#[path = "../tests/pdf.rs"]
mod tests;
