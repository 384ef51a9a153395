//! Error type shared by every stage of the reader.
//!
//! Only document loading and page fetching can fail. A segment without a table header is an
//! empty result, and a heuristic misfire during row parsing shows up as wrong values rather than
//! as an error.

use thiserror::Error;

#[derive(Error, Debug)]
/// Fatal faults that abort a run before any output is written.
pub enum Error {
    #[error("failed to read document: {0}")]
    /// The document file could not be read from disk.
    Io(#[from] std::io::Error),

    #[error("failed to load PDF: {0}")]
    /// The document bytes are not a loadable PDF.
    Document(String),

    #[error("page {page} is out of range (document has {count} pages)")]
    /// A requested page does not exist in the document.
    PageOutOfRange {
        /// Requested page number (1-indexed).
        page: u32,
        /// Number of pages in the document.
        count: usize,
    },

    #[error("failed to extract text from page {page}: {message}")]
    /// The page exists but its content stream could not be decoded.
    PageText {
        /// Page number (1-indexed) whose text extraction failed.
        page: u32,
        /// Message reported by the PDF backend.
        message: String,
    },

    #[error("invalid anexo.toml: {0}")]
    /// The configuration file exists but does not parse.
    Config(String),

    #[error("failed to serialize output: {0}")]
    /// The parsed tables could not be serialized.
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
