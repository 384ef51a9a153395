//! Records produced while reading the annex.
//!
//! A segment is a named section of the classification table listed in the table of contents on
//! the first page. Spans locate each segment's body within the concatenated page lines, and
//! table rows are the item/CEST/NCM records parsed out of that body.

use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// Table-of-contents entry read from the first page.
pub struct SegmentSummaryEntry {
    /// Two-digit segment number as printed, e.g. `"01"`.
    pub index: String,
    /// Segment heading, used as the key when locating the body.
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Half-open range of document lines holding one segment's body.
pub struct SegmentSpan {
    /// Segment heading this span belongs to.
    pub segment: String,
    /// First line after the heading.
    pub start: usize,
    /// Line where the next heading begins (or the document ends), minus trailing boilerplate.
    pub end: usize,
}

impl SegmentSpan {
    /// Borrow the lines covered by this span, empty when the bounds fall outside `lines`.
    #[must_use]
    pub fn slice<'a>(&self, lines: &'a [String]) -> &'a [String] {
        let end = self.end.min(lines.len());
        let start = self.start.min(end);
        &lines[start..end]
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// One parsed row of a segment table.
pub struct TableRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Item number within the segment, absent when the row window is too short.
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// CEST code, absent when the row window is too short.
    pub cest: Option<String>,
    /// NCM codes, or a single joined chapter reference.
    pub ncms: Vec<String>,
    /// Free-text product description joined onto one line.
    pub description: String,
    #[serde(skip)]
    /// Lines to advance before the next row window.
    pub lines_consumed: usize,
}

/// Rows of one segment, in document order.
pub type ParsedSegment = Vec<TableRow>;
