//! The reading pipeline from page text to parsed segment tables.
//!
//! The first page is read on its own because its table of contents names the segments to look
//! for. Every other selected page is then fetched in parallel, and the first page's fragments are
//! put back in front so its lines take part in locating segment headings too.

use crate::error::Result;
use crate::locator::{locate_segments, SpanTable};
use crate::rows::parse_segment;
use crate::segment::{ParsedSegment, SegmentSummaryEntry};
use crate::source::TextSource;
use crate::summary::parse_segments_summary;
use rayon::prelude::*;

/// The page holding the table of contents.
pub const SUMMARY_PAGE: u32 = 1;

/// Body pages to scan after the summary page.
///
/// Uses `requested` when non-empty and every page of the document otherwise. The summary page is
/// removed since it is always read first, and the rest are sorted and de-duplicated.
#[must_use]
pub fn body_pages(requested: &[u32], page_count: usize) -> Vec<u32> {
    let mut pages: Vec<u32> = if requested.is_empty() {
        let last = u32::try_from(page_count).unwrap_or(u32::MAX);
        (1..=last).collect()
    } else {
        requested.to_vec()
    };
    pages.retain(|&page| page != SUMMARY_PAGE);
    pages.sort_unstable();
    pages.dedup();
    pages
}

/// Table of contents read from the summary page.
///
/// # Errors
///
/// Returns an error if the summary page cannot be fetched.
pub fn read_summary<T: TextSource + ?Sized>(source: &T) -> Result<Vec<SegmentSummaryEntry>> {
    let fragments = source.page_text(SUMMARY_PAGE)?;
    Ok(parse_segments_summary(&fragments))
}

#[derive(Debug)]
/// Everything one run produces before serialization.
pub struct Reading {
    /// Table of contents from the summary page.
    pub summary: Vec<SegmentSummaryEntry>,
    /// Trimmed lines of every scanned page, in page order.
    pub lines: Vec<String>,
    /// Located span of each segment found in the body.
    pub spans: SpanTable,
    /// Parsed rows, one entry per located segment in summary order.
    pub segments: Vec<ParsedSegment>,
}

/// Read the summary, fetch body pages and parse every located segment.
///
/// `requested` restricts which body pages are scanned; the summary page is always included.
///
/// # Errors
///
/// Returns the first page-fetch error; no partial result is produced.
pub fn read<T: TextSource + ?Sized>(source: &T, requested: &[u32]) -> Result<Reading> {
    let first_page = source.page_text(SUMMARY_PAGE)?;
    let summary = parse_segments_summary(&first_page);
    tracing::debug!(segments = summary.len(), "parsed summary");

    let pages = body_pages(requested, source.page_count());
    tracing::debug!(?pages, "fetching body pages");
    let body: Vec<Vec<String>> = pages
        .par_iter()
        .map(|&page| source.page_text(page))
        .collect::<Result<_>>()?;

    let lines: Vec<String> = std::iter::once(first_page)
        .chain(body)
        .flatten()
        .map(|fragment| fragment.trim().to_string())
        .collect();

    let descriptions: Vec<&str> = summary.iter().map(|e| e.description.as_str()).collect();
    let spans = locate_segments(&lines, &descriptions);
    for entry in &summary {
        if spans.get(&entry.description).is_none() {
            tracing::warn!(
                index = %entry.index,
                segment = %entry.description,
                "segment heading not found in body"
            );
        }
    }

    let segments = spans
        .iter()
        .map(|span| {
            let rows = parse_segment(span.slice(&lines));
            tracing::debug!(
                segment = %span.segment,
                start = span.start,
                end = span.end,
                rows = rows.len(),
                "parsed segment"
            );
            rows
        })
        .collect();

    Ok(Reading {
        summary,
        lines,
        spans,
        segments,
    })
}

#[cfg(test)]
#[path = "tests/reader.rs"]
mod tests;
