//! Table-of-contents parsing for the first page.

use crate::segment::SegmentSummaryEntry;
use once_cell::sync::Lazy;
use regex::Regex;

static SUMMARY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})\.\s+([A-Z].[^\n]+)").expect("valid summary regex"));

/// Extract `NN. Description` entries from the first page, keeping their order.
///
/// Lines that do not start with a two-digit number, a dot, whitespace and a capitalised heading
/// are dropped.
#[must_use]
pub fn parse_segments_summary<S: AsRef<str>>(lines: &[S]) -> Vec<SegmentSummaryEntry> {
    lines
        .iter()
        .filter_map(|line| SUMMARY_LINE.captures(line.as_ref()))
        .map(|caps| SegmentSummaryEntry {
            index: caps[1].to_string(),
            description: caps[2].to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/summary.rs"]
mod tests;
