//! Row tokenizing for a segment's table.
//!
//! Text extraction flattens each table row into a run of lines with a fixed head and a variable
//! tail:
//!
//! ```text
//! 0  (blank)
//! 1  item            e.g. 1.0
//! 2  (blank)
//! 3  CEST            e.g. 01.001.00
//! 4… NCM lines       codes, ranges, blanks or a "Capítulo" reference
//! …  description     free text up to the next item number
//! ```
//!
//! Rows are taken one window at a time. Each window reports how many lines it used so the next
//! window starts one line before the next item, putting that item at offset 1 again.

use crate::segment::{ParsedSegment, TableRow};
use once_cell::sync::Lazy;
use regex::Regex;

/// Lines at the start of every row window before the NCM column: blank, item, blank, CEST.
pub const ROW_HEADER_WIDTH: usize = 4;

const ITEM_OFFSET: usize = 1;
const CEST_OFFSET: usize = 3;

/// Column header that precedes the first row of every segment table.
pub const TABLE_HEADER: &str = "DESCRIÇÃO";

static DECIMAL_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+\.\d+(?:\.\d+)?)|(^\d+$)").expect("valid decimal code regex")
});
static TRAILING_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.$").expect("valid trailing dot regex"));
static RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+,|a \d{2}").expect("valid range regex"));
static CHAPTER_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Capítulos?").expect("valid chapter regex"));
static ENDS_IN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+$").expect("valid trailing digits regex"));
static ROW_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.\d+)+$").expect("valid row marker regex"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Why a line was accepted into the NCM column.
pub enum NcmLine {
    /// Contains a dotted code such as `8708.29` or `3926.90.00`, or is a bare integer.
    DecimalCode,
    /// Ends in a number followed by a dot, a code split across lines.
    TrailingDot,
    /// Part of a list or range, such as `8415.10,` or `a 05`.
    Range,
    /// Empty spacer line inside the column.
    Blank,
    /// A chapter reference such as `Capítulo 22`.
    ChapterReference,
}

/// Classify `line` as part of the NCM column, or `None` when the column has ended.
#[must_use]
pub fn classify_ncm_line(line: &str) -> Option<NcmLine> {
    if DECIMAL_CODE.is_match(line) {
        Some(NcmLine::DecimalCode)
    } else if TRAILING_DOT.is_match(line) {
        Some(NcmLine::TrailingDot)
    } else if RANGE.is_match(line) {
        Some(NcmLine::Range)
    } else if line.is_empty() {
        Some(NcmLine::Blank)
    } else if CHAPTER_START.is_match(line) && ENDS_IN_DIGITS.is_match(line) {
        Some(NcmLine::ChapterReference)
    } else {
        None
    }
}

/// Whether `line` is an item number, which opens the next row.
#[must_use]
pub fn is_row_marker(line: &str) -> bool {
    ROW_MARKER.is_match(line)
}

/// Drop blank entries, and join a chapter reference split across lines into a single entry.
#[must_use]
pub fn normalize_ncms<S: AsRef<str>>(ncms: &[S]) -> Vec<String> {
    let ncms: Vec<&str> = ncms
        .iter()
        .map(AsRef::as_ref)
        .filter(|ncm| !ncm.is_empty())
        .collect();

    match ncms.first() {
        None => Vec::new(),
        Some(first) if CHAPTER_START.is_match(first) => vec![ncms.join(" ")],
        Some(_) => ncms.into_iter().map(str::to_string).collect(),
    }
}

/// Join description lines into one line with single spaces.
#[must_use]
pub fn normalize_description<S: AsRef<str>>(lines: &[S]) -> String {
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    WHITESPACE_RUN.replace_all(&joined, " ").into_owned()
}

/// Read one row from the start of `window`.
///
/// Returns `None` when fewer than two lines remain. A window opening with two blank lines is
/// shifted by one so the item lands on its usual offset.
#[must_use]
pub fn take_row(window: &[String]) -> Option<TableRow> {
    if window.len() < 2 {
        return None;
    }

    let window = if window[0].is_empty() && window[1].is_empty() {
        &window[1..]
    } else {
        window
    };

    let tail = window.get(ROW_HEADER_WIDTH..).unwrap_or_default();
    let ncm_len = tail
        .iter()
        .take_while(|line| classify_ncm_line(line).is_some())
        .count();
    let (ncms, rest) = tail.split_at(ncm_len);
    let description_len = rest.iter().take_while(|line| !is_row_marker(line)).count();
    let description = &rest[..description_len];

    Some(TableRow {
        item: window.get(ITEM_OFFSET).cloned(),
        cest: window.get(CEST_OFFSET).cloned(),
        ncms: normalize_ncms(ncms),
        description: normalize_description(description),
        lines_consumed: ROW_HEADER_WIDTH + ncms.len() + description.len() - 1,
    })
}

/// Parse every row of a segment body.
///
/// Everything up to and including the [`TABLE_HEADER`] line is skipped; a body without that
/// header has no rows.
#[must_use]
pub fn parse_segment(lines: &[String]) -> ParsedSegment {
    let Some(header) = lines
        .iter()
        .position(|line| line.to_uppercase() == TABLE_HEADER)
    else {
        return Vec::new();
    };
    let body = &lines[header + 1..];

    let mut rows = Vec::new();
    let mut offset = 0;
    while let Some(row) = body.get(offset..).and_then(take_row) {
        offset += row.lines_consumed;
        rows.push(row);
    }
    rows
}

#[cfg(test)]
#[path = "tests/rows.rs"]
mod tests;
