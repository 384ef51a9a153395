//! Locating each segment's body within the concatenated page lines.
//!
//! The table of contents gives us segment headings, and the body repeats each heading on its own
//! line right before that segment's table. Boundaries are derived in stages, each a pure function
//! over the output of the previous one:
//!
//! ```text
//! lines -> candidate_positions -> provisional_spans -> trimmed_spans -> spans_by_segment
//! ```
//!
//! A heading may occur more than once in the body (running headers, repeated titles). Every
//! occurrence gets its own provisional span, and the last occurrence of a heading decides the
//! final span for that segment.

use crate::segment::SegmentSpan;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lines inspected before a span's end when looking for annex cross-references.
pub const TRAILER_WINDOW: usize = 5;

static ANNEX_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Anexo (IX|IV|V?I{0,3})").expect("valid annex regex"));

#[derive(Clone, Debug, PartialEq, Eq)]
/// A line where a segment heading was found.
pub struct Occurrence {
    /// Heading that matched.
    pub segment: String,
    /// Index of the matching line.
    pub position: usize,
}

/// Strip diacritics and lowercase, so `"Autopeças"` and `"AUTOPECAS"` compare equal.
#[must_use]
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Find every line equal to a segment heading, ignoring case and diacritics.
///
/// Occurrences are ordered by segment (in the order given) and then by line. A match on the very
/// first line is never reported.
#[must_use]
pub fn candidate_positions<S: AsRef<str>>(lines: &[String], segments: &[S]) -> Vec<Occurrence> {
    let folded: Vec<String> = lines.iter().map(|line| fold(line)).collect();

    segments
        .iter()
        .flat_map(|segment| {
            let segment = segment.as_ref();
            let key = fold(segment);
            folded
                .iter()
                .enumerate()
                .filter(move |(position, line)| *position > 0 && **line == key)
                .map(move |(position, _)| Occurrence {
                    segment: segment.to_string(),
                    position,
                })
        })
        .collect()
}

/// Give each occurrence a span running up to the next occurrence in the list.
///
/// The next occurrence is the next one in list order, not in line order, so a segment listed
/// after one that appears later in the body can end up with `end < start`.
#[must_use]
pub fn provisional_spans(occurrences: &[Occurrence], total: usize) -> Vec<SegmentSpan> {
    occurrences
        .iter()
        .enumerate()
        .map(|(i, occurrence)| SegmentSpan {
            segment: occurrence.segment.clone(),
            start: (occurrence.position + 1).min(total),
            end: occurrences.get(i + 1).map_or(total, |next| next.position),
        })
        .collect()
}

/// Count trailing lines of `span` that belong to an annex cross-reference.
///
/// The last [`TRAILER_WINDOW`] lines are walked backward. At each step the lines already walked
/// are joined in document order and tested for an `Anexo <numeral>` reference; every hit adds
/// one line to the count. The line at the current step only joins the test on the next step.
#[must_use]
pub fn trailer_lines(lines: &[String], span: &SegmentSpan) -> usize {
    let body = span.slice(lines);
    let window = &body[body.len().saturating_sub(TRAILER_WINDOW)..];

    (0..window.len())
        .filter(|&walked| {
            let seen = &window[window.len() - walked..];
            ANNEX_REFERENCE.is_match(&seen.join(" "))
        })
        .count()
}

/// Pull each span's end back past trailing annex cross-references.
#[must_use]
pub fn trimmed_spans(lines: &[String], spans: &[SegmentSpan]) -> Vec<SegmentSpan> {
    spans
        .iter()
        .map(|span| SegmentSpan {
            segment: span.segment.clone(),
            start: span.start,
            end: span
                .end
                .saturating_sub(trailer_lines(lines, span))
                .max(span.start),
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Spans keyed by segment heading, in first-insertion order.
pub struct SpanTable {
    spans: Vec<SegmentSpan>,
}

impl SpanTable {
    /// Insert `span`, replacing any span already stored for the same segment.
    ///
    /// A replaced span keeps the position of the first insertion, so iteration order follows the
    /// order in which segments were first seen.
    pub fn upsert(&mut self, span: SegmentSpan) {
        match self.spans.iter_mut().find(|s| s.segment == span.segment) {
            Some(existing) => *existing = span,
            None => self.spans.push(span),
        }
    }

    /// Span stored for `segment`.
    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&SegmentSpan> {
        self.spans.iter().find(|s| s.segment == segment)
    }

    /// Number of segments located.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether no segment was located.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate spans in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SegmentSpan> {
        self.spans.iter()
    }
}

impl<'a> IntoIterator for &'a SpanTable {
    type Item = &'a SegmentSpan;
    type IntoIter = std::slice::Iter<'a, SegmentSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Fold spans into one per segment; a later occurrence overwrites an earlier one entirely.
#[must_use]
pub fn spans_by_segment(spans: Vec<SegmentSpan>) -> SpanTable {
    spans.into_iter().fold(SpanTable::default(), |mut table, span| {
        table.upsert(span);
        table
    })
}

/// Run every locating stage over `lines` for the given segment headings.
#[must_use]
pub fn locate_segments<S: AsRef<str>>(lines: &[String], segments: &[S]) -> SpanTable {
    let occurrences = candidate_positions(lines, segments);
    let provisional = provisional_spans(&occurrences, lines.len());
    let trimmed = trimmed_spans(lines, &provisional);
    spans_by_segment(trimmed)
}

#[cfg(test)]
#[path = "tests/locator.rs"]
mod tests;
