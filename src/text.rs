//! Shared text helpers: HTML flattening, tokenization, anchor-window
//! scanning, and date normalization.
//!
//! The position-based extractors all work on the same flattened view of a
//! document: every text node joined with single spaces, whitespace
//! collapsed. The anchor offsets they depend on were measured against this
//! exact flattening, so it must not change shape.

use chrono::NaiveDate;
use scraper::Html;

use crate::error::ExtractError;

/// Collect the visible text of an HTML document, joined with single spaces
/// and whitespace-collapsed.
///
/// Script and style text is not excluded from the flattening.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace-tokenize a flattened document.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Find the first token equal to `anchor` (exact, case-sensitive) and
/// return the `len` tokens immediately following it.
///
/// Returns `None` when the anchor is absent or the document ends before
/// the window is full. Anchors and window sizes are constants at the call
/// sites; changing either changes which bytes reach the digest.
pub fn window_after_anchor<'t>(
    tokens: &'t [&'t str],
    anchor: &str,
    len: usize,
) -> Option<&'t [&'t str]> {
    let at = tokens.iter().position(|t| *t == anchor)?;
    tokens.get(at + 1..at + 1 + len)
}

/// Format a date as 8 ASCII digits, zero-padded.
pub fn yyyymmdd(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Parse `input` under a chrono `format`, mapping failure to
/// [`ExtractError::DateParse`].
pub fn parse_date(input: &str, format: &'static str) -> Result<NaiveDate, ExtractError> {
    NaiveDate::parse_from_str(input, format).map_err(|_| ExtractError::DateParse {
        input: input.to_string(),
        format,
    })
}
