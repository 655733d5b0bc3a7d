//! ISBN-10 of "The C Programming Language", from the book's Princeton page.

use crate::error::{ExtractError, ExtractResult};
use crate::text::{html_to_text, tokenize, window_after_anchor};

/// Token that anchors the identifier in the flattened page text.
const ANCHOR: &str = "ISBN";

/// The identifier is the single token after the anchor.
const WINDOW: usize = 1;

/// Extract the ISBN-10 with hyphen separators stripped.
///
/// The printed value is trusted as-is; there is no check-digit validation.
pub fn extract(html: &str) -> ExtractResult<String> {
    let text = html_to_text(html);
    let tokens = tokenize(&text);

    let window =
        window_after_anchor(&tokens, ANCHOR, WINDOW).ok_or(ExtractError::PatternNotFound {
            document: "book page",
            marker: ANCHOR,
        })?;

    Ok(window[0].replace('-', ""))
}
