//! Codepoint of the BRAIN character, from the Unicode character database.
//!
//! `UnicodeData.txt` is line-oriented: semicolon-separated fields, the
//! first being the hexadecimal codepoint and the second the uppercase
//! character name. The scan does not split fields; it takes the first line
//! containing the name substring and reads the leading hex run, trusting
//! the database to list the plain character before any variant entries.

use regex::Regex;

use crate::error::{ExtractError, ExtractResult};

/// Substring that selects the record, matched against the whole line.
const NAME_MARKER: &str = "BRAIN";

/// Extract the hexadecimal codepoint, uppercase, without a `U+` prefix.
pub fn extract(data: &str) -> ExtractResult<String> {
    let leading_hex = Regex::new(r"^([0-9A-F]+)").expect("codepoint regex is valid");

    for line in data.lines() {
        if !line.contains(NAME_MARKER) {
            continue;
        }
        if let Some(m) = leading_hex.find(line.trim()) {
            return Ok(m.as_str().to_uppercase());
        }
    }

    Err(ExtractError::PatternNotFound {
        document: "unicode character database",
        marker: NAME_MARKER,
    })
}
