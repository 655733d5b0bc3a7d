//! Launch date of Voyager 1, from the NASA mission page.

use crate::error::{ExtractError, ExtractResult};
use crate::text::{html_to_text, parse_date, tokenize, window_after_anchor, yyyymmdd};

/// Token that anchors the date in the flattened page text.
const ANCHOR: &str = "launch";

/// The date is the three tokens after the anchor, e.g. `Sept. 5, 1977`.
const WINDOW: usize = 3;

const DATE_FORMAT: &str = "%b %d %Y";

/// Extract the Voyager 1 launch date as `YYYYMMDD`.
pub fn extract(html: &str) -> ExtractResult<String> {
    let text = html_to_text(html);
    let tokens = tokenize(&text);

    let window =
        window_after_anchor(&tokens, ANCHOR, WINDOW).ok_or(ExtractError::PatternNotFound {
            document: "voyager mission page",
            marker: ANCHOR,
        })?;

    // The page abbreviates September as "Sept.", which no strptime-style
    // month name matches; rewrite it before parsing and drop the comma.
    let raw = window.concat().replace("Sept.", "Sep ").replace(',', " ");
    let date = parse_date(raw.trim(), DATE_FORMAT)?;

    Ok(yyyymmdd(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
    <html><body>
        <h1>Voyager 1</h1>
        <p>The spacecraft lifted off aboard a Titan IIIE-Centaur;
        launch Sept. 5, 1977 from Cape Canaveral, Florida.</p>
    </body></html>
    "#;

    #[test]
    fn test_extract_golden_date() {
        assert_eq!(extract(PAGE).unwrap(), "19770905");
    }

    #[test]
    fn test_extract_missing_anchor() {
        let html = "<html><body><p>Liftoff was Sept. 5, 1977.</p></body></html>";
        let err = extract(html).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::PatternNotFound { marker: "launch", .. }
        ));
    }

    #[test]
    fn test_extract_window_not_a_date() {
        let html = "<html><body><p>launch was delayed by weather</p></body></html>";
        let err = extract(html).unwrap_err();
        assert!(matches!(err, ExtractError::DateParse { .. }));
    }

    #[test]
    fn test_extract_anchor_at_end_of_page() {
        let html = "<html><body><p>launch Sept. 5,</p></body></html>";
        let err = extract(html).unwrap_err();
        assert!(matches!(err, ExtractError::PatternNotFound { .. }));
    }
}
