//! Publication date of RFC 1149, from the datatracker HTML rendering.

use regex::Regex;

use crate::error::{ExtractError, ExtractResult};
use crate::text::{html_to_text, parse_date, yyyymmdd};

/// `<1-2 digit day> <full month name> <4-digit year>`, e.g. `1 April 1990`.
const DATE_PATTERN: &str = r"\d{1,2}\s+(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}";

const DATE_FORMAT: &str = "%d %B %Y";

/// Extract the RFC publication date as `YYYYMMDD`.
///
/// The first match anywhere in the page wins. The document is assumed to
/// carry its publication date ahead of any other day-month-year string;
/// that scope is part of the extraction policy and stays un-scoped.
pub fn extract(html: &str) -> ExtractResult<String> {
    let text = html_to_text(html);
    let re = Regex::new(DATE_PATTERN).expect("date regex is valid");

    let matched = re.find(&text).ok_or(ExtractError::PatternNotFound {
        document: "rfc document",
        marker: "day-month-year date",
    })?;

    let date = parse_date(matched.as_str(), DATE_FORMAT)?;
    Ok(yyyymmdd(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
    <html><body><pre>
    Network Working Group                                       D. Waitzman
    Request for Comments: 1149                                      BBN STC
                                                               1 April 1990

       A Standard for the Transmission of IP Datagrams on Avian Carriers
    </pre></body></html>
    "#;

    #[test]
    fn test_extract_golden_date() {
        assert_eq!(extract(PAGE).unwrap(), "19900401");
    }

    #[test]
    fn test_first_match_wins() {
        let html = "<html><body><p>Updated 12 June 2024. Published 1 April 1990.</p></body></html>";
        // First match in document order, not the "right" one semantically.
        assert_eq!(extract(html).unwrap(), "20240612");
    }

    #[test]
    fn test_abbreviated_month_does_not_match() {
        let html = "<html><body><p>1 Apr 1990</p></body></html>";
        let err = extract(html).unwrap_err();
        assert!(matches!(err, ExtractError::PatternNotFound { .. }));
    }

    #[test]
    fn test_no_date_anywhere() {
        let html = "<html><body><p>No dates here.</p></body></html>";
        let err = extract(html).unwrap_err();
        assert!(matches!(err, ExtractError::PatternNotFound { .. }));
    }

    #[test]
    fn test_two_digit_day_zero_pads_month() {
        let html = "<html><body><p>28 February 2003</p></body></html>";
        assert_eq!(extract(html).unwrap(), "20030228");
    }
}
