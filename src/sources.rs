//! Pinned source locations and verification constants.
//!
//! Each URL here is configuration, not logic: every extractor is keyed to
//! the current wording of one exact document. The chainparams source is
//! fetched by immutable commit hash rather than a branch name, so the bytes
//! it serves can never drift underneath the expected digest.

/// Voyager 1 mission page (launch date).
pub const VOYAGER_URL: &str = "https://science.nasa.gov/mission/voyager/voyager-1/";

/// RFC 1149 as rendered by the IETF datatracker (publication date).
pub const RFC_URL: &str = "https://datatracker.ietf.org/doc/html/rfc1149";

/// Unicode character database, one record per line (BRAIN codepoint).
pub const UNICODE_DATA_URL: &str = "https://www.unicode.org/Public/UCD/latest/ucd/UnicodeData.txt";

/// Bitcoin Core `chainparams.cpp`, pinned to an exact revision.
pub const CHAINPARAMS_URL: &str = "https://raw.githubusercontent.com/bitcoin/bitcoin/9a29b2d331eed5b4cbd6922f63e397b68ff12447/src/kernel/chainparams.cpp";

/// Kernighan & Ritchie's book page at Princeton (ISBN-10).
pub const CBOOK_URL: &str = "https://www.cs.princeton.edu/~bwk/cbook.html";

/// SHA-256 of the correctly composed identifier, lowercase hex.
pub const EXPECTED_DIGEST: &str =
    "d311f26ea1a995af669a62758ad5e0ce2583331059fbfc5c04cc84b2d41f4aed";

/// The five source documents consumed by one verification run.
///
/// `Default` points at the live pinned sources; the test suite substitutes
/// a local mock server here without touching any extraction logic.
#[derive(Debug, Clone)]
pub struct Sources {
    pub voyager: String,
    pub rfc: String,
    pub unicode_data: String,
    pub chainparams: String,
    pub cbook: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            voyager: VOYAGER_URL.to_string(),
            rfc: RFC_URL.to_string(),
            unicode_data: UNICODE_DATA_URL.to_string(),
            chainparams: CHAINPARAMS_URL.to_string(),
            cbook: CBOOK_URL.to_string(),
        }
    }
}
