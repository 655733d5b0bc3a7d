//! Error taxonomy for the extraction pipeline.
//!
//! Every extractor signals failure through [`ExtractError`]; there is no
//! sentinel-string channel anywhere. A fetch that fails, a marker that is
//! absent, and a window that does not parse as a date are the only failure
//! classes, and any one of them aborts the whole verification run.

use thiserror::Error;

/// Failure while fetching a source document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status after retries.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Failure inside a single extractor.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document could not be fetched at all.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The anchor token or pattern the extractor is keyed to is absent
    /// from the fetched document.
    #[error("marker {marker:?} not found in {document}")]
    PatternNotFound {
        document: &'static str,
        marker: &'static str,
    },

    /// The captured text does not parse under the expected format.
    #[error("{input:?} does not parse as {format:?}")]
    DateParse { input: String, format: &'static str },
}

/// Result alias used throughout the extraction pipeline.
pub type ExtractResult<T> = Result<T, ExtractError>;
