//! Run the full verification pipeline and print the verdict.

use anyhow::Result;
use tracing::info;

use crate::acquisition::HttpClient;
use crate::sources::Sources;
use crate::verify;

/// Run the verification pipeline against the pinned live sources.
///
/// Prints `true` or `false` on stdout; logs go to stderr. A completed
/// verification is a success in either direction; only fetch or parse
/// failures bubble up as errors.
pub async fn run(timeout_ms: u64) -> Result<()> {
    let client = HttpClient::new(timeout_ms);
    let sources = Sources::default();

    info!("fetching five pinned source documents");
    let matched = verify::run(&client, &sources).await?;
    info!(matched, "verification finished");

    println!("{matched}");
    Ok(())
}
