//! Composition and digest verification.
//!
//! The five tokens join into one identifier with a fixed wrapper and
//! delimiter, and its SHA-256 either equals the expected digest or it does
//! not. No partial-credit signal exists anywhere in this module: a single
//! wrong byte in any token reads the same as a wholly wrong composite.

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::acquisition::HttpClient;
use crate::error::ExtractResult;
use crate::extractors::{bitcoin, isbn, rfc, unicode, voyager};
use crate::sources::{Sources, EXPECTED_DIGEST};

/// The five normalized tokens, in composition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactTokens {
    pub voyager: String,
    pub rfc: String,
    pub emoji: String,
    pub btc: String,
    pub isbn: String,
}

/// Join the tokens into the composite identifier.
///
/// Wrapper, delimiter, order, casing, and zero padding are all load-
/// bearing: a one-byte deviation changes the digest.
pub fn compose(tokens: &FactTokens) -> String {
    format!(
        "FLAG{{{}-{}-{}-{}-{}}}",
        tokens.voyager, tokens.rfc, tokens.emoji, tokens.btc, tokens.isbn
    )
}

/// SHA-256 over the UTF-8 bytes of `composite`, compared against the
/// expected digest as lowercase hex.
pub fn digest_matches(composite: &str) -> bool {
    hex::encode(Sha256::digest(composite.as_bytes())) == EXPECTED_DIGEST
}

/// Fetch all five documents and run every extractor.
///
/// The fetches run concurrently purely as a latency optimization; nothing
/// depends on their ordering. The first failure aborts the run; there is
/// no partial composite and no default substitution for a missing token.
pub async fn collect_facts(client: &HttpClient, sources: &Sources) -> ExtractResult<FactTokens> {
    let (voyager_doc, rfc_doc, unicode_doc, chainparams_doc, cbook_doc) = tokio::try_join!(
        client.get_text(&sources.voyager),
        client.get_text(&sources.rfc),
        client.get_text(&sources.unicode_data),
        client.get_text(&sources.chainparams),
        client.get_text(&sources.cbook),
    )?;

    let tokens = FactTokens {
        voyager: voyager::extract(&voyager_doc)?,
        rfc: rfc::extract(&rfc_doc)?,
        emoji: unicode::extract(&unicode_doc)?,
        btc: bitcoin::extract(&chainparams_doc)?,
        isbn: isbn::extract(&cbook_doc)?,
    };
    debug!(?tokens, "extracted fact tokens");

    Ok(tokens)
}

/// Full pipeline: fetch, extract, compose, verify.
pub async fn run(client: &HttpClient, sources: &Sources) -> ExtractResult<bool> {
    let tokens = collect_facts(client, sources).await?;
    let composite = compose(&tokens);
    Ok(digest_matches(&composite))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden() -> FactTokens {
        FactTokens {
            voyager: "19770905".to_string(),
            rfc: "19900401".to_string(),
            emoji: "1F9E0".to_string(),
            btc: "20090103".to_string(),
            isbn: "0131103628".to_string(),
        }
    }

    #[test]
    fn test_compose_golden_tokens() {
        assert_eq!(
            compose(&golden()),
            "FLAG{19770905-19900401-1F9E0-20090103-0131103628}"
        );
    }

    #[test]
    fn test_compose_is_idempotent() {
        let tokens = golden();
        assert_eq!(compose(&tokens), compose(&tokens));
    }

    #[test]
    fn test_golden_composite_matches_digest() {
        assert!(digest_matches(&compose(&golden())));
    }

    #[test]
    fn test_single_character_perturbation_fails() {
        let mut tokens = golden();
        tokens.voyager = "19770906".to_string();
        assert!(!digest_matches(&compose(&tokens)));
    }

    #[test]
    fn test_lowercase_hex_token_fails() {
        let mut tokens = golden();
        tokens.emoji = "1f9e0".to_string();
        assert!(!digest_matches(&compose(&tokens)));
    }

    #[test]
    fn test_wrong_delimiter_fails() {
        let composite = "FLAG{19770905_19900401_1F9E0_20090103_0131103628}";
        assert!(!digest_matches(composite));
    }

    #[test]
    fn test_empty_composite_fails() {
        assert!(!digest_matches(""));
    }
}
