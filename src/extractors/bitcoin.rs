//! Genesis block date of Bitcoin, from a pinned `chainparams.cpp` revision.
//!
//! The mainnet genesis block is constructed in source with its Unix
//! timestamp as the first argument. The file is fetched by commit hash, so
//! the call site cannot move; the timestamp converts to a UTC calendar
//! date.

use chrono::DateTime;
use regex::Regex;

use crate::error::{ExtractError, ExtractResult};
use crate::text::yyyymmdd;

/// Call-site pattern; the capture is the genesis timestamp in seconds.
const CALL_PATTERN: &str = r"CreateGenesisBlock\(\s*(\d+)";

/// Extract the genesis block date as a UTC `YYYYMMDD`.
pub fn extract(source: &str) -> ExtractResult<String> {
    let re = Regex::new(CALL_PATTERN).expect("call-site regex is valid");

    let caps = re.captures(source).ok_or(ExtractError::PatternNotFound {
        document: "chainparams source",
        marker: "CreateGenesisBlock(",
    })?;

    let raw = &caps[1];
    let secs: i64 = raw.parse().map_err(|_| ExtractError::DateParse {
        input: raw.to_string(),
        format: "unix seconds",
    })?;

    let stamp = DateTime::from_timestamp(secs, 0).ok_or_else(|| ExtractError::DateParse {
        input: raw.to_string(),
        format: "unix seconds",
    })?;

    Ok(yyyymmdd(stamp.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"
class CMainParams : public CChainParams {
public:
    CMainParams() {
        consensus.hashGenesisBlock = uint256{};
        genesis = CreateGenesisBlock(1231006505, 2083236893, 0x1d00ffff, 1, 50 * COIN);
    }
};
"#;

    #[test]
    fn test_extract_golden_date() {
        assert_eq!(extract(SOURCE).unwrap(), "20090103");
    }

    #[test]
    fn test_whitespace_before_timestamp() {
        let src = "genesis = CreateGenesisBlock(\n        1231006505, 2083236893);";
        assert_eq!(extract(src).unwrap(), "20090103");
    }

    #[test]
    fn test_first_call_site_wins() {
        // Testnet genesis appears later in the real file; the mainnet call
        // comes first and is the one that counts.
        let src = "CreateGenesisBlock(1231006505, 1); CreateGenesisBlock(1296688602, 2);";
        assert_eq!(extract(src).unwrap(), "20090103");
    }

    #[test]
    fn test_missing_call_site() {
        let err = extract("int main() { return 0; }").unwrap_err();
        assert!(matches!(err, ExtractError::PatternNotFound { .. }));
    }

    #[test]
    fn test_out_of_range_timestamp() {
        let src = "CreateGenesisBlock(99999999999999999999999, 1);";
        let err = extract(src).unwrap_err();
        assert!(matches!(err, ExtractError::DateParse { .. }));
    }
}
