//! Async HTTP client wrapping reqwest.
//!
//! Not a browser, just GETs. Handles redirects, a per-request timeout,
//! retry on 5xx, and backoff on 429. Every source fetch is a read-only GET,
//! so retrying is idempotent. Nothing is cached: each verification run
//! fetches every document fresh and discards it after parsing.

use std::time::Duration;

use crate::error::FetchError;

const MAX_RETRIES: u32 = 2;

/// HTTP client shared by the five fetches of a verification run.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new client with a standard Chrome user-agent.
    pub fn new(timeout_ms: u64) -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let timeout = Duration::from_millis(timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client, timeout }
    }

    /// GET `url` and return the body of a 2xx response as text.
    ///
    /// Transient failures (transport errors, 5xx) retry twice with
    /// exponential backoff; 429 honors `Retry-After`. A non-success status
    /// that survives the retries surfaces as [`FetchError::Status`].
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let mut retries = 0u32;

        loop {
            let resp = self.client.get(url).timeout(self.timeout).send().await;

            match resp {
                Ok(r) => {
                    let status = r.status();

                    if status.is_server_error() && retries < MAX_RETRIES {
                        retries += 1;
                        let delay = Duration::from_millis(500 * 2u64.pow(retries - 1));
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    if status.as_u16() == 429 && retries < MAX_RETRIES {
                        retries += 1;
                        let retry_after = r
                            .headers()
                            .get("retry-after")
                            .and_then(|v| v.to_str().ok())
                            .and_then(|s| s.parse::<u64>().ok())
                            .unwrap_or(2);
                        tokio::time::sleep(Duration::from_secs(retry_after.min(10))).await;
                        continue;
                    }

                    if !status.is_success() {
                        return Err(FetchError::Status {
                            url: url.to_string(),
                            status: status.as_u16(),
                        });
                    }

                    return r.text().await.map_err(|source| FetchError::Transport {
                        url: url.to_string(),
                        source,
                    });
                }
                Err(source) => {
                    if retries < MAX_RETRIES {
                        retries += 1;
                        let delay = Duration::from_millis(500 * 2u64.pow(retries - 1));
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(FetchError::Transport {
                        url: url.to_string(),
                        source,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new(10000);
        // Just verify it doesn't panic
        let _ = client;
    }
}
