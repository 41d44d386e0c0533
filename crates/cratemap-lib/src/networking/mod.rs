use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{trace, warn};

mod cache;
pub use cache::FetchCache;

/// Networking errors for registry communication
#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Rate limit exceeded after {retries} retries for {url}")]
    RateLimited { retries: u32, url: String },
}

/// Backoff strategy for 429 responses
///
/// Sequential traversal means a simple doubling wait is enough.
#[derive(Debug, Clone)]
pub struct BackoffConfig {
    /// Initial backoff duration
    pub initial: Duration,
    /// Multiplier applied after each retry
    pub multiplier: u32,
    /// Retries before giving up
    pub max_retries: u32,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            initial: Duration::from_secs(1),
            multiplier: 2,
            max_retries: 3,
        }
    }
}

/// Networking configuration
#[derive(Debug, Clone)]
pub struct NetworkingConfig {
    /// HTTP client timeout in seconds
    pub timeout_seconds: u64,
    /// User agent sent with every request (crates.io requires one)
    pub user_agent: String,
    /// Rate-limit backoff behavior
    pub backoff: BackoffConfig,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("cratemap/", env!("CARGO_PKG_VERSION")).to_string(),
            backoff: BackoffConfig::default(),
        }
    }
}

/// HTTP manager owning the client and the fetch cache
///
/// All registry access goes through [`get_bytes`](Self::get_bytes), so both
/// traversals share one cache and one rate-limit policy.
pub struct NetworkingManager {
    client: Client,
    cache: FetchCache,
    backoff: BackoffConfig,
}

impl NetworkingManager {
    /// Create a networking manager with timeout and user agent applied
    pub fn new(config: NetworkingConfig) -> Result<Self, NetworkingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            client,
            cache: FetchCache::new(),
            backoff: config.backoff,
        })
    }

    /// Fetch a URL, serving repeats from the in-memory cache
    ///
    /// Retries 429 responses per the backoff config; any other non-success
    /// status is returned as an error for the caller to handle.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, NetworkingError> {
        if let Some(hit) = self.cache.get(url).await {
            trace!(url, "fetch cache hit");
            return Ok(hit);
        }

        let mut wait = self.backoff.initial;
        let mut attempt = 0;

        let response = loop {
            let response = self.client.get(url).send().await?;

            if response.status() != StatusCode::TOO_MANY_REQUESTS {
                break response;
            }

            attempt += 1;
            if attempt > self.backoff.max_retries {
                return Err(NetworkingError::RateLimited {
                    retries: self.backoff.max_retries,
                    url: url.to_string(),
                });
            }

            warn!(url, attempt, "rate limited, backing off");
            tokio::time::sleep(wait).await;
            wait *= self.backoff.multiplier;
        };

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkingError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?.to_vec();
        self.cache.put(url.to_string(), bytes.clone()).await;
        trace!(url, len = bytes.len(), "fetched and cached");
        Ok(bytes)
    }

    /// Get HTTP client for manual requests
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Number of cached responses
    pub async fn cached_responses(&self) -> usize {
        self.cache.len().await
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
