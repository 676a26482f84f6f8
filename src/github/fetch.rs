// src/github/fetch.rs
// =============================================================================
// This module turns a URL into parsed JSON.
//
// Strategy:
// - The org client never talks to reqwest directly. It goes through the
//   JsonFetcher trait, so tests can hand it a fake fetcher.
// - HttpJsonFetcher is the real implementation: one GET request, check the
//   status, decode the body with serde_json.
// - No retries, no pagination, no auth. A failure is returned as-is.
//
// Rust concepts:
// - Traits: An interface the client is generic over
// - async-trait: Async functions inside a trait
// - thiserror: Typed error enums (see src/error.rs)
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::FetchError;

// Sent with every request; the GitHub API rejects requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

/// Anything that can fetch a URL and hand back parsed JSON.
///
/// The org client depends on this trait instead of an HTTP library, which is
/// what lets the tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Fetches `url` and returns the decoded JSON body
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// A [`JsonFetcher`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpJsonFetcher {
    client: Client,
}

impl HttpJsonFetcher {
    // Builds the fetcher with a 10 second per-request timeout
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl JsonFetcher for HttpJsonFetcher {
    // Fetches JSON from a URL
    //
    // Parameters:
    //   url: absolute URL to GET
    //
    // Returns: the parsed JSON value, or a FetchError describing which step failed
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        // Validate before we hit the network so a bad repos_url gets a clear error
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        debug!(url = %parsed, "GET");
        let response = self
            .client
            .get(parsed)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "non-success response");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The client is generic over `F: JsonFetcher`
//    - Production code uses HttpJsonFetcher
//    - Tests use MockJsonFetcher (generated by mockall) or a small stub,
//      so no test ever needs the network
//
// 2. Why read the body as text and then parse?
//    - reqwest's .json() folds decode errors into reqwest::Error
//    - Parsing ourselves keeps "bad JSON" as its own FetchError variant
//
// 3. Why `Send + Sync` on the trait?
//    - The client may be held across .await points on a multi-threaded
//      tokio runtime, so the fetcher inside it must be shareable
// -----------------------------------------------------------------------------
