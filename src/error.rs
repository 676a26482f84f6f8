// src/error.rs
// =============================================================================
// Error types for the GitHub org client.
//
// Two layers:
// - FetchError: anything that goes wrong while turning a URL into JSON
//   (bad URL, network failure, non-2xx status, body that isn't JSON)
// - ClientError: what the org client returns. Fetch failures pass through
//   unchanged; the other variants describe payloads that don't have the
//   shape we need (missing key, wrong type).
//
// Note that license-field anomalies are NOT errors. has_license() resolves
// them to "no match" instead.
// =============================================================================

use thiserror::Error;

/// Errors produced by a JSON fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not valid JSON
    #[error("failed to decode JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors produced by the org client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Fetch failures are surfaced exactly as the fetcher reported them
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A key we looked up was not there (or its parent was not an object)
    #[error("key not found: '{key}'")]
    KeyNotFound { key: String },

    /// A value was present but had the wrong JSON type
    #[error("expected '{key}' to be {expected}")]
    UnexpectedType { key: String, expected: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_is_transparent() {
        let fetch = FetchError::Status {
            url: "https://api.github.com/orgs/google".to_string(),
            status: 404,
        };
        let expected = fetch.to_string();

        let client: ClientError = fetch.into();
        assert_eq!(client.to_string(), expected);
        assert!(matches!(
            client,
            ClientError::Fetch(FetchError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn test_key_not_found_message() {
        let err = ClientError::KeyNotFound {
            key: "repos_url".to_string(),
        };
        assert_eq!(err.to_string(), "key not found: 'repos_url'");
    }
}
