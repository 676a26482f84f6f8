// src/github/client.rs
// =============================================================================
// GithubOrgClient: one GitHub organization and the views derived from it.
//
// What it does:
// 1. org()              -> GET https://api.github.com/orgs/{org}
// 2. public_repos_url() -> org()["repos_url"]
// 3. repos_payload()    -> GET public_repos_url()
// 4. public_repos()     -> the "name" of every repo, optionally filtered by license
//
// org() and repos_payload() are memoized per client: the first successful
// fetch is kept and reused. A failed fetch is not kept, so the next call
// tries again.
//
// Rust concepts:
// - Generics: The client is generic over the JsonFetcher it uses
// - OnceCell: Compute a value once, then hand out references to it
// - Default type parameters: GithubOrgClient on its own means the HTTP fetcher
// =============================================================================

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::fetch::{HttpJsonFetcher, JsonFetcher};
use super::license::has_license;
use super::nested::access_nested_map;
use crate::error::{ClientError, FetchError};

/// Template for the organization endpoint. `{org}` is replaced by the org name.
pub const ORG_URL: &str = "https://api.github.com/orgs/{org}";

// Formats ORG_URL for one organization
//
// Example:
//   org_url("google") -> "https://api.github.com/orgs/google"
pub fn org_url(org_name: &str) -> String {
    ORG_URL.replace("{org}", org_name)
}

/// Client for a single GitHub organization.
///
/// The organization name is fixed at construction. Everything else is derived
/// from what the fetcher returns.
#[derive(Debug)]
pub struct GithubOrgClient<F = HttpJsonFetcher> {
    org_name: String,
    fetcher: F,
    org: OnceCell<Value>,
    repos_payload: OnceCell<Value>,
}

impl GithubOrgClient {
    /// Creates a client that talks to the real GitHub API.
    pub fn new(org_name: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self::with_fetcher(org_name, HttpJsonFetcher::new()?))
    }

    /// Checks whether a repo record carries `license_key`.
    ///
    /// Stateless; call it as `GithubOrgClient::has_license(&repo, "mit")`.
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        has_license(repo, license_key)
    }
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    /// Creates a client that fetches through `fetcher`.
    pub fn with_fetcher(org_name: impl Into<String>, fetcher: F) -> Self {
        Self {
            org_name: org_name.into(),
            fetcher,
            org: OnceCell::new(),
            repos_payload: OnceCell::new(),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// The organization payload, exactly as the fetcher returned it.
    pub async fn org(&self) -> Result<&Value, ClientError> {
        self.org
            .get_or_try_init(|| async {
                let url = org_url(&self.org_name);
                debug!(org = %self.org_name, %url, "fetching org payload");
                self.fetcher.get_json(&url).await.map_err(ClientError::from)
            })
            .await
    }

    /// The `repos_url` field of the org payload.
    ///
    /// # Errors
    ///
    /// `ClientError::KeyNotFound` if the payload has no `repos_url`, and
    /// `ClientError::UnexpectedType` if it isn't a string.
    pub async fn public_repos_url(&self) -> Result<String, ClientError> {
        let org = self.org().await?;
        let repos_url = access_nested_map(org, &["repos_url"])?;

        repos_url
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| ClientError::UnexpectedType {
                key: "repos_url".to_string(),
                expected: "a string",
            })
    }

    /// The repository list fetched from [`Self::public_repos_url`].
    pub async fn repos_payload(&self) -> Result<&Value, ClientError> {
        self.repos_payload
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?;
                debug!(org = %self.org_name, %url, "fetching repos payload");
                let payload = self.fetcher.get_json(&url).await?;
                Ok::<Value, ClientError>(payload)
            })
            .await
    }

    /// Names of the organization's public repositories, in payload order.
    ///
    /// With `Some(license)`, only repos whose `license.key` equals it are kept.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>, ClientError> {
        let payload = self.repos_payload().await?;
        let repos = payload
            .as_array()
            .ok_or_else(|| ClientError::UnexpectedType {
                key: "repos_payload".to_string(),
                expected: "an array",
            })?;

        let mut names = Vec::new();
        for repo in repos {
            if let Some(key) = license {
                if !GithubOrgClient::has_license(repo, key) {
                    continue;
                }
            }

            let name = access_nested_map(repo, &["name"])?
                .as_str()
                .ok_or_else(|| ClientError::UnexpectedType {
                    key: "name".to_string(),
                    expected: "a string",
                })?;
            names.push(name.to_string());
        }

        info!(
            org = %self.org_name,
            license = license.unwrap_or("*"),
            count = names.len(),
            "listed public repos"
        );
        Ok(names)
    }
}
