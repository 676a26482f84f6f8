// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API for one organization.
//
// Submodules:
// - fetch: The JsonFetcher trait and its reqwest-backed implementation
// - client: GithubOrgClient (org payload, repos URL, repo names)
// - license: The has_license predicate used to filter repos
// - nested: access_nested_map, a checked json["a"]["b"] lookup
// =============================================================================

mod client;
mod fetch;
mod license;
mod nested;

pub use client::GithubOrgClient;
