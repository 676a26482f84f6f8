// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, written to stderr)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;           // src/cli.rs - command-line parsing
mod error;         // src/error.rs - FetchError / ClientError
mod github;        // src/github/ - the org client and its JSON fetcher

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use github::GithubOrgClient;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Commands::Org { org, json } => handle_org(&org, json).await,
        Commands::Repos { org, license, json } => {
            handle_repos(&org, license.as_deref(), json).await
        }
    }
}

// Installs the tracing subscriber
//
// Logs go to stderr so stdout stays clean for --json output.
fn init_logging(level: &str) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (filter, warning) = log_filter(rust_log.as_deref(), level)?;

    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

// Picks the log filter
//
// A valid RUST_LOG wins. Otherwise `level` applies to this crate only; if
// RUST_LOG was set but didn't parse, the second value says why it was ignored.
fn log_filter(rust_log: Option<&str>, level: &str) -> Result<(EnvFilter, Option<String>)> {
    let mut warning = None;

    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok((filter, None)),
            Err(e) => {
                warning = Some(format!(
                    "ignoring invalid RUST_LOG '{directives}' ({e}), using --log-level {level}"
                ));
            }
        }
    }

    let filter = EnvFilter::try_new(format!("github_org_client={level}"))
        .with_context(|| format!("invalid log level '{level}'"))?;
    Ok((filter, warning))
}

// Handles the 'org' subcommand
async fn handle_org(org: &str, json: bool) -> Result<i32> {
    let client = GithubOrgClient::new(org).context("failed to create HTTP client")?;
    let payload = client
        .org()
        .await
        .with_context(|| format!("could not fetch organization '{}'", client.org_name()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(payload)?);
    } else {
        print_org_summary(payload)?;
    }

    Ok(0)
}

// Handles the 'repos' subcommand
async fn handle_repos(org: &str, license: Option<&str>, json: bool) -> Result<i32> {
    let client = GithubOrgClient::new(org).context("failed to create HTTP client")?;
    let names = client
        .public_repos(license)
        .await
        .with_context(|| format!("could not list repositories for '{}'", client.org_name()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in &names {
            println!("{}", name);
        }
    }

    Ok(0)
}

// The handful of org payload fields shown by `org` without --json
#[derive(Debug, PartialEq, Deserialize)]
struct OrgSummary {
    login: Option<String>,
    id: Option<u64>,
    name: Option<String>,
    repos_url: Option<String>,
}

impl OrgSummary {
    fn from_payload(payload: &Value) -> Result<Self> {
        serde_json::from_value(payload.clone()).context("unexpected organization payload")
    }

    fn rows(&self) -> [(&'static str, String); 4] {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        [
            ("login", show(&self.login)),
            ("id", self.id.map_or_else(|| "-".to_string(), |id| id.to_string())),
            ("name", show(&self.name)),
            ("repos_url", show(&self.repos_url)),
        ]
    }
}

// Prints the summary fields of the org payload as a small table
fn print_org_summary(payload: &Value) -> Result<()> {
    let summary = OrgSummary::from_payload(payload)?;
    for (field, value) in summary.rows() {
        println!("{:<12} {}", field, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_org_summary_rows() {
        let payload = json!({
            "login": "google",
            "id": 1342004,
            "name": "Google",
            "repos_url": "https://api.github.com/orgs/google/repos",
            "public_repos": 2500
        });

        let summary = OrgSummary::from_payload(&payload).unwrap();

        assert_eq!(
            summary.rows(),
            [
                ("login", "google".to_string()),
                ("id", "1342004".to_string()),
                ("name", "Google".to_string()),
                ("repos_url", "https://api.github.com/orgs/google/repos".to_string()),
            ]
        );
    }

    #[test]
    fn test_org_summary_missing_fields() {
        let payload = json!({"login": "abc", "name": null});

        let summary = OrgSummary::from_payload(&payload).unwrap();

        assert_eq!(summary.rows()[0], ("login", "abc".to_string()));
        assert_eq!(summary.rows()[1], ("id", "-".to_string()));
        assert_eq!(summary.rows()[2], ("name", "-".to_string()));
        assert_eq!(summary.rows()[3], ("repos_url", "-".to_string()));
    }

    #[test]
    fn test_org_summary_rejects_non_object() {
        assert!(OrgSummary::from_payload(&json!("google")).is_err());
    }

    #[test]
    fn test_log_filter_uses_valid_rust_log() {
        let (filter, warning) = log_filter(Some("github_org_client=debug"), "warn").unwrap();

        assert!(warning.is_none());
        assert_eq!(filter.to_string(), "github_org_client=debug");
    }

    #[test]
    fn test_log_filter_warns_on_invalid_rust_log() {
        let (filter, warning) = log_filter(Some("github_org_client=loud"), "info").unwrap();

        let warning = warning.expect("invalid RUST_LOG should produce a warning");
        assert!(warning.contains("github_org_client=loud"));
        assert!(warning.contains("--log-level info"));
        assert_eq!(filter.to_string(), "github_org_client=info");
    }

    #[test]
    fn test_log_filter_without_rust_log() {
        let (filter, warning) = log_filter(None, "trace").unwrap();

        assert!(warning.is_none());
        assert_eq!(filter.to_string(), "github_org_client=trace");
    }

    #[test]
    fn test_log_filter_invalid_level() {
        assert!(log_filter(None, "loud").is_err());
    }
}
