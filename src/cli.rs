// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
//   github-org-client org <ORG> [--json]
//   github-org-client repos <ORG> [--license <KEY>] [--json]
//
// Plus one global flag, --log-level, used when RUST_LOG isn't set.
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "github-org-client",
    version,
    about = "Query a GitHub organization and list its public repositories",
    long_about = "github-org-client fetches an organization's metadata from the GitHub API \
                  and lists its public repositories, optionally only those under a given license."
)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show an organization's metadata
    ///
    /// Example: github-org-client org google
    Org {
        /// Organization login (e.g., google)
        org: String,

        /// Print the full payload as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// List an organization's public repositories
    ///
    /// Example: github-org-client repos google --license apache-2.0
    Repos {
        /// Organization login (e.g., google)
        org: String,

        /// Only list repositories whose license key matches (e.g., mit, apache-2.0)
        #[arg(long)]
        license: Option<String>,

        /// Print the names as a JSON array instead of one per line
        #[arg(long)]
        json: bool,
    },
}
