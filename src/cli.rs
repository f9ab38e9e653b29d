// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is only one thing to do (check the README), so there are no
// subcommands: just an optional README path and a few flags.
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - Option<T>: arguments that may be absent
// - env = "...": clap falls back to an environment variable
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::github::DEFAULT_API_BASE;

#[derive(Parser, Debug)]
#[command(
    name = "skill-link-guardian",
    version,
    about = "Check the skill links in an awesome-openclaw-skills README",
    long_about = "skill-link-guardian finds every skill link in the README, probes it with a HEAD \
                  request (github.com tree links go through the GitHub contents API) and reports \
                  the dead ones. With --delete, the lines of dead links are removed from the README. \
                  Exits with 1 when any invalid link was found."
)]
pub struct Cli {
    /// Path to the README to check
    #[arg(value_name = "README", default_value = "README.md")]
    pub readme: PathBuf,

    /// Delete the lines of invalid links from the README
    #[arg(long)]
    pub delete: bool,

    /// GitHub token, raises the API limit from 60 to 5000 requests/hour
    ///
    /// With a token the checker also runs 20 workers instead of 5.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Timeout per request in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Base URL of the GitHub API used for tree links
    ///
    /// Never taken from GITHUB_API_URL, which CI runners set on their own.
    #[arg(
        long,
        env = "SKILL_LINK_GUARDIAN_API_BASE",
        default_value = DEFAULT_API_BASE,
        hide = true
    )]
    pub api_base: String,

    /// Print a JSON report after the summary
    #[arg(long)]
    pub json: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
