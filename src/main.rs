// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Extract the skill links from the README (missing README = fatal)
// 3. Check every link concurrently, printing progress as checks finish
// 4. Print a summary, optionally delete the lines of invalid links
// 5. Exit with proper code (0 = all valid, 1 = invalid links, 2 = error)
//
// Rust concepts used:
// - async/await: Because we need to make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker;       // src/checker/ - extraction and link checking
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - concurrency settings
mod error;         // src/error.rs - README I/O errors
mod github;        // src/github/ - GitHub URL rewriting
mod readme;        // src/readme/ - rewriting the README
mod report;        // src/report.rs - summary and JSON output

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::RunConfig;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter
const LOG_ENV: &str = "SKILL_LINK_GUARDIAN_LOG";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Missing README, failed rewrite, ... print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr so they never mix with the progress output
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = no invalid links (or no links at all)
//   Ok(1) = invalid links found (even if they were deleted)
//   Err   = fatal error, mapped to exit code 2
async fn run(cli: Cli) -> Result<i32> {
    let config = RunConfig::new(cli.token, Duration::from_secs(cli.timeout), cli.api_base);

    println!("Reading {}...", cli.readme.display());
    let entries = checker::read_link_entries(&cli.readme)?;
    println!("Found {} link(s)", entries.len());
    println!();

    if entries.is_empty() {
        println!("No links found");
        return Ok(0);
    }

    let link_checker = checker::LinkChecker::new(config.token.clone(), config.timeout, config.api_base.clone())?;

    println!("Checking {} link(s)...", entries.len());
    println!("Workers: {}", config.workers);
    println!(
        "GITHUB_TOKEN: {}",
        if config.has_token() { "set" } else { "not set (limit: 60 requests/hour)" }
    );
    println!("{}", "-".repeat(60));

    let results = checker::check_all_links(
        &link_checker,
        entries,
        config.workers,
        config.delay,
        |completed, total, outcome| {
            println!("{}", checker::format_progress(completed, total, outcome));
        },
    )
    .await;

    let valid_count = results.iter().filter(|r| r.is_valid).count();
    let invalid_count = results.len() - valid_count;

    println!();
    println!("{}", "=".repeat(60));
    println!("Done: valid {}, invalid {}", valid_count, invalid_count);

    let mut deleted = 0;
    if cli.delete && invalid_count > 0 {
        println!();
        println!("Deleting invalid links...");
        deleted = readme::delete_invalid_lines(&cli.readme, &results)?;
        println!("Deleted {} line(s)", deleted);
    }

    if cli.json {
        let report = report::Report::new(&results, deleted);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if invalid_count > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}
