// src/checker/http.rs
// =============================================================================
// This module checks if one skill link is alive.
//
// Key functionality:
// - Rewrites github.com tree links to the contents API (see src/github)
// - Makes a single HTTP HEAD request (no body download, no retries)
// - Classifies the answer into valid / invalid with a short error note
//
// The classification is the heart of the tool:
//
//   2xx / 3xx            -> valid
//   404                  -> invalid, "Not Found"
//   403                  -> VALID,   "Forbidden (rate limited?)"
//   429                  -> VALID,   "Too Many Requests"
//   any other status     -> invalid, "HTTP <status>"
//   timeout              -> invalid, "Timeout"
//   connection failure   -> invalid, "URL Error: <reason>"
//   anything else        -> invalid, "Error: <description>"
//
// 403 and 429 are what the GitHub API answers when we are throttled. The
// resource most likely exists, and treating it as broken would make
// `--delete` remove perfectly good skills.
//
// Rust concepts:
// - Structs with methods: LinkChecker owns the HTTP client and settings
// - Option<T>: status codes and error notes that may be missing
// - Error source chains: digging out the real reason behind a failure
// =============================================================================

use crate::github;
use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::markdown::LinkEntry;

/// Sent with every request so GitHub can tell who we are
pub const USER_AGENT: &str = "awesome-openclaw-skills-link-checker/1.0";

/// Media type the contents API expects from authenticated callers
const GITHUB_API_ACCEPT: &str = "application/vnd.github.v3+json";

// The raw answer for one probe: what the server said and what we make of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub status_code: Option<u16>,
    pub error: Option<String>,
    pub is_valid: bool,
}

// Represents the result of checking a single skill link
//
// Exactly one CheckOutcome exists per LinkEntry. It carries the entry's
// data along so the report and the rewriter don't need the entries anymore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub url: String,
    pub line_num: usize,
    pub original_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub is_valid: bool,
}

impl CheckOutcome {
    pub fn new(entry: LinkEntry, probe: ProbeResult) -> Self {
        CheckOutcome {
            name: entry.name,
            url: entry.url,
            line_num: entry.line_num,
            original_line: entry.original_line,
            status_code: probe.status_code,
            error: probe.error,
            is_valid: probe.is_valid,
        }
    }

    /// Short explanation for an invalid outcome
    ///
    /// Falls back to "HTTP <status>" when no error note was recorded.
    pub fn error_info(&self) -> String {
        match (&self.error, self.status_code) {
            (Some(error), _) => error.clone(),
            (None, Some(code)) => format!("HTTP {}", code),
            (None, None) => "HTTP None".to_string(),
        }
    }
}

// Checks single links
//
// One LinkChecker is shared by every worker. reqwest::Client is reference
// counted internally, so sharing it also shares the connection pool.
#[derive(Debug, Clone)]
pub struct LinkChecker {
    client: Client,
    token: Option<String>,
    api_base: String,
}

impl LinkChecker {
    // Builds a checker
    //
    // Parameters:
    //   token: optional GitHub token, only sent to the contents API
    //   timeout: per-request timeout (connect + response headers)
    //   api_base: where rewritten links are sent
    pub fn new(token: Option<String>, timeout: Duration, api_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("failed to create HTTP client")?;

        Ok(LinkChecker {
            client,
            token,
            api_base: api_base.into(),
        })
    }

    // Probes one URL and classifies the result
    //
    // Never fails: every problem ends up inside the ProbeResult.
    pub async fn check(&self, url: &str) -> ProbeResult {
        let rewritten = github::contents_api_url(url, &self.api_base);
        let target = rewritten.as_deref().unwrap_or(url);

        let mut request = self.client.head(target);

        // Only the API gets our token; arbitrary hosts never see it
        if rewritten.is_some() {
            if let Some(token) = &self.token {
                request = request
                    .header(AUTHORIZATION, format!("token {}", token))
                    .header(ACCEPT, GITHUB_API_ACCEPT);
            }
        }

        debug!(url, probe_url = %target, "probing link");

        let probe = match request.send().await {
            Ok(response) => classify_status(response.status().as_u16()),
            Err(e) => classify_error(&e),
        };

        if probe.is_valid && probe.error.is_some() {
            warn!(url, status = ?probe.status_code, "rate limited, assuming the link exists");
        }

        probe
    }

    // Checks an extracted entry and wraps the answer into a CheckOutcome
    pub async fn check_entry(&self, entry: LinkEntry) -> CheckOutcome {
        let probe = self.check(&entry.url).await;
        CheckOutcome::new(entry, probe)
    }
}

// Maps an HTTP status code to a ProbeResult
//
// HTTP status codes:
// - 200-399: Success (redirects are already followed by reqwest)
// - 403/429: Rate limiting, the resource presumably exists
// - everything else: broken
pub fn classify_status(status_code: u16) -> ProbeResult {
    if (200..400).contains(&status_code) {
        return ProbeResult {
            status_code: Some(status_code),
            error: None,
            is_valid: true,
        };
    }

    let (error, is_valid) = match status_code {
        404 => ("Not Found".to_string(), false),
        403 => ("Forbidden (rate limited?)".to_string(), true),
        429 => ("Too Many Requests".to_string(), true),
        other => (format!("HTTP {}", other), false),
    };

    ProbeResult {
        status_code: Some(status_code),
        error: Some(error),
        is_valid,
    }
}

// Categorizes errors from reqwest
//
// None of these come with a status code, and all of them are invalid.
fn classify_error(error: &reqwest::Error) -> ProbeResult {
    let message = if error.is_timeout() {
        "Timeout".to_string()
    } else if error.is_connect() {
        format!("URL Error: {}", root_cause(error))
    } else {
        format!("Error: {}", error)
    };

    ProbeResult {
        status_code: None,
        error: Some(message),
        is_valid: false,
    }
}

// Walks the error's source chain down to the innermost cause
//
// reqwest's own message is just "error sending request for url (...)";
// the interesting part ("Connection refused", "dns error: ...") sits deeper.
fn root_cause(error: &(dyn std::error::Error + 'static)) -> String {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}
