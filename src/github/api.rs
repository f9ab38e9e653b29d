// src/github/api.rs
// =============================================================================
// This module turns github.com "tree" links into contents API requests.
//
// Why not check the github.com page directly?
// - github.com serves HTML pages and happily redirects around
// - The contents API gives a clean 200 / 404 for a single file
// - With a token, the API allows 5000 requests/hour instead of 60
//
// Example:
//   https://github.com/openclaw/skills/tree/main/skills/x/SKILL.md
//   becomes
//   https://api.github.com/repos/openclaw/skills/contents/skills/x/SKILL.md?ref=main
//
// Rust concepts:
// - Option<T>: "this URL might not be rewritable"
// - Slices: path segments borrowed from the parsed URL
// =============================================================================

use url::Url;

/// Only links on exactly this host are rewritten
pub const GITHUB_HOST: &str = "github.com";

/// Where the contents API lives for github.com
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

// Rewrites a github.com tree URL to the contents API
//
// Parameters:
//   url: the link as written in the README
//   api_base: API root, normally DEFAULT_API_BASE (tests point it at a mock)
//
// Returns: Some(api_url) when the URL has the shape
//   /<owner>/<repo>/tree/<branch>/<file-path...>
// and None for everything else (other hosts, blob links, repo roots, ...).
pub fn contents_api_url(url: &str, api_base: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;

    if parsed.host_str() != Some(GITHUB_HOST) {
        return None;
    }

    // "/o/r/tree/main/a/b" splits into ["", "o", "r", "tree", "main", "a", "b"]
    let parts: Vec<&str> = parsed.path().split('/').collect();
    if parts.len() < 6 || parts[3] != "tree" {
        return None;
    }

    let owner = parts[1];
    let repo = parts[2];
    let branch = parts[4];
    let file_path = parts[5..].join("/");

    Some(format!(
        "{}/repos/{}/{}/contents/{}?ref={}",
        api_base.trim_end_matches('/'),
        owner,
        repo,
        file_path,
        branch
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_tree_url() {
        let api = contents_api_url(
            "https://github.com/o/r/tree/main/path/to/FILE.md",
            DEFAULT_API_BASE,
        );
        assert_eq!(
            api.as_deref(),
            Some("https://api.github.com/repos/o/r/contents/path/to/FILE.md?ref=main")
        );
    }

    #[test]
    fn test_rewrite_skill_url() {
        let api = contents_api_url(
            "https://github.com/openclaw/skills/tree/main/skills/alice/alpha/SKILL.md",
            DEFAULT_API_BASE,
        );
        assert_eq!(
            api.as_deref(),
            Some("https://api.github.com/repos/openclaw/skills/contents/skills/alice/alpha/SKILL.md?ref=main")
        );
    }

    #[test]
    fn test_custom_api_base() {
        let api = contents_api_url("https://github.com/o/r/tree/dev/a.md", "http://127.0.0.1:9999/");
        assert_eq!(
            api.as_deref(),
            Some("http://127.0.0.1:9999/repos/o/r/contents/a.md?ref=dev")
        );
    }

    #[test]
    fn test_non_tree_urls_are_left_alone() {
        // blob instead of tree
        assert!(contents_api_url("https://github.com/o/r/blob/main/a.md", DEFAULT_API_BASE).is_none());
        // too short: no file path
        assert!(contents_api_url("https://github.com/o/r/tree/main", DEFAULT_API_BASE).is_none());
        // repository root
        assert!(contents_api_url("https://github.com/o/r", DEFAULT_API_BASE).is_none());
        // other hosts, even with the same shape
        assert!(contents_api_url("https://gitlab.com/o/r/tree/main/a.md", DEFAULT_API_BASE).is_none());
        assert!(contents_api_url("https://www.github.com/o/r/tree/main/a.md", DEFAULT_API_BASE).is_none());
        // not a URL at all
        assert!(contents_api_url("not a url", DEFAULT_API_BASE).is_none());
    }
}
