// src/checker/markdown.rs
// =============================================================================
// This module extracts skill entries from the README.
//
// The README is an "awesome list": every skill is one bullet that looks like
//
//   - [skill-name](https://github.com/openclaw/skills/tree/main/skills/...)
//
// We don't need a full Markdown parser for that. We walk the document line by
// line and test each line against one fixed regex. Every matching line becomes
// a LinkEntry that remembers where it came from, so the rewriter can later
// delete exactly that line.
//
// Rust concepts:
// - Iterators: .lines().enumerate() gives us (index, line) pairs
// - Regex: compiled once and shared through a OnceLock
// - Error mapping: io::Error -> our own DocumentError
// =============================================================================

use crate::error::DocumentError;
use regex::Regex;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

/// Bullet items pointing into the openclaw/skills repository.
/// Capture 1 is the display name, capture 2 the URL.
const SKILL_LINK_PATTERN: &str =
    r"-\s+\[([^\]]+)\]\((https://github\.com/openclaw/skills/[^\)]+)\)";

// One skill link found in the README
//
// Entries are never mutated after extraction. `line_num` is 1-indexed, the
// same numbering a text editor shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub name: String,
    pub url: String,
    pub line_num: usize,
    /// The full line without its line terminator
    pub original_line: String,
}

// Compiled on first use and shared afterwards
//
// The pattern is a constant (see test_pattern_compiles), so Regex::new can
// only fail if SKILL_LINK_PATTERN itself is broken, never because of input.
fn skill_link_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(SKILL_LINK_PATTERN).expect("SKILL_LINK_PATTERN is a valid regex"))
}

// Extracts every skill link from README text
//
// Only the first match on each line counts. Lines without a match are
// skipped silently, so headings, prose and other links are simply ignored.
pub fn extract_link_entries(content: &str) -> Vec<LinkEntry> {
    let pattern = skill_link_regex();

    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let caps = pattern.captures(line)?;
            Some(LinkEntry {
                name: caps[1].to_string(),
                url: caps[2].to_string(),
                line_num: index + 1,
                original_line: line.to_string(),
            })
        })
        .collect()
}

// Reads the README at `path` and extracts its skill links
//
// Any failure here is fatal: we never return partial results.
pub fn read_link_entries(path: &Path) -> Result<Vec<LinkEntry>, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DocumentError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DocumentError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(extract_link_entries(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skill_links() {
        let readme = "\
# Awesome OpenClaw Skills

Some intro text with [a link](https://example.com).

## Tools

- [alpha](https://github.com/openclaw/skills/tree/main/skills/alice/alpha/SKILL.md) - does alpha
- [beta](https://github.com/openclaw/skills/tree/main/skills/bob/beta/SKILL.md)
- [gamma](https://github.com/someone-else/skills/tree/main/gamma/SKILL.md)
";
        let entries = extract_link_entries(readme);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].name, "alpha");
        assert_eq!(
            entries[0].url,
            "https://github.com/openclaw/skills/tree/main/skills/alice/alpha/SKILL.md"
        );
        assert_eq!(entries[0].line_num, 7);
        assert_eq!(
            entries[0].original_line,
            "- [alpha](https://github.com/openclaw/skills/tree/main/skills/alice/alpha/SKILL.md) - does alpha"
        );

        assert_eq!(entries[1].name, "beta");
        assert_eq!(entries[1].line_num, 8);
    }

    #[test]
    fn test_only_first_match_per_line() {
        let line = "- [one](https://github.com/openclaw/skills/a) - [two](https://github.com/openclaw/skills/b)";
        let entries = extract_link_entries(line);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "one");
        assert_eq!(entries[0].url, "https://github.com/openclaw/skills/a");
    }

    #[test]
    fn test_nested_bullets_and_crlf() {
        let readme = "intro\r\n  -   [nested](https://github.com/openclaw/skills/x)\r\n";
        let entries = extract_link_entries(readme);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].line_num, 2);
        assert_eq!(
            entries[0].original_line,
            "  -   [nested](https://github.com/openclaw/skills/x)"
        );
    }

    #[test]
    fn test_pattern_compiles() {
        assert!(Regex::new(SKILL_LINK_PATTERN).is_ok());
    }

    #[test]
    fn test_no_matches() {
        assert!(extract_link_entries("").is_empty());
        assert!(extract_link_entries("[no bullet](https://github.com/openclaw/skills/x)").is_empty());
        assert!(extract_link_entries("- [http](http://github.com/openclaw/skills/x)").is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("README.md");
        let err = read_link_entries(&missing).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound { .. }));
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        std::fs::write(&path, "- [a](https://github.com/openclaw/skills/a)\ntext\n").unwrap();

        let entries = read_link_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].line_num, 1);
    }
}
