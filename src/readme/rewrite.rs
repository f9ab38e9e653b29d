// src/readme/rewrite.rs
// =============================================================================
// This module removes the lines of invalid links from the README.
//
// Strategy:
// - Collect the line numbers of all invalid outcomes
// - Re-read the README and keep every other line byte-for-byte
// - Write the result to a temp file in the same directory
// - Rename the temp file over the README
//
// The rename is atomic on the same filesystem, so a crash halfway through
// leaves either the old README or the new one, never a truncated file.
//
// Rust concepts:
// - HashSet: O(1) "is this line invalid?" lookups
// - split_inclusive: splitting while keeping the '\n' on each piece
// - NamedTempFile: a temp file we can persist under another name
// =============================================================================

use crate::checker::CheckOutcome;
use crate::error::DocumentError;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

// Deletes the README lines of all invalid outcomes
//
// Returns: the number of removed lines (0 means the file was not touched)
pub fn delete_invalid_lines(
    readme_path: &Path,
    results: &[CheckOutcome],
) -> Result<usize, DocumentError> {
    let invalid_lines: HashSet<usize> = results
        .iter()
        .filter(|r| !r.is_valid)
        .inspect(|r| debug!(line = r.line_num, text = %r.original_line, "removing line"))
        .map(|r| r.line_num)
        .collect();

    if invalid_lines.is_empty() {
        return Ok(0);
    }

    let read_err = |source| DocumentError::Read {
        path: readme_path.to_path_buf(),
        source,
    };
    let write_err = |source| DocumentError::Write {
        path: readme_path.to_path_buf(),
        source,
    };

    // Renaming onto a symlink would replace the link, so write the real file
    let target = std::fs::canonicalize(readme_path).map_err(read_err)?;

    let content = std::fs::read_to_string(&target).map_err(read_err)?;
    let permissions = std::fs::metadata(&target).map_err(read_err)?.permissions();

    let kept = remove_lines(&content, &invalid_lines);

    // The temp file must live next to the README for the rename to be atomic
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(kept.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    std::fs::set_permissions(tmp.path(), permissions).map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;

    info!(path = %readme_path.display(), removed = invalid_lines.len(), "rewrote README");

    Ok(invalid_lines.len())
}

// Drops the given 1-indexed lines, keeping the rest untouched
//
// Line terminators stay attached to their lines, so "\r\n" files and a
// missing final newline survive the rewrite.
fn remove_lines(content: &str, line_nums: &HashSet<usize>) -> String {
    content
        .split_inclusive('\n')
        .enumerate()
        .filter(|(index, _)| !line_nums.contains(&(index + 1)))
        .map(|(_, line)| line)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why re-read the file instead of using the extracted lines?
//    - The extractor only kept the lines that matched the link pattern
//    - Everything else (headings, prose) must be written back unchanged
//
// 2. What does split_inclusive('\n') do?
//    - "a\nb" becomes ["a\n", "b"]: the separator stays on each piece
//    - .lines() would drop the separators and we'd have to guess them back
//
// 3. What is persist()?
//    - NamedTempFile deletes itself when dropped
//    - persist(path) renames it to `path` instead, so it survives
// -----------------------------------------------------------------------------
