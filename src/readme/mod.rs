// src/readme/mod.rs
// =============================================================================
// This module modifies the README document.
//
// Reading the README lives with the extractor (src/checker/markdown.rs);
// this side only deals with writing it back after invalid links are removed.
// =============================================================================

mod rewrite;

pub use rewrite::delete_invalid_lines;
