// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Extracts skill entries from the README
// - http: Checks a single link and classifies the answer
// - batch: Runs many checks concurrently with a bounded worker pool
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod batch;
mod http;
mod markdown;

// Re-export public items from submodules
// This lets users write `checker::check_all_links()` instead of
// `checker::batch::check_all_links()`
pub use batch::{check_all_links, format_progress};
pub use http::{CheckOutcome, LinkChecker};
pub use markdown::read_link_entries;
