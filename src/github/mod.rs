// src/github/mod.rs
// =============================================================================
// This module knows about GitHub URLs.
//
// Currently implements:
// - Recognising "tree" links (https://github.com/owner/repo/tree/branch/path)
// - Rewriting them to the contents API, which answers HEAD requests with a
//   real 404 when the file is gone
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod api;

// Re-export what the checker needs
pub use api::{contents_api_url, DEFAULT_API_BASE};
