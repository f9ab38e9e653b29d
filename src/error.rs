// src/error.rs
// =============================================================================
// Typed errors for working with the README document.
//
// Everything that can go wrong while *checking* a link is turned into a
// CheckOutcome and never shows up here. These errors are only about the
// document itself: it is missing, it can't be read, or it can't be rewritten.
// All of them are fatal for the run.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// The README path does not exist
    #[error("README not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The README exists but could not be read as UTF-8 text
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the pruned README back failed
    #[error("failed to rewrite {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
