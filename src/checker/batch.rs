// src/checker/batch.rs
// =============================================================================
// This module checks all extracted links with a bounded worker pool.
//
// How it works:
// 1. Every LinkEntry becomes one future: probe the link, then sleep
// 2. buffer_unordered(workers) runs at most `workers` of them at once
// 3. Outcomes come back in COMPLETION order, not README order
// 4. Each outcome is handed to a progress callback right away
//
// The sleep after each probe throttles the request rate no matter how many
// workers there are. Without a GitHub token we only get 60 API requests per
// hour, so the orchestrator picks few workers and a long delay.
//
// Rust concepts:
// - Streams: an async version of iterators
// - FnMut closures: the caller decides what "report progress" means
// =============================================================================

use futures::stream::{self, StreamExt};
use std::time::Duration;

use super::http::{CheckOutcome, LinkChecker};
use super::markdown::LinkEntry;

// Checks every entry exactly once and returns one outcome per entry
//
// Parameters:
//   checker: shared HTTP checker (client + token)
//   entries: the extracted links (consumed)
//   workers: maximum number of probes in flight
//   delay: pause after each probe, success or failure
//   on_progress: called as (completed, total, outcome) for every finished check
//
// Returns: all outcomes, in completion order
pub async fn check_all_links<F>(
    checker: &LinkChecker,
    entries: Vec<LinkEntry>,
    workers: usize,
    delay: Duration,
    mut on_progress: F,
) -> Vec<CheckOutcome>
where
    F: FnMut(usize, usize, &CheckOutcome),
{
    let total = entries.len();

    let checks = entries.into_iter().map(move |entry| async move {
        let outcome = checker.check_entry(entry).await;
        tokio::time::sleep(delay).await;
        outcome
    });

    // buffer_unordered(0) would never make progress
    let mut pending = stream::iter(checks).buffer_unordered(workers.max(1));

    let mut results = Vec::with_capacity(total);
    while let Some(outcome) = pending.next().await {
        on_progress(results.len() + 1, total, &outcome);
        results.push(outcome);
    }

    results
}

// Formats the progress lines for one finished check
//
// Valid:   "[3/10] ✓ name"            + "    url"
// Invalid: "[4/10] ✗ name - Not Found" + "    url"
pub fn format_progress(completed: usize, total: usize, outcome: &CheckOutcome) -> String {
    if outcome.is_valid {
        format!("[{}/{}] ✓ {}\n    {}", completed, total, outcome.name, outcome.url)
    } else {
        format!(
            "[{}/{}] ✗ {} - {}\n    {}",
            completed,
            total,
            outcome.name,
            outcome.error_info(),
            outcome.url
        )
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is buffer_unordered?
//    - It polls up to N futures at the same time
//    - Whichever finishes first is yielded first ("unordered")
//    - A new future is started as soon as a slot frees up
//
// 2. Why a callback instead of println! here?
//    - main.rs prints to the terminal, tests just record the calls
//    - FnMut lets the closure mutate what it captured (e.g. push to a Vec)
//
// 3. Why is there no Mutex around `results`?
//    - The stream hands outcomes back one at a time to this single loop
//    - Only the futures run concurrently, the collecting does not
// -----------------------------------------------------------------------------
