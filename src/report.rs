// src/report.rs
// =============================================================================
// Summary numbers and the optional JSON report.
//
// Outcomes arrive in completion order, which changes from run to run. The
// JSON report sorts them by README line so two runs can be diffed.
// =============================================================================

use crate::checker::CheckOutcome;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub valid: usize,
    pub invalid: usize,
    pub deleted: usize,
    pub results: Vec<&'a CheckOutcome>,
}

impl<'a> Report<'a> {
    pub fn new(results: &'a [CheckOutcome], deleted: usize) -> Self {
        let valid = results.iter().filter(|r| r.is_valid).count();

        let mut sorted: Vec<&CheckOutcome> = results.iter().collect();
        sorted.sort_by_key(|r| r.line_num);

        Report {
            valid,
            invalid: results.len() - valid,
            deleted,
            results: sorted,
        }
    }
}
