//! CLI output formatting.
//!
//! One line per processed file, then a summary with per-kind counts:
//!
//! ```text
//! ok       IMG_0012.jpg → IMG_0012.jpg, IMG_0012.jpg
//! skipped  beach.png
//! error    broken.jpg: Decode failed: ...
//!
//! Summary: 1 ok, 1 skipped, 1 error (3 total)
//! ```
//!
//! Each `format_*` function is pure and returns strings for testability;
//! `print_*` wrappers write to stdout. Outcome lines are printed one at a
//! time as the batch progresses (via the `on_outcome` hook on
//! [`crate::process::run`]); the summary follows once the run is done.
//! Reporting is purely observational — nothing here feeds back into
//! processing.

use crate::process::{Outcome, RunSummary};

/// Format one outcome as its report line.
///
/// The kind is left-padded so file names line up across kinds.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Ok {
            source,
            small,
            large,
        } => format!("{:<8} {} \u{2192} {}, {}", "ok", source, small, large),
        Outcome::Skipped { source } => format!("{:<8} {}", "skipped", source),
        Outcome::Error { source, message } => {
            format!("{:<8} {}: {}", "error", source, message)
        }
    }
}

/// Format the end-of-run summary line.
pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "Summary: {} ok, {} skipped, {} {} ({} total)",
        summary.ok,
        summary.skipped,
        summary.error,
        if summary.error == 1 { "error" } else { "errors" },
        summary.total()
    )
}

/// Print one outcome line; meant to be called per file during the run.
pub fn print_outcome(outcome: &Outcome) {
    println!("{}", format_outcome(outcome));
}

/// Print the summary, preceded by a blank line when any outcome lines came
/// before it.
pub fn print_summary(summary: &RunSummary) {
    if summary.total() > 0 {
        println!();
    }
    println!("{}", format_summary(summary));
}
