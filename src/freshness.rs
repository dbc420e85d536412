//! Derivative freshness checking.
//!
//! A derivative is fresh when its modification time is not older than its
//! source's — equality counts as fresh, so re-running immediately after a
//! build does not recompress anything. The filesystem mtimes are the whole
//! cache: there is no manifest and nothing to invalidate beyond touching a
//! source file.
//!
//! Clock skew and filesystem timestamp truncation can produce false "fresh"
//! results; the fix for that would be a content-addressed cache keyed by
//! source hash plus resize parameters, which this tool deliberately omits.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Whether every derivative exists and is at least as new as the source.
///
/// Missing or unreadable derivatives count as stale. A source whose own
/// mtime cannot be read is treated as stale too, so it gets reprocessed and
/// any real I/O problem surfaces in the decode step.
pub fn derivatives_fresh(source: &Path, derivatives: &[&Path]) -> bool {
    let Some(source_mtime) = mtime(source) else {
        return false;
    };
    derivatives
        .iter()
        .all(|path| mtime(path).is_some_and(|m| m >= source_mtime))
}

fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
