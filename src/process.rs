//! Per-file pipeline and batch driver.
//!
//! Each source file transitions exactly once through
//!
//! ```text
//! freshness-check → ( skip
//!                   | decode → resize ×2 → encode ×2 → ok
//!                   | error )
//! ```
//!
//! with no retries. Any failure while loading, transforming, or saving a
//! single file is caught here and converted into an [`Outcome::Error`] for
//! that file alone — the batch always continues. Only failures that make the
//! whole run impossible (unreadable source directory, uncreatable output
//! directories) propagate as [`ProcessError`].
//!
//! Output base names always equal input base names; the extension changes
//! only when the source format has no encoder, in which case both
//! derivatives become `.jpg`. The fallback extension is resolved *before*
//! the freshness check so `scan.tiff` is compared against the `scan.jpg`
//! files actually on disk.

use crate::config::RunConfig;
use crate::freshness;
use crate::imaging::{BackendError, ImageBackend, WEB_QUALITY, output_extension, resize_to_fit};
use crate::scan;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The result of pushing one source file through the pipeline.
///
/// All names are bare file names, not paths — the reporter's audience knows
/// which directories the run was pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Both derivatives written.
    Ok {
        source: String,
        small: String,
        large: String,
    },
    /// Both derivatives existed and were at least as new as the source.
    Skipped { source: String },
    /// Decode, transform, or write failed; siblings are unaffected.
    Error { source: String, message: String },
}

impl Outcome {
    pub fn source(&self) -> &str {
        match self {
            Outcome::Ok { source, .. }
            | Outcome::Skipped { source }
            | Outcome::Error { source, .. } => source,
        }
    }
}

/// Counts of per-file outcomes for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ok: u32,
    pub skipped: u32,
    pub error: u32,
}

impl RunSummary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Ok { .. } => self.ok += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Error { .. } => self.error += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.ok + self.skipped + self.error
    }
}

/// Everything one batch run produced, in processing order.
#[derive(Debug)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
    pub summary: RunSummary,
}

/// Run the full batch: scan the source directory and process every file.
///
/// Output directories are created up front. Files are processed one at a
/// time in directory-listing order; the order is filesystem-dependent and
/// not guaranteed stable across runs.
///
/// `on_outcome` is invoked right after each file finishes, so callers can
/// report progress while a long batch is still running rather than waiting
/// for the final [`RunReport`].
pub fn run(
    backend: &impl ImageBackend,
    config: &RunConfig,
    mut on_outcome: impl FnMut(&Outcome),
) -> Result<RunReport, ProcessError> {
    fs::create_dir_all(&config.small.dir)?;
    fs::create_dir_all(&config.large.dir)?;

    let sources = scan::scan(&config.source)?;

    let mut outcomes = Vec::with_capacity(sources.len());
    let mut summary = RunSummary::default();
    for source in &sources {
        let outcome = process_file(backend, source, config);
        summary.record(&outcome);
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    Ok(RunReport { outcomes, summary })
}

/// Process a single source file into its two derivatives.
///
/// Never fails: every error becomes an [`Outcome::Error`] carrying the
/// failure message.
pub fn process_file(backend: &impl ImageBackend, source: &Path, config: &RunConfig) -> Outcome {
    let source_name = file_name(source);
    match try_process(backend, source, config) {
        Ok(outcome) => outcome,
        Err(e) => Outcome::Error {
            source: source_name,
            message: e.to_string(),
        },
    }
}

fn try_process(
    backend: &impl ImageBackend,
    source: &Path,
    config: &RunConfig,
) -> Result<Outcome, BackendError> {
    let source_name = file_name(source);

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_name.clone());
    let source_ext = source.extension().and_then(|e| e.to_str()).unwrap_or("");
    let out_name = format!("{}.{}", stem, output_extension(source_ext));

    let small_out = config.small.dir.join(&out_name);
    let large_out = config.large.dir.join(&out_name);

    if freshness::derivatives_fresh(source, &[&small_out, &large_out]) {
        return Ok(Outcome::Skipped {
            source: source_name,
        });
    }

    let img = backend.load(source)?;

    // Both sizes are cut from the same decoded image; resize_to_fit copies,
    // so neither derivative sees the other's scaling.
    let small = resize_to_fit(&img, config.small.max_edge);
    let large = resize_to_fit(&img, config.large.max_edge);

    let small_written = backend.save(&small, &small_out, WEB_QUALITY)?;
    let large_written = backend.save(&large, &large_out, WEB_QUALITY)?;

    Ok(Outcome::Ok {
        source: source_name,
        small: file_name(&small_written),
        large: file_name(&large_written),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
