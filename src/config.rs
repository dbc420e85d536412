//! Run configuration.
//!
//! All CLI argument values are carried explicitly in a [`RunConfig`] — there
//! is no global or module-level state. Two [`DerivativeSpec`]s exist per run,
//! "small" and "large", each pairing a target directory with a maximum
//! long-edge pixel dimension.

use std::path::PathBuf;

/// One derivative set: where its files go and how large they may be.
#[derive(Debug, Clone)]
pub struct DerivativeSpec {
    /// Directory the derivative files are written to.
    pub dir: PathBuf,
    /// Maximum size of the longest edge in pixels. Never upscales.
    pub max_edge: u32,
}

impl DerivativeSpec {
    pub fn new(dir: impl Into<PathBuf>, max_edge: u32) -> Self {
        Self {
            dir: dir.into(),
            max_edge,
        }
    }
}

/// Configuration for one batch run, built from CLI flags.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory scanned for source photographs (no recursion).
    pub source: PathBuf,
    pub small: DerivativeSpec,
    pub large: DerivativeSpec,
}

impl Default for RunConfig {
    /// The stock layout: `images/` with `small/` and `large/` inside it.
    fn default() -> Self {
        Self {
            source: PathBuf::from("images"),
            small: DerivativeSpec::new("images/small", 1200),
            large: DerivativeSpec::new("images/large", 2400),
        }
    }
}
