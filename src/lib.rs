//! # thumbgen
//!
//! Batch-converts a directory of source photographs into two resized
//! derivative sets — "small" and "large" — for web display. Output base names
//! match input base names so a gallery can map small → large automatically;
//! formats outside the web set (HEIC, TIFF, ...) are normalized to JPEG.
//!
//! # Pipeline
//!
//! Each source file moves through one sequential pipeline:
//!
//! ```text
//! scan → freshness check → ( skip
//!                          | decode (+EXIF orientation)
//!                            → resize ×2 → encode ×2 → ok
//!                          | error )
//! ```
//!
//! Files are processed one at a time in directory-listing order. A failure on
//! one file becomes an `error` outcome for that file only; the batch always
//! runs to completion. The only persisted state is the output images
//! themselves — their filesystem mtimes double as the freshness cache, so a
//! second run over unchanged sources reports every file as skipped.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Run configuration: source dir plus the two derivative specs |
//! | [`scan`] | Flat directory listing filtered by the source-extension allow-list |
//! | [`freshness`] | mtime comparison between a source and its derivatives |
//! | [`imaging`] | Pure-Rust decode, orientation, resize, and encode |
//! | [`process`] | Per-file pipeline and batch driver; outcome aggregation |
//! | [`output`] | CLI output formatting — one line per outcome, final summary |
//!
//! # Design Decisions
//!
//! ## Pure-Rust imaging, lossy WebP via libwebp
//!
//! Decode, resize (Lanczos3), and JPEG/PNG encoding use the `image` crate.
//! WebP output goes through the `webp` crate because the `image` crate only
//! writes lossless WebP and derivatives want the lossy quality-82 encode.
//!
//! ## Alpha is discarded, not composited
//!
//! When a transparent source (RGBA PNG, LA grayscale) ends up as JPEG, the
//! alpha channel is dropped rather than flattened against a background color.
//! PNG and WebP outputs keep the decoded mode, so transparency survives
//! whenever the output format supports it.
//!
//! ## Exit code reflects failures
//!
//! The process exits nonzero when any file produced an `error` outcome, so CI
//! and shell scripts can detect partial failures. Individual errors still
//! never abort the batch.

pub mod config;
pub mod freshness;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;
