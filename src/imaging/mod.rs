//! Image processing — pure Rust, zero external binaries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode + orientation** | `image` crate decoders + `apply_orientation` |
//! | **Resize** | Lanczos3 via [`resize_to_fit`] |
//! | **Encode JPEG/PNG** | `image` crate encoders |
//! | **Encode WebP** | `webp` crate (libwebp, lossy) |
//!
//! The module is split into:
//! - **Calculations**: pure dimension math (unit testable without I/O)
//! - **Parameters**: quality/format types and fixed encode settings
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: in-memory transforms shared by both derivative sizes

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::fit_within;
pub use operations::resize_to_fit;
pub use params::{OutputFormat, Quality, WEB_QUALITY, output_extension};
pub use rust_backend::RustBackend;
