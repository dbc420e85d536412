//! Parameter types and fixed encode settings.
//!
//! These types describe *what* to write, not *how* — they sit between the
//! [`process`](crate::process) pipeline (which decides which derivatives to
//! make) and the [`backend`](super::backend) (which does the pixel work).
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100). Clamped on construction.
//! - [`OutputFormat`] — The three encodable web formats, derived from an
//!   output path's extension with a JPEG fallback for everything else.

/// Quality used for lossy JPEG and WebP derivatives.
pub const WEB_QUALITY: Quality = Quality(82);

/// WebP compression effort (libwebp `method`, 0–6; 6 = slowest/smallest).
pub const WEBP_METHOD: i32 = 6;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        WEB_QUALITY
    }
}

/// Encodable output format, keyed by output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// Map an extension to its format. `None` for anything we cannot encode
    /// (HEIC, TIFF, ...) — those fall back to JPEG at the path level via
    /// [`output_extension`].
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }
}

/// The extension a derivative of the given source extension gets.
///
/// Encodable extensions are kept (lowercased, `jpeg` spelling preserved so
/// the output stem+extension mirrors the source); everything else becomes
/// `jpg`. This runs before the freshness check so that `photo.TIF` is
/// compared against `photo.jpg` on disk.
pub fn output_extension(source_ext: &str) -> &'static str {
    match source_ext.to_ascii_lowercase().as_str() {
        "jpg" => "jpg",
        "jpeg" => "jpeg",
        "png" => "png",
        "webp" => "webp",
        _ => "jpg",
    }
}
