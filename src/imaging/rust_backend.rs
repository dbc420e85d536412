//! Pure Rust image backend — everything statically linked.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | EXIF orientation | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (quality 82) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (default compression) |
//! | Encode → WebP | `webp` crate (libwebp, lossy, quality 82 / method 6) |
//!
//! HEIC/HEIF have no decoder in this stack; loading one returns a decode
//! error, which the pipeline reports as a per-file `error` outcome.

use super::backend::{BackendError, ImageBackend};
use super::params::{OutputFormat, Quality, WEBP_METHOD};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::borrow::Cow;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Pure Rust backend using the `image` crate ecosystem plus libwebp.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an image and bake in its EXIF orientation.
///
/// Format is sniffed from content, not trusted from the extension, so a
/// mislabeled file still decodes. The orientation tag is read before decoding
/// and applied to the pixel data afterwards; images without one (or whose
/// codec carries no metadata) pass through untouched.
fn load_oriented(path: &Path) -> Result<DynamicImage, BackendError> {
    let mut decoder = ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .into_decoder()
        .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))?;

    let orientation = decoder
        .orientation()
        .unwrap_or(Orientation::NoTransforms);

    let mut img = DynamicImage::from_decoder(decoder)
        .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Flatten any decoded mode to 8-bit RGB for JPEG encoding.
///
/// Palette, alpha, and 16-bit modes all collapse here; alpha is discarded
/// rather than composited against a background. Pure grayscale is widened to
/// RGB as well so every JPEG derivative has uniform three-channel data.
fn flatten_to_rgb(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageRgb8(_) => Cow::Borrowed(img),
        _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
    }
}

/// Reduce to one of the two pixel layouts libwebp accepts, keeping alpha.
fn webp_compatible(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => Cow::Borrowed(img),
        _ if img.color().has_alpha() => {
            Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
    }
}

fn save_jpeg(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let flattened = flatten_to_rgb(img);
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality.value() as u8);
    flattened
        .write_with_encoder(encoder)
        .map_err(|e| BackendError::Encode(format!("JPEG encode failed: {}", e)))
}

fn save_png(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = BufWriter::new(file);
    // Default compression is the zlib level-6 class of tradeoff
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Default, PngFilter::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::Encode(format!("PNG encode failed: {}", e)))
}

fn save_webp(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let compatible = webp_compatible(img);
    let encoder = webp::Encoder::from_image(&compatible)
        .map_err(|e| BackendError::Encode(format!("WebP encode failed: {}", e)))?;

    let mut config = webp::WebPConfig::new()
        .map_err(|_| BackendError::Encode("WebP config init failed".to_string()))?;
    config.quality = quality.value() as f32;
    config.method = WEBP_METHOD;

    let encoded = encoder
        .encode_advanced(&config)
        .map_err(|e| BackendError::Encode(format!("WebP encode failed: {:?}", e)))?;
    std::fs::write(path, &*encoded).map_err(BackendError::Io)
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        load_oriented(path)
    }

    fn save(
        &self,
        img: &DynamicImage,
        path: &Path,
        quality: Quality,
    ) -> Result<PathBuf, BackendError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match OutputFormat::from_extension(ext) {
            Some(OutputFormat::Jpeg) => {
                save_jpeg(img, path, quality)?;
                Ok(path.to_path_buf())
            }
            Some(OutputFormat::Png) => {
                save_png(img, path)?;
                Ok(path.to_path_buf())
            }
            Some(OutputFormat::WebP) => {
                save_webp(img, path, quality)?;
                Ok(path.to_path_buf())
            }
            // Not an encodable extension: force .jpg with JPEG settings
            None => {
                let fallback = path.with_extension("jpg");
                save_jpeg(img, &fallback, quality)?;
                Ok(fallback)
            }
        }
    }
}
