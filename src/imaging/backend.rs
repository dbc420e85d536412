//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait covers the two I/O-bound operations of the
//! pipeline: loading (decode + orientation) and saving (encode + write).
//! Resizing is a pure in-memory transform and lives in
//! [`operations`](super::operations) — it needs no backend and no mocking.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use the recording
//! `MockBackend` below so pipeline logic can be exercised without encoding a
//! single pixel.

use super::params::Quality;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Trait for image load/save backends.
pub trait ImageBackend {
    /// Decode a source file and apply its EXIF orientation, so the returned
    /// pixel data is upright and the orientation tag is implicit.
    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Encode `img` to `path`, with settings chosen by the path's extension.
    ///
    /// Extensions without an encoder fall back to `.jpg`; the path actually
    /// written is returned and may differ from the requested one.
    fn save(
        &self,
        img: &DynamicImage,
        path: &Path,
        quality: Quality,
    ) -> Result<PathBuf, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that serves synthetic images and records saves.
    ///
    /// `load` pops preset dimensions and returns a solid RGB image of that
    /// size; when the preset list runs dry the load fails, which doubles as
    /// the corrupt-file case.
    #[derive(Default)]
    pub struct MockBackend {
        pub load_dimensions: Mutex<Vec<(u32, u32)>>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Load(String),
        Save {
            path: String,
            width: u32,
            height: u32,
            quality: u32,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Dimensions are popped from the back, one per `load` call.
        pub fn with_dimensions(dims: Vec<(u32, u32)>) -> Self {
            Self {
                load_dimensions: Mutex::new(dims),
                operations: Mutex::new(Vec::new()),
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        /// Paths of all recorded saves, in call order.
        pub fn saved_paths(&self) -> Vec<String> {
            self.get_operations()
                .into_iter()
                .filter_map(|op| match op {
                    RecordedOp::Save { path, .. } => Some(path),
                    _ => None,
                })
                .collect()
        }
    }

    impl ImageBackend for MockBackend {
        fn load(&self, path: &Path) -> Result<DynamicImage, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Load(path.to_string_lossy().into_owned()));

            let (w, h) = self
                .load_dimensions
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| BackendError::Decode("no mock image".to_string()))?;
            Ok(DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
                w,
                h,
                image::Rgb([128, 128, 128]),
            )))
        }

        fn save(
            &self,
            img: &DynamicImage,
            path: &Path,
            quality: Quality,
        ) -> Result<PathBuf, BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Save {
                path: path.to_string_lossy().into_owned(),
                width: img.width(),
                height: img.height(),
                quality: quality.value(),
            });
            Ok(path.to_path_buf())
        }
    }

    #[test]
    fn mock_serves_preset_dimensions() {
        let backend = MockBackend::with_dimensions(vec![(800, 600)]);
        let img = backend.load(Path::new("/test/image.jpg")).unwrap();
        assert_eq!((img.width(), img.height()), (800, 600));

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Load(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_load_fails_when_presets_exhausted() {
        let backend = MockBackend::new();
        let result = backend.load(Path::new("/test/corrupt.jpg"));
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[test]
    fn mock_records_save_dimensions_and_quality() {
        let backend = MockBackend::new();
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(120, 80));

        let written = backend
            .save(&img, Path::new("/out/a.webp"), Quality::new(82))
            .unwrap();
        assert_eq!(written, Path::new("/out/a.webp"));

        let ops = backend.get_operations();
        assert!(matches!(
            &ops[0],
            RecordedOp::Save {
                width: 120,
                height: 80,
                quality: 82,
                ..
            }
        ));
    }
}
